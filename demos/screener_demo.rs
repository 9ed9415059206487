/// Screener Walkthrough
///
/// This example demonstrates:
/// - Creating a query engine over a fixed dataset
/// - Adding and removing filters
/// - Setting and clearing the sort rule
/// - Rendering filter chips with the display labels

use screener::{
    field_label, operator_label, FieldName, FilterOperator, QueryEngine, Record, SortDirection,
};

fn print_view(engine: &QueryEngine) {
    println!(
        "   {:<8} {:<20} {:<15} {:>6} {:>10} {:>6}",
        "Ticker", "Industry", "Sector", "BVPS", "MarketCap", "Debt"
    );
    for record in engine.view() {
        println!(
            "   {:<8} {:<20} {:<15} {:>6} {:>10} {:>6}",
            record.ticker,
            record.industry,
            record.sector,
            record.book_value_per_share,
            record.market_cap,
            record.debt
        );
    }
    println!();
}

fn main() {
    println!("=== Screener Query Engine Example ===\n");

    let source = vec![
        Record::new("AAPL", "Packaged Software", "Manufacturing", 200.0, "10%", "90%"),
        Record::new("ROKU", "Packaged Software", "Technology", 200.0, "10%", "75%"),
        Record::new("U", "Packaged Software", "Finance", 200.0, "10%", "85%"),
        Record::new("AAPL", "Packaged Software", "Manufacturing", 200.0, "10%", "70%"),
        Record::new("SHOP", "Services", "Finance", 200.0, "10%", "80%"),
        Record::new("ROKU", "Services", "Finance", 200.0, "10%", "90%"),
        Record::new("AAPL", "Services", "Manufacturing", 200.0, "10%", "80%"),
        Record::new("INMD", "Services", "Technology", 200.0, "10%", "90%"),
    ];

    println!("1. Creating engine over {} records...", source.len());
    let mut engine = QueryEngine::new(source);
    print_view(&engine);

    println!("2. Filtering: industry equals \"Services\"...");
    engine.add_filter(FieldName::Industry, FilterOperator::Equals, "Services");
    print_view(&engine);

    println!("3. Sorting by ticker, ascending...");
    engine.set_sort(FieldName::Ticker, SortDirection::Ascending);
    print_view(&engine);

    println!("4. Active filter chips:");
    for filter in engine.filters() {
        println!(
            "   [{} {} \"{}\"]",
            field_label(filter.field),
            operator_label(filter.operator),
            filter.value
        );
    }
    println!();

    println!("5. Removing the filter (sort stays active)...");
    engine.remove_filter(0).unwrap();
    print_view(&engine);

    println!("6. Clearing the sort...");
    engine.clear_sort();
    print_view(&engine);

    println!("   View equals the source dataset again: {}", engine.view() == engine.source());
}
