//! Display-only labels for fields and operators.
//!
//! Nothing here affects filtering or sorting semantics; these helpers exist
//! for callers rendering field pickers, filter chips, and the sort
//! indicator. Field identity stays with [`FieldName`]; only the label text
//! lives here.

use crate::filter::FilterOperator;
use crate::record::FieldName;

/// Returns the human-readable label for a field.
///
/// Camel-case wire names are split at word boundaries and the first letter
/// is capitalized ("marketCap" -> "Market Cap"). `bookValuePerShare` keeps
/// its hardcoded full label.
pub fn field_label(field: FieldName) -> String {
    if field == FieldName::BookValuePerShare {
        return "Book Value Per Share".to_string();
    }

    let wire = field.wire_name();
    let mut label = String::with_capacity(wire.len() + 4);
    for (i, c) in wire.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            label.push(' ');
            label.push(c);
        } else {
            label.push(c);
        }
    }
    label
}

/// Returns the human-readable label for an operator.
pub fn operator_label(operator: FilterOperator) -> &'static str {
    match operator {
        FilterOperator::Equals => "Equals",
        FilterOperator::Contains => "Contains",
        FilterOperator::StartsWith => "Starts with",
        FilterOperator::GreaterThan => "Greater than",
        FilterOperator::LessThan => "Less than",
    }
}

/// Returns the fields whose wire name contains the search term,
/// case-insensitively, in column order. An empty term matches every field.
pub fn search_fields(term: &str) -> Vec<FieldName> {
    let term = term.to_lowercase();
    FieldName::ALL
        .iter()
        .filter(|field| field.wire_name().to_lowercase().contains(&term))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_labels() {
        assert_eq!(field_label(FieldName::Ticker), "Ticker");
        assert_eq!(field_label(FieldName::Industry), "Industry");
        assert_eq!(field_label(FieldName::Sector), "Sector");
        assert_eq!(field_label(FieldName::MarketCap), "Market Cap");
        assert_eq!(field_label(FieldName::Debt), "Debt");
    }

    #[test]
    fn test_book_value_override() {
        // The generic splitter would produce "Book Value Per Share" too,
        // but the override is pinned so the label survives a rename of the
        // wire name.
        assert_eq!(field_label(FieldName::BookValuePerShare), "Book Value Per Share");
    }

    #[test]
    fn test_operator_labels() {
        assert_eq!(operator_label(FilterOperator::Equals), "Equals");
        assert_eq!(operator_label(FilterOperator::Contains), "Contains");
        assert_eq!(operator_label(FilterOperator::StartsWith), "Starts with");
        assert_eq!(operator_label(FilterOperator::GreaterThan), "Greater than");
        assert_eq!(operator_label(FilterOperator::LessThan), "Less than");
    }

    #[test]
    fn test_search_fields() {
        assert_eq!(search_fields(""), FieldName::ALL.to_vec());
        assert_eq!(search_fields("TICK"), vec![FieldName::Ticker]);
        assert_eq!(
            search_fields("sec"),
            vec![FieldName::Sector]
        );
        assert!(search_fields("nonexistent").is_empty());
    }
}
