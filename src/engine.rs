/// Screener Query Engine
///
/// The engine owns the active query (an ordered list of filters plus an
/// optional sort) and the derived view computed from it. The one invariant
/// that matters: every recompute restarts from the original source rows,
/// never from the previously published view. Derived state is a pure
/// function of (source, active query), so there is no stale state to patch.
///
/// # Examples
///
/// ```
/// use screener::{FieldName, FilterOperator, QueryEngine, Record, SortDirection};
///
/// let source = vec![
///     Record::new("ROKU", "Services", "Finance", 200.0, "10%", "75%"),
///     Record::new("AAPL", "Services", "Manufacturing", 200.0, "10%", "90%"),
///     Record::new("U", "Packaged Software", "Finance", 200.0, "10%", "85%"),
/// ];
///
/// let mut engine = QueryEngine::new(source);
/// engine.add_filter(FieldName::Industry, FilterOperator::Equals, "Services");
/// engine.set_sort(FieldName::Ticker, SortDirection::Ascending);
///
/// let tickers: Vec<&str> = engine.view().iter().map(|r| r.ticker.as_str()).collect();
/// assert_eq!(tickers, ["AAPL", "ROKU"]);
/// ```

use crate::filter::{FilterOperator, FilterSpec};
use crate::record::{FieldName, Record};
use crate::sort::{SortDirection, SortSpec};

/// Owns the source dataset, the active query, and the derived view.
pub struct QueryEngine {
    source: Vec<Record>,
    filters: Vec<FilterSpec>,
    sort: Option<SortSpec>,
    view: Vec<Record>,
}

impl QueryEngine {
    /// Creates an engine over the given source rows with an empty query.
    /// The initial view is the source dataset in its original order.
    pub fn new(source: Vec<Record>) -> Self {
        let view = source.clone();
        QueryEngine {
            source,
            filters: Vec::new(),
            sort: None,
            view,
        }
    }

    /// Appends a filter and recomputes the view.
    ///
    /// An empty value is rejected silently: no filter is added and the view
    /// does not change. Operator/field compatibility is the caller's
    /// concern ([`FilterOperator::for_field_type`]); an incompatible pair
    /// still evaluates, via the pass-through default in
    /// [`FilterSpec::matches`](crate::FilterSpec::matches).
    pub fn add_filter(
        &mut self,
        field: FieldName,
        operator: FilterOperator,
        value: impl Into<String>,
    ) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        self.filters.push(FilterSpec::new(field, operator, value));
        self.recompute();
    }

    /// Removes the filter at the given position and recomputes the view.
    ///
    /// When the last filter goes away and no sort is active, the view
    /// resets to the source dataset exactly (the explicit base case).
    pub fn remove_filter(&mut self, index: usize) -> Result<(), String> {
        if index >= self.filters.len() {
            return Err(format!(
                "Filter index {} out of range [0, {})",
                index,
                self.filters.len()
            ));
        }
        self.filters.remove(index);

        if self.filters.is_empty() && self.sort.is_none() {
            self.view = self.source.clone();
        } else {
            self.recompute();
        }
        Ok(())
    }

    /// Sets the active sort, replacing any existing one, and recomputes.
    /// Only one sort rule is active at a time.
    pub fn set_sort(&mut self, field: FieldName, direction: SortDirection) {
        self.sort = Some(SortSpec::new(field, direction));
        self.recompute();
    }

    /// Clears the active sort and re-applies the remaining filters from
    /// source. The filter list is untouched.
    pub fn clear_sort(&mut self) {
        self.sort = None;
        self.recompute();
    }

    /// Recomputes the view with the unchanged query. The result is
    /// identical to the current view; callers use this to re-derive after
    /// replacing nothing.
    pub fn refresh(&mut self) {
        self.recompute();
    }

    /// The derived view: the rows to display, in display order.
    pub fn view(&self) -> &[Record] {
        &self.view
    }

    /// The original source rows, in their original order.
    pub fn source(&self) -> &[Record] {
        &self.source
    }

    /// The active filters in insertion order (= application order).
    pub fn filters(&self) -> &[FilterSpec] {
        &self.filters
    }

    /// The active sort rule, if any.
    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// Number of rows in the derived view.
    pub fn len(&self) -> usize {
        self.view.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// Rebuilds the view from scratch: start from the full source, narrow
    /// through each filter in insertion order, then stable-sort.
    ///
    /// Filtering runs before sorting. With duplicate sort keys the stable
    /// sort preserves the filtered iteration order, so flipping the two
    /// passes would change tie-break order.
    fn recompute(&mut self) {
        let mut rows = self.source.clone();

        for filter in &self.filters {
            rows.retain(|record| filter.matches(record));
        }

        if let Some(sort) = &self.sort {
            rows.sort_by(|a, b| sort.compare(a, b));
        }

        self.view = rows;
    }
}
