//! Predicate evaluation for active filters.
//!
//! A [`FilterSpec`] is one user-added predicate: a field, an operator, and
//! the value as the user typed it. Evaluation coerces the stored value to
//! the field's type; nothing is validated per evaluation. Which operators
//! make sense for a field is a construction-time concern, answered by
//! [`FilterOperator::for_field_type`].

use crate::record::{FieldName, FieldType, FieldValue, Record};
use serde::{Deserialize, Serialize};

/// Comparison operators available to filters.
///
/// Text fields use `Equals`, `Contains` and `StartsWith`; number fields use
/// `Equals`, `GreaterThan` and `LessThan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterOperator {
    Equals,
    Contains,
    StartsWith,
    #[serde(rename = "greater")]
    GreaterThan,
    #[serde(rename = "less")]
    LessThan,
}

impl FilterOperator {
    /// Returns the operators valid for fields of the given type.
    ///
    /// Callers building filter UIs should offer only these; a spec built
    /// with an operator outside this set still evaluates (see
    /// [`FilterSpec::matches`]), it just hits the pass-through branch.
    pub fn for_field_type(field_type: FieldType) -> &'static [FilterOperator] {
        match field_type {
            FieldType::Number => &[
                FilterOperator::Equals,
                FilterOperator::GreaterThan,
                FilterOperator::LessThan,
            ],
            FieldType::Text => &[
                FilterOperator::Equals,
                FilterOperator::Contains,
                FilterOperator::StartsWith,
            ],
        }
    }
}

/// A single predicate over one field.
///
/// The value is kept as entered and coerced when evaluated. Specs are
/// immutable once added to a query; removing and re-adding is the only way
/// to change one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub field: FieldName,
    pub operator: FilterOperator,
    pub value: String,
}

impl FilterSpec {
    pub fn new(field: FieldName, operator: FilterOperator, value: impl Into<String>) -> Self {
        FilterSpec {
            field,
            operator,
            value: value.into(),
        }
    }

    /// Decides whether a record satisfies this predicate.
    ///
    /// Text comparisons are case-insensitive. Number comparisons parse the
    /// stored value as f64; an unparseable value becomes NaN, so every
    /// comparison below is false and the filter matches nothing.
    ///
    /// An operator outside the field type's valid set falls through to
    /// `true` (the record passes). This pass-through default is part of the
    /// evaluation contract and is pinned by tests.
    pub fn matches(&self, record: &Record) -> bool {
        match record.field(self.field) {
            FieldValue::Text(text) => {
                let text = text.to_lowercase();
                let wanted = self.value.to_lowercase();
                match self.operator {
                    FilterOperator::Equals => text == wanted,
                    FilterOperator::Contains => text.contains(&wanted),
                    FilterOperator::StartsWith => text.starts_with(&wanted),
                    _ => true,
                }
            }
            FieldValue::Number(number) => {
                let wanted = self.value.parse::<f64>().unwrap_or(f64::NAN);
                match self.operator {
                    FilterOperator::Equals => number == wanted,
                    FilterOperator::GreaterThan => number > wanted,
                    FilterOperator::LessThan => number < wanted,
                    _ => true,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record::new("AAPL", "Packaged Software", "Manufacturing", 200.0, "10%", "90%")
    }

    #[test]
    fn test_text_equals_case_insensitive() {
        let spec = FilterSpec::new(FieldName::Industry, FilterOperator::Equals, "packaged software");
        assert!(spec.matches(&record()));

        let spec = FilterSpec::new(FieldName::Industry, FilterOperator::Equals, "Services");
        assert!(!spec.matches(&record()));
    }

    #[test]
    fn test_text_contains() {
        let spec = FilterSpec::new(FieldName::Industry, FilterOperator::Contains, "software");
        assert!(spec.matches(&record()));

        let spec = FilterSpec::new(FieldName::Industry, FilterOperator::Contains, "hardware");
        assert!(!spec.matches(&record()));
    }

    #[test]
    fn test_text_starts_with() {
        let spec = FilterSpec::new(FieldName::Ticker, FilterOperator::StartsWith, "aa");
        assert!(spec.matches(&record()));

        let spec = FilterSpec::new(FieldName::Ticker, FilterOperator::StartsWith, "pl");
        assert!(!spec.matches(&record()));
    }

    #[test]
    fn test_number_comparisons() {
        let field = FieldName::BookValuePerShare;

        assert!(FilterSpec::new(field, FilterOperator::Equals, "200").matches(&record()));
        assert!(!FilterSpec::new(field, FilterOperator::Equals, "100").matches(&record()));

        assert!(FilterSpec::new(field, FilterOperator::GreaterThan, "100").matches(&record()));
        assert!(!FilterSpec::new(field, FilterOperator::GreaterThan, "200").matches(&record()));

        assert!(FilterSpec::new(field, FilterOperator::LessThan, "300").matches(&record()));
        assert!(!FilterSpec::new(field, FilterOperator::LessThan, "200").matches(&record()));
    }

    #[test]
    fn test_unparseable_number_matches_nothing() {
        // NaN comparisons are all false, so the filter excludes every record
        // instead of raising an error.
        let field = FieldName::BookValuePerShare;
        for operator in [
            FilterOperator::Equals,
            FilterOperator::GreaterThan,
            FilterOperator::LessThan,
        ] {
            let spec = FilterSpec::new(field, operator, "not a number");
            assert!(!spec.matches(&record()));
        }
    }

    #[test]
    fn test_ordering_operator_on_text_field_passes_through() {
        // Known edge case: a numeric operator reaching a text field
        // returns true for every record rather than erroring. "debt"
        // stores percentage strings, so this is the reachable example.
        let spec = FilterSpec::new(FieldName::Debt, FilterOperator::GreaterThan, "80");
        assert!(spec.matches(&record()));

        let spec = FilterSpec::new(FieldName::Debt, FilterOperator::LessThan, "80");
        assert!(spec.matches(&record()));
    }

    #[test]
    fn test_text_operator_on_number_field_passes_through() {
        // Same pass-through default on the number side.
        let spec = FilterSpec::new(FieldName::BookValuePerShare, FilterOperator::Contains, "20");
        assert!(spec.matches(&record()));

        let spec = FilterSpec::new(FieldName::BookValuePerShare, FilterOperator::StartsWith, "9");
        assert!(spec.matches(&record()));
    }

    #[test]
    fn test_operator_sets_per_field_type() {
        assert_eq!(
            FilterOperator::for_field_type(FieldType::Number),
            &[
                FilterOperator::Equals,
                FilterOperator::GreaterThan,
                FilterOperator::LessThan,
            ]
        );
        assert_eq!(
            FilterOperator::for_field_type(FieldType::Text),
            &[
                FilterOperator::Equals,
                FilterOperator::Contains,
                FilterOperator::StartsWith,
            ]
        );
    }

    #[test]
    fn test_filter_spec_serde() {
        let spec = FilterSpec::new(FieldName::Debt, FilterOperator::GreaterThan, "80");
        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(
            json,
            "{\"field\":\"debt\",\"operator\":\"greater\",\"value\":\"80\"}"
        );

        let back: FilterSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }
}
