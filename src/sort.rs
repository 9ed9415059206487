//! The single active sort rule and its comparator.
//!
//! The engine runs a single-key sort: at most one [`SortSpec`] is active at
//! a time. Extending to multi-key sorting would mean an ordered sequence of
//! specs with lexicographic comparator composition, keeping this single-key
//! path as the length-1 case.

use crate::record::{FieldName, FieldValue, Record};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Applies this direction to a base ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// The active ordering rule: one field, one direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: FieldName,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: FieldName, direction: SortDirection) -> Self {
        SortSpec { field, direction }
    }

    /// Creates an ascending sort on the given field.
    pub fn ascending(field: FieldName) -> Self {
        SortSpec::new(field, SortDirection::Ascending)
    }

    /// Creates a descending sort on the given field.
    pub fn descending(field: FieldName) -> Self {
        SortSpec::new(field, SortDirection::Descending)
    }

    /// Compares two records on the sort field.
    ///
    /// Text fields compare lexically, number fields arithmetically. A pair
    /// whose values are not both the expected shape compares equal, so a
    /// stable sort leaves that pair in its input order.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        let base = match (a.field(self.field), b.field(self.field)) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Number(a), FieldValue::Number(b)) => {
                a.partial_cmp(&b).unwrap_or(Ordering::Equal)
            }
            _ => Ordering::Equal,
        };
        self.direction.apply(base)
    }
}
