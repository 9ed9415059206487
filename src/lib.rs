/// Screener - Interactive Filter/Sort Table Core
///
/// An in-memory query core for interactive data tables: user-added filter
/// predicates compose conjunctively, at most one sort rule is active, and
/// the displayed view is always recomputed from the original source rows.

pub mod record;
pub mod filter;
pub mod sort;
pub mod engine;
pub mod label;

pub use record::{FieldName, FieldType, FieldValue, Record};
pub use filter::{FilterOperator, FilterSpec};
pub use sort::{SortDirection, SortSpec};
pub use engine::QueryEngine;
pub use label::{field_label, operator_label, search_fields};
