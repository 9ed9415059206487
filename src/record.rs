/// Screener Record Model
///
/// A Record is one row of the screener dataset. The schema is fixed: every
/// field is either text or a number, and the field's name alone determines
/// its type. Records are immutable once they are part of a source dataset;
/// the query engine only ever reads them.

use serde::{Deserialize, Serialize};

/// The two value shapes a schema field can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Number,
}

/// Names of the schema fields.
///
/// Wire names use camel-case spelling (e.g. `bookValuePerShare`), which is
/// also what [`wire_name`] returns.
///
/// [`wire_name`]: FieldName::wire_name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Ticker,
    Industry,
    Sector,
    BookValuePerShare,
    MarketCap,
    Debt,
}

impl FieldName {
    /// All schema fields in column order.
    pub const ALL: [FieldName; 6] = [
        FieldName::Ticker,
        FieldName::Industry,
        FieldName::Sector,
        FieldName::BookValuePerShare,
        FieldName::MarketCap,
        FieldName::Debt,
    ];

    /// Returns the type of this field.
    ///
    /// `marketCap` and `debt` hold percentage strings ("90%"), so they are
    /// text fields even though they look numeric.
    pub fn field_type(self) -> FieldType {
        match self {
            FieldName::BookValuePerShare => FieldType::Number,
            _ => FieldType::Text,
        }
    }

    /// Returns the camel-case wire name for this field.
    pub fn wire_name(self) -> &'static str {
        match self {
            FieldName::Ticker => "ticker",
            FieldName::Industry => "industry",
            FieldName::Sector => "sector",
            FieldName::BookValuePerShare => "bookValuePerShare",
            FieldName::MarketCap => "marketCap",
            FieldName::Debt => "debt",
        }
    }
}

/// A borrowed view of one field of one record.
///
/// This is the single access point used by both the predicate evaluator and
/// the sort comparator, so the field-to-type mapping lives in exactly one
/// place ([`Record::field`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl FieldValue<'_> {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(v) => Some(*v),
            _ => None,
        }
    }
}

/// One row of the screener dataset.
///
/// # Examples
///
/// ```
/// use screener::{FieldName, FieldValue, Record};
///
/// let record = Record::new("AAPL", "Packaged Software", "Manufacturing", 200.0, "10%", "90%");
/// assert_eq!(record.field(FieldName::Ticker), FieldValue::Text("AAPL"));
/// assert_eq!(record.field(FieldName::BookValuePerShare), FieldValue::Number(200.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub ticker: String,
    pub industry: String,
    pub sector: String,
    pub book_value_per_share: f64,
    pub market_cap: String,
    pub debt: String,
}

impl Record {
    pub fn new(
        ticker: impl Into<String>,
        industry: impl Into<String>,
        sector: impl Into<String>,
        book_value_per_share: f64,
        market_cap: impl Into<String>,
        debt: impl Into<String>,
    ) -> Self {
        Record {
            ticker: ticker.into(),
            industry: industry.into(),
            sector: sector.into(),
            book_value_per_share,
            market_cap: market_cap.into(),
            debt: debt.into(),
        }
    }

    /// Returns the value of the named field.
    pub fn field(&self, field: FieldName) -> FieldValue<'_> {
        match field {
            FieldName::Ticker => FieldValue::Text(&self.ticker),
            FieldName::Industry => FieldValue::Text(&self.industry),
            FieldName::Sector => FieldValue::Text(&self.sector),
            FieldName::BookValuePerShare => FieldValue::Number(self.book_value_per_share),
            FieldName::MarketCap => FieldValue::Text(&self.market_cap),
            FieldName::Debt => FieldValue::Text(&self.debt),
        }
    }
}
