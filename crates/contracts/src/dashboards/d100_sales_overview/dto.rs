use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Error message returned with 404 when the requested year is unknown
pub const YEAR_NOT_FOUND: &str = "Year not found";

/// Sales figure of a single month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesEntry {
    /// Month label, e.g. "Jan"
    pub month: String,
    /// Non-negative sales amount
    #[serde(serialize_with = "serialize_amount")]
    pub sales: f64,
}

/// Whole amounts go out as JSON integers: `18240`, not `18240.0`
fn serialize_amount<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

impl SalesEntry {
    pub fn new(month: impl Into<String>, sales: f64) -> Self {
        Self {
            month: month.into(),
            sales,
        }
    }
}

/// Query string of GET /api/sales
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesQuery {
    pub year: Option<String>,
}

impl SalesQuery {
    pub fn for_year(year: impl Into<String>) -> Self {
        Self {
            year: Some(year.into()),
        }
    }

    /// Build from decoded query pairs. A repeated `year` keeps its first value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let year = pairs
            .into_iter()
            .find(|(key, _)| key.as_ref() == "year")
            .map(|(_, value)| value.into());
        Self { year }
    }

    /// Year key to look up; `?year=` with an empty value means "all years"
    pub fn year_key(&self) -> Option<&str> {
        self.year.as_deref().filter(|year| !year.is_empty())
    }
}

/// Response for a single year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSalesResponse {
    #[serde(default)]
    pub data: Vec<SalesEntry>,
    pub year: String,
    /// All known years, newest first. Empty when the server omitted it.
    #[serde(default)]
    pub years: Vec<String>,
}

/// Response without a year filter: the whole dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllSalesResponse {
    pub data: BTreeMap<String, Vec<SalesEntry>>,
    pub years: Vec<String>,
}

/// Error body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesErrorResponse {
    pub error: String,
}

impl SalesErrorResponse {
    pub fn year_not_found() -> Self {
        Self {
            error: YEAR_NOT_FOUND.to_string(),
        }
    }
}
