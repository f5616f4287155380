use contracts::dashboards::d100_sales_overview::SalesEntry;
use once_cell::sync::Lazy;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use thiserror::Error;

/// Ошибки построения набора данных
#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("year {0} has no monthly entries")]
    EmptyYear(String),

    #[error("year {year}, month {month}: invalid sales value {sales}")]
    InvalidSales {
        year: String,
        month: String,
        sales: f64,
    },
}

/// Monthly sales grouped by year, immutable after construction.
///
/// `years` always holds exactly the keys of `by_year`, newest first.
#[derive(Debug, Clone)]
pub struct SalesDataset {
    by_year: BTreeMap<String, Vec<SalesEntry>>,
    years: Vec<String>,
}

impl SalesDataset {
    pub fn new(by_year: BTreeMap<String, Vec<SalesEntry>>) -> Result<Self, DatasetError> {
        for (year, entries) in &by_year {
            if entries.is_empty() {
                return Err(DatasetError::EmptyYear(year.clone()));
            }
            if let Some(bad) = entries
                .iter()
                .find(|e| !e.sales.is_finite() || e.sales < 0.0)
            {
                return Err(DatasetError::InvalidSales {
                    year: year.clone(),
                    month: bad.month.clone(),
                    sales: bad.sales,
                });
            }
        }

        let mut years: Vec<String> = by_year.keys().cloned().collect();
        years.sort_by(|a, b| compare_years_desc(a, b));

        Ok(Self { by_year, years })
    }

    pub fn get(&self, year: &str) -> Option<&[SalesEntry]> {
        self.by_year.get(year).map(Vec::as_slice)
    }

    pub fn by_year(&self) -> &BTreeMap<String, Vec<SalesEntry>> {
        &self.by_year
    }

    pub fn years(&self) -> &[String] {
        &self.years
    }
}

/// Numeric keys newest first; anything non-numeric goes last, reverse lexicographic
fn compare_years_desc(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => y.cmp(&x),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => b.cmp(a),
    }
}

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const SALES_BY_YEAR: [(&str, [f64; 12]); 3] = [
    (
        "2024",
        [
            18240.0, 17680.0, 19120.0, 20510.0, 21440.0, 20890.0, 22110.0, 21550.0, 20780.0,
            21970.0, 22840.0, 24210.0,
        ],
    ),
    (
        "2023",
        [
            15430.0, 14980.0, 16250.0, 17110.0, 17940.0, 17220.0, 18190.0, 17740.0, 16980.0,
            18510.0, 19220.0, 20440.0,
        ],
    ),
    (
        "2022",
        [
            13210.0, 12840.0, 13670.0, 14190.0, 14850.0, 14440.0, 15010.0, 14930.0, 14320.0,
            15280.0, 16110.0, 17290.0,
        ],
    ),
];

/// Built-in reference figures for 2022..2024
pub fn reference_dataset() -> Result<SalesDataset, DatasetError> {
    let by_year = SALES_BY_YEAR
        .iter()
        .map(|(year, amounts)| {
            let entries = MONTHS
                .iter()
                .zip(amounts.iter())
                .map(|(month, sales)| SalesEntry::new(*month, *sales))
                .collect();
            (year.to_string(), entries)
        })
        .collect();
    SalesDataset::new(by_year)
}

static SALES_DATASET: Lazy<Result<SalesDataset, DatasetError>> = Lazy::new(reference_dataset);

/// Process-wide dataset, built on first access and never mutated.
///
/// `main` calls this before binding so a broken dataset stops startup.
pub fn sales_dataset() -> Result<&'static SalesDataset, &'static DatasetError> {
    SALES_DATASET.as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_dataset_shape() {
        let dataset = reference_dataset().unwrap();
        assert_eq!(dataset.years(), ["2024", "2023", "2022"]);
        for year in dataset.years() {
            let entries = dataset.get(year).unwrap();
            assert_eq!(entries.len(), 12);
            assert_eq!(entries[0].month, "Jan");
            assert_eq!(entries[11].month, "Dec");
        }
        assert_eq!(dataset.get("2024").unwrap()[0], SalesEntry::new("Jan", 18240.0));
        assert_eq!(dataset.get("2024").unwrap()[11], SalesEntry::new("Dec", 24210.0));
    }

    #[test]
    fn test_years_match_keys() {
        let dataset = reference_dataset().unwrap();
        let mut keys: Vec<&String> = dataset.by_year().keys().collect();
        let mut years: Vec<&String> = dataset.years().iter().collect();
        keys.sort();
        years.sort();
        assert_eq!(keys, years);
    }

    #[test]
    fn test_years_sorted_numerically_not_lexically() {
        let by_year: BTreeMap<String, Vec<SalesEntry>> = ["999", "2001", "10000", "legacy"]
            .into_iter()
            .map(|y| (y.to_string(), vec![SalesEntry::new("Jan", 1.0)]))
            .collect();
        let dataset = SalesDataset::new(by_year).unwrap();
        assert_eq!(dataset.years(), ["10000", "2001", "999", "legacy"]);
    }

    #[test]
    fn test_empty_year_rejected() {
        let mut by_year = BTreeMap::new();
        by_year.insert("2020".to_string(), Vec::new());
        assert_eq!(
            SalesDataset::new(by_year).unwrap_err(),
            DatasetError::EmptyYear("2020".to_string())
        );
    }

    #[test]
    fn test_negative_sales_rejected() {
        let mut by_year = BTreeMap::new();
        by_year.insert(
            "2020".to_string(),
            vec![SalesEntry::new("Jan", 10.0), SalesEntry::new("Feb", -1.0)],
        );
        let err = SalesDataset::new(by_year).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidSales { ref month, .. } if month == "Feb"));
    }

    #[test]
    fn test_shared_dataset_is_available() {
        let dataset = sales_dataset().unwrap();
        assert_eq!(dataset.years().len(), 3);
    }
}
