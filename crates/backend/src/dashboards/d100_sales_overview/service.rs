use contracts::dashboards::d100_sales_overview::SalesEntry;
use std::collections::BTreeMap;
use thiserror::Error;

use super::dataset::SalesDataset;

#[derive(Debug, Error, PartialEq)]
pub enum SalesQueryError {
    #[error("year {0} not found")]
    NotFound(String),
}

/// Result of a sales lookup, either one year or everything
#[derive(Debug, Clone, PartialEq)]
pub enum SalesQueryResult {
    Year {
        entries: Vec<SalesEntry>,
        year: String,
        years: Vec<String>,
    },
    All {
        entries: BTreeMap<String, Vec<SalesEntry>>,
        years: Vec<String>,
    },
}

/// Look up sales for `year`, or the whole dataset when no year is given.
pub fn query(dataset: &SalesDataset, year: Option<&str>) -> Result<SalesQueryResult, SalesQueryError> {
    let years = dataset.years().to_vec();

    let Some(year) = year else {
        return Ok(SalesQueryResult::All {
            entries: dataset.by_year().clone(),
            years,
        });
    };

    let entries = dataset
        .get(year)
        .ok_or_else(|| SalesQueryError::NotFound(year.to_string()))?;

    Ok(SalesQueryResult::Year {
        entries: entries.to_vec(),
        year: year.to_string(),
        years,
    })
}

impl SalesQueryResult {
    pub fn row_count(&self) -> usize {
        match self {
            SalesQueryResult::Year { entries, .. } => entries.len(),
            SalesQueryResult::All { entries, .. } => entries.values().map(Vec::len).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_sales_overview::dataset::reference_dataset;

    #[test]
    fn test_query_known_year() {
        let dataset = reference_dataset().unwrap();
        let result = query(&dataset, Some("2024")).unwrap();
        let SalesQueryResult::Year {
            entries,
            year,
            years,
        } = result
        else {
            panic!("expected year-scoped result");
        };
        assert_eq!(year, "2024");
        assert_eq!(years, vec!["2024", "2023", "2022"]);
        assert_eq!(entries.len(), 12);
        assert_eq!(entries.first(), Some(&SalesEntry::new("Jan", 18240.0)));
        assert_eq!(entries.last(), Some(&SalesEntry::new("Dec", 24210.0)));
    }

    #[test]
    fn test_every_year_returns_its_record() {
        let dataset = reference_dataset().unwrap();
        for year in dataset.years() {
            match query(&dataset, Some(year)).unwrap() {
                SalesQueryResult::Year { entries, .. } => {
                    assert_eq!(entries.as_slice(), dataset.get(year).unwrap())
                }
                other => panic!("unexpected result {:?}", other),
            }
        }
    }

    #[test]
    fn test_query_unknown_year() {
        let dataset = reference_dataset().unwrap();
        for missing in ["1999", "2025", "abc", " 2024"] {
            assert_eq!(
                query(&dataset, Some(missing)),
                Err(SalesQueryError::NotFound(missing.to_string()))
            );
        }
    }

    #[test]
    fn test_query_all_years() {
        let dataset = reference_dataset().unwrap();
        let result = query(&dataset, None).unwrap();
        assert_eq!(result.row_count(), 36);
        let SalesQueryResult::All { entries, years } = result else {
            panic!("expected unscoped result");
        };
        assert_eq!(&entries, dataset.by_year());
        assert_eq!(years, vec!["2024", "2023", "2022"]);
    }

    #[test]
    fn test_query_is_deterministic() {
        let dataset = reference_dataset().unwrap();
        assert_eq!(query(&dataset, Some("2023")), query(&dataset, Some("2023")));
        assert_eq!(query(&dataset, None), query(&dataset, None));
    }
}
