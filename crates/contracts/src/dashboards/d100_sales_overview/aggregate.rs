//! Threshold filter and summary figures for the sales chart.
//!
//! Runs on the client every time the loaded entries or the threshold change.

use super::dto::SalesEntry;

/// Entries that passed the threshold plus their totals
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SalesSummary {
    /// Entries with `sales >= threshold`, in source order
    pub filtered: Vec<SalesEntry>,
    /// Sum over `filtered`, 0 when nothing passed
    pub total: f64,
    /// Rounded average per included month, None when nothing passed
    pub average: Option<f64>,
}

impl SalesSummary {
    pub fn shown(&self) -> usize {
        self.filtered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}

/// Keep the months at or above `threshold` and compute total and average.
///
/// The boundary is inclusive: a month exactly at the threshold stays.
pub fn filter_and_aggregate(entries: &[SalesEntry], threshold: f64) -> SalesSummary {
    let filtered: Vec<SalesEntry> = entries
        .iter()
        .filter(|entry| entry.sales >= threshold)
        .cloned()
        .collect();

    let total: f64 = filtered.iter().map(|entry| entry.sales).sum();
    let average = if filtered.is_empty() {
        None
    } else {
        Some((total / filtered.len() as f64).round())
    };

    SalesSummary {
        filtered,
        total,
        average,
    }
}

/// Parse the threshold input field.
///
/// Empty, malformed, negative or non-finite input falls back to 0.
pub fn parse_threshold(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}
