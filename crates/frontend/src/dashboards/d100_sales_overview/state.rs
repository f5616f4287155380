//! View state of the sales overview page and its fetch lifecycle.
//!
//! Every year selection opens a new fetch epoch and hands out a [`FetchToken`].
//! A response is applied only when its token is still the latest one, so a
//! slow answer for a year the user already left can never overwrite the data
//! of the current selection.

use contracts::dashboards::d100_sales_overview::{
    filter_and_aggregate, parse_threshold, SalesEntry, SalesSummary, YearSalesResponse,
};
use contracts::enums::ChartMode;

use super::api::FetchError;

/// Message shown instead of the chart when loading fails
pub const LOAD_ERROR_MESSAGE: &str = "Unable to load sales data.";

/// Years known before the first response arrives, newest first
pub const FALLBACK_YEARS: [&str; 3] = ["2024", "2023", "2022"];

pub const DEFAULT_THRESHOLD: &str = "15000";

/// Identifies one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// A fetch the page has to run, see [`SalesOverviewState::apply`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub token: FetchToken,
    pub year: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Loading,
    Success,
    Failed,
}

#[derive(Clone, Debug)]
pub struct SalesOverviewState {
    pub available_years: Vec<String>,
    pub selected_year: Option<String>,
    pub entries: Vec<SalesEntry>,
    /// Raw text of the threshold field
    pub threshold_input: String,
    pub chart_mode: ChartMode,
    pub phase: FetchPhase,
    pub error: Option<String>,
    epoch: u64,
}

impl Default for SalesOverviewState {
    fn default() -> Self {
        Self {
            available_years: FALLBACK_YEARS.iter().map(|y| y.to_string()).collect(),
            selected_year: None,
            entries: Vec::new(),
            threshold_input: DEFAULT_THRESHOLD.to_string(),
            chart_mode: ChartMode::default(),
            phase: FetchPhase::Idle,
            error: None,
            epoch: 0,
        }
    }
}

impl SalesOverviewState {
    /// First load: select the newest known year
    pub fn mount(&mut self) -> Option<FetchRequest> {
        let year = self.available_years.first()?.clone();
        self.select_year(&year)
    }

    /// Switch to `year` and open a new fetch epoch.
    ///
    /// Returns `None` when `year` is already selected; nothing has to be fetched.
    pub fn select_year(&mut self, year: &str) -> Option<FetchRequest> {
        if self.selected_year.as_deref() == Some(year) {
            return None;
        }

        self.selected_year = Some(year.to_string());
        self.epoch += 1;
        self.phase = FetchPhase::Loading;
        self.error = None;

        Some(FetchRequest {
            token: FetchToken(self.epoch),
            year: year.to_string(),
        })
    }

    /// Apply the outcome of a fetch.
    ///
    /// Returns `false` and leaves the state untouched when the token was
    /// superseded by a later selection.
    pub fn apply(
        &mut self,
        token: FetchToken,
        result: Result<YearSalesResponse, FetchError>,
    ) -> bool {
        if !self.is_current(token) {
            return false;
        }

        match result {
            Ok(response) => {
                self.entries = response.data;
                if !response.years.is_empty() {
                    self.available_years = response.years;
                }
                self.phase = FetchPhase::Success;
            }
            Err(_) => {
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
                self.entries.clear();
                self.phase = FetchPhase::Failed;
            }
        }
        true
    }

    pub fn is_current(&self, token: FetchToken) -> bool {
        self.phase == FetchPhase::Loading && token == FetchToken(self.epoch)
    }

    pub fn is_loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }

    pub fn set_threshold_input(&mut self, input: impl Into<String>) {
        self.threshold_input = input.into();
    }

    pub fn threshold(&self) -> f64 {
        parse_threshold(&self.threshold_input)
    }

    pub fn set_chart_mode(&mut self, mode: ChartMode) {
        self.chart_mode = mode;
    }

    pub fn summary(&self) -> SalesSummary {
        filter_and_aggregate(&self.entries, self.threshold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(year: &str, sales: &[f64]) -> YearSalesResponse {
        YearSalesResponse {
            data: sales
                .iter()
                .enumerate()
                .map(|(i, s)| SalesEntry::new(format!("M{}", i + 1), *s))
                .collect(),
            year: year.to_string(),
            years: vec!["2024".into(), "2023".into(), "2022".into()],
        }
    }

    #[test]
    fn test_initial_state() {
        let state = SalesOverviewState::default();
        assert_eq!(state.available_years, vec!["2024", "2023", "2022"]);
        assert_eq!(state.selected_year, None);
        assert_eq!(state.threshold(), 15000.0);
        assert_eq!(state.chart_mode, ChartMode::Bar);
        assert_eq!(state.phase, FetchPhase::Idle);
        assert!(state.entries.is_empty());
    }

    #[test]
    fn test_mount_selects_newest_year() {
        let mut state = SalesOverviewState::default();
        let request = state.mount().unwrap();
        assert_eq!(request.year, "2024");
        assert_eq!(state.selected_year.as_deref(), Some("2024"));
        assert!(state.is_loading());
    }

    #[test]
    fn test_success_replaces_entries_and_years() {
        let mut state = SalesOverviewState::default();
        let request = state.mount().unwrap();
        let mut body = response("2024", &[100.0, 200.0]);
        body.years = vec!["2025".into(), "2024".into()];

        assert!(state.apply(request.token, Ok(body)));
        assert_eq!(state.phase, FetchPhase::Success);
        assert_eq!(state.entries.len(), 2);
        assert_eq!(state.available_years, vec!["2025", "2024"]);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_missing_years_keeps_known_years() {
        let mut state = SalesOverviewState::default();
        let request = state.mount().unwrap();
        let mut body = response("2024", &[100.0]);
        body.years.clear();

        assert!(state.apply(request.token, Ok(body)));
        assert_eq!(state.available_years, vec!["2024", "2023", "2022"]);
    }

    #[test]
    fn test_failure_clears_entries() {
        let mut state = SalesOverviewState::default();
        let first = state.mount().unwrap();
        state.apply(first.token, Ok(response("2024", &[1.0, 2.0, 3.0])));

        let second = state.select_year("1999").unwrap();
        assert_eq!(state.error, None);
        assert!(state.apply(second.token, Err(FetchError::Status(404))));
        assert_eq!(state.phase, FetchPhase::Failed);
        assert_eq!(state.error.as_deref(), Some(LOAD_ERROR_MESSAGE));
        assert!(state.entries.is_empty());
        assert!(state.summary().is_empty());
    }

    #[test]
    fn test_new_selection_clears_error() {
        let mut state = SalesOverviewState::default();
        let first = state.mount().unwrap();
        state.apply(first.token, Err(FetchError::Network("offline".into())));
        assert!(state.error.is_some());

        let second = state.select_year("2023").unwrap();
        assert_eq!(state.error, None);
        assert!(state.is_loading());
        state.apply(second.token, Ok(response("2023", &[5.0])));
        assert_eq!(state.phase, FetchPhase::Success);
    }

    #[test]
    fn test_stale_response_after_newer_one_is_discarded() {
        let mut state = SalesOverviewState::default();
        state.mount();
        let slow = state.select_year("2023").unwrap();
        let fast = state.select_year("2022").unwrap();

        assert!(state.apply(fast.token, Ok(response("2022", &[13210.0]))));
        assert!(!state.apply(slow.token, Ok(response("2023", &[15430.0]))));

        assert_eq!(state.selected_year.as_deref(), Some("2022"));
        assert_eq!(state.entries, vec![SalesEntry::new("M1", 13210.0)]);
    }

    #[test]
    fn test_stale_response_before_newer_one_is_discarded() {
        let mut state = SalesOverviewState::default();
        state.mount();
        let slow = state.select_year("2023").unwrap();
        let fast = state.select_year("2022").unwrap();

        assert!(!state.apply(slow.token, Ok(response("2023", &[15430.0]))));
        assert!(state.entries.is_empty());
        assert!(state.is_loading());

        assert!(state.apply(fast.token, Ok(response("2022", &[13210.0]))));
        assert_eq!(state.entries, vec![SalesEntry::new("M1", 13210.0)]);
    }

    #[test]
    fn test_stale_failure_does_not_touch_state() {
        let mut state = SalesOverviewState::default();
        let old = state.mount().unwrap();
        let current = state.select_year("2023").unwrap();
        state.apply(current.token, Ok(response("2023", &[1.0])));

        assert!(!state.apply(old.token, Err(FetchError::Status(500))));
        assert_eq!(state.error, None);
        assert_eq!(state.entries.len(), 1);
    }

    #[test]
    fn test_token_applies_only_once() {
        let mut state = SalesOverviewState::default();
        let request = state.mount().unwrap();
        assert!(state.apply(request.token, Ok(response("2024", &[1.0]))));
        assert!(!state.apply(request.token, Err(FetchError::Status(500))));
        assert_eq!(state.phase, FetchPhase::Success);
    }

    #[test]
    fn test_reselecting_same_year_does_not_refetch() {
        let mut state = SalesOverviewState::default();
        let request = state.mount().unwrap();
        assert_eq!(state.select_year("2024"), None);
        assert!(state.apply(request.token, Ok(response("2024", &[1.0]))));
    }

    #[test]
    fn test_threshold_and_mode_do_not_refetch() {
        let mut state = SalesOverviewState::default();
        let request = state.mount().unwrap();
        state.apply(
            request.token,
            Ok(response("2024", &[18240.0, 22110.0, 22840.0, 24210.0])),
        );

        state.set_threshold_input("22000");
        state.set_chart_mode(ChartMode::Pie);
        assert_eq!(state.phase, FetchPhase::Success);

        let summary = state.summary();
        assert_eq!(summary.shown(), 3);
        assert_eq!(summary.total, 69160.0);
        assert_eq!(summary.average, Some(23053.0));
        assert_eq!(state.chart_mode, ChartMode::Pie);
    }

    #[test]
    fn test_invalid_threshold_input_means_zero() {
        let mut state = SalesOverviewState::default();
        state.set_threshold_input("");
        assert_eq!(state.threshold(), 0.0);
        state.set_threshold_input("12k");
        assert_eq!(state.threshold(), 0.0);
    }
}
