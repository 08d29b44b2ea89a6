use crate::dates::to_event_date;
use chrono::NaiveDate;

/// The report date whose details are on screen.
///
/// Every transition issues a new token; a detail response is only applied
/// while its token is still the latest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    report_date: NaiveDate,
    token: u64,
}

impl Selection {
    pub fn new(report_date: NaiveDate) -> Self {
        Self::after(report_date, 0)
    }

    /// Starts a selection whose token follows `last_token`.
    pub fn after(report_date: NaiveDate, last_token: u64) -> Self {
        Self {
            report_date,
            token: last_token.saturating_add(1),
        }
    }

    pub fn select(&mut self, report_date: NaiveDate) -> u64 {
        self.report_date = report_date;
        self.token = self.token.saturating_add(1);
        self.token
    }

    pub fn report_date(&self) -> NaiveDate {
        self.report_date
    }

    pub fn event_date(&self) -> NaiveDate {
        to_event_date(self.report_date)
    }

    pub fn token(&self) -> u64 {
        self.token
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn selection_maps_to_previous_day() {
        let selection = Selection::new(date("2025-06-02"));
        assert_eq!(selection.report_date(), date("2025-06-02"));
        assert_eq!(selection.event_date(), date("2025-06-01"));
    }

    #[test]
    fn tokens_increase_and_old_ones_go_stale() {
        let mut selection = Selection::new(date("2025-06-02"));
        let first = selection.token();
        let second = selection.select(date("2025-06-01"));
        let third = selection.select(date("2025-05-30"));
        assert!(first < second && second < third);
        assert!(!selection.is_current(first));
        assert!(!selection.is_current(second));
        assert!(selection.is_current(third));
        assert_eq!(selection.event_date(), date("2025-05-29"));
    }

    #[test]
    fn resumed_selection_continues_token_sequence() {
        let selection = Selection::after(date("2025-06-02"), 7);
        assert_eq!(selection.token(), 8);
        assert!(!selection.is_current(7));
    }

    #[test]
    fn reselecting_same_date_still_issues_new_token() {
        let mut selection = Selection::new(date("2025-06-02"));
        let before = selection.token();
        let after = selection.select(date("2025-06-02"));
        assert_ne!(before, after);
    }
}
