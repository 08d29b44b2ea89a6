use crate::models::DailyRecord;
use crate::store::RecordStore;

pub const WEEK_WINDOW: usize = 7;
pub const MONTH_WINDOW: usize = 30;
pub const DEFAULT_DAYS: usize = WEEK_WINDOW;
pub const MAX_DAYS: usize = 365;

/// The `n` most recent records, oldest first.
///
/// `n == 0` is treated as `1`. A store holding fewer than `n` records
/// yields all of them.
pub fn last_n(store: &RecordStore, n: usize) -> Vec<&DailyRecord> {
    let n = n.max(1);
    let skip = store.len().saturating_sub(n);
    store.iter().skip(skip).collect()
}

/// Normalises a requested list length to `1..=MAX_DAYS`.
///
/// Only the leading integer of the input counts (`"2.5"` is 2). Missing,
/// unparseable or zero input falls back to a week; negative input becomes 1.
pub fn clamp_days(requested: Option<&str>) -> usize {
    let Some(raw) = requested.map(str::trim) else {
        return DEFAULT_DAYS;
    };

    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return DEFAULT_DAYS;
    }

    let all_zero = rest[..digits].bytes().all(|b| b == b'0');
    if all_zero {
        DEFAULT_DAYS
    } else if negative {
        1
    } else {
        rest[..digits].parse::<usize>().map_or(MAX_DAYS, |days| days.min(MAX_DAYS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn store_of(days: i64) -> RecordStore {
        let start = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
        RecordStore::from_records((0..days).map(|offset| DailyRecord {
            report_date: start + Duration::days(offset),
            aircraft_count: offset as u32,
            vessel_count: 0,
            official_ship_count: 0,
            balloon_count: 0,
            median_line_crossings: None,
            report_interval: String::new(),
            narrative: String::new(),
        }))
    }

    #[test]
    fn takes_most_recent_dates_ascending() {
        let store = store_of(20);
        let window = last_n(&store, 7);
        assert_eq!(window.len(), 7);
        let dates: Vec<String> = window.iter().map(|r| r.report_date.to_string()).collect();
        assert_eq!(
            dates,
            vec![
                "2025-01-02", "2025-01-03", "2025-01-04", "2025-01-05", "2025-01-06",
                "2025-01-07", "2025-01-08"
            ]
        );
    }

    #[test]
    fn short_store_returns_everything() {
        let store = store_of(3);
        let window = last_n(&store, 30);
        assert_eq!(window.len(), 3);
        assert!(window.windows(2).all(|pair| pair[0].report_date < pair[1].report_date));
    }

    #[test]
    fn zero_is_clamped_to_one() {
        let store = store_of(5);
        let window = last_n(&store, 0);
        assert_eq!(window.len(), 1);
        assert_eq!(window[0].report_date, store.latest_date().unwrap());
    }

    #[test]
    fn empty_store_yields_empty_window() {
        assert!(last_n(&RecordStore::default(), 7).is_empty());
    }

    #[test]
    fn clamp_days_bounds() {
        assert_eq!(clamp_days(None), 7);
        assert_eq!(clamp_days(Some("")), 7);
        assert_eq!(clamp_days(Some("0")), 7);
        assert_eq!(clamp_days(Some("30")), 30);
        assert_eq!(clamp_days(Some(" 30 ")), 30);
        assert_eq!(clamp_days(Some("10000")), 365);
        assert_eq!(clamp_days(Some("99999999999999999999999")), 365);
    }

    #[test]
    fn clamp_days_is_lenient_with_odd_input() {
        assert_eq!(clamp_days(Some("-3")), 1);
        assert_eq!(clamp_days(Some("abc")), 7);
        assert_eq!(clamp_days(Some("2.5")), 2);
        assert_eq!(clamp_days(Some("12days")), 12);
        assert_eq!(clamp_days(Some("-")), 7);
    }
}
