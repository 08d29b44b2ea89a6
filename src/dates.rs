//! Calendar-day helpers for report and event dates.
//!
//! A report issued on day `D` describes what happened on `D - 1`. All
//! arithmetic here is on [`NaiveDate`], so results never depend on the
//! local timezone of the process.

use chrono::{Datelike, Duration, NaiveDate};

const ISO_FORMAT: &str = "%Y-%m-%d";
const WEEKDAYS: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

/// Parses a zero-padded `YYYY-MM-DD` date.
///
/// Anything else (short fields, signed or five-digit years, trailing time
/// parts) is rejected so that lexicographic and chronological order agree.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    if !bytes
        .iter()
        .enumerate()
        .all(|(idx, b)| idx == 4 || idx == 7 || b.is_ascii_digit())
    {
        return None;
    }
    NaiveDate::parse_from_str(value, ISO_FORMAT).ok()
}

pub fn date_key(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

pub fn to_event_date(report_date: NaiveDate) -> NaiveDate {
    report_date - Duration::days(1)
}

pub fn to_report_date(event_date: NaiveDate) -> NaiveDate {
    event_date + Duration::days(1)
}

/// `MM/DD`, used for chart axis labels.
pub fn format_short(date: NaiveDate) -> String {
    format!("{:02}/{:02}", date.month(), date.day())
}

/// `YYYY年MM月DD日 星期X`, used as the today panel heading.
pub fn format_long(date: NaiveDate) -> String {
    let weekday = WEEKDAYS[date.weekday().num_days_from_sunday() as usize];
    format!(
        "{}年{:02}月{:02}日 星期{}",
        date.year(),
        date.month(),
        date.day(),
        weekday
    )
}

/// `M月D日` without padding, used for older rows in the day list.
pub fn format_month_day(date: NaiveDate) -> String {
    format!("{}月{}日", date.month(), date.day())
}
