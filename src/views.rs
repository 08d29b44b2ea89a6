//! Shapes store data into the panels the dashboard page draws.
//!
//! The page never recomputes dates, totals or deltas; everything it shows
//! comes out of these functions already ordered and labelled.

use crate::dates::{format_long, format_month_day, format_short, to_event_date};
use crate::details::DetailSource;
use crate::models::{
    Category, CategoryCount, ChartSeries, DailyRecord, DashboardResponse, DayRow, DetailPanel,
    SelectionResponse, TodayPanel, TrendChart,
};
use crate::selection::Selection;
use crate::stats::{aggregate, format_delta, totals, Aggregate};
use crate::store::RecordStore;
use crate::window::{last_n, MONTH_WINDOW, WEEK_WINDOW};

pub fn build_dashboard(
    store: &RecordStore,
    days: usize,
    selection: Option<&Selection>,
    details: &DetailSource,
) -> DashboardResponse {
    let window = last_n(store, days);
    let aggregates = aggregate(&window);

    DashboardResponse {
        days,
        today: today_panel(&window, &aggregates),
        rows: day_rows(&window, &aggregates),
        week_chart: trend_chart(store, WEEK_WINDOW),
        month_chart: trend_chart(store, MONTH_WINDOW),
        selection: selection.map(|selection| selection_response(selection, details)),
    }
}

/// Latest entry of an ascending window together with its aggregate.
pub fn today_panel(window: &[&DailyRecord], aggregates: &[Aggregate]) -> Option<TodayPanel> {
    let record = window.last()?;
    let aggregate = aggregates.last()?;

    Some(TodayPanel {
        report_date: record.report_date,
        event_date: to_event_date(record.report_date),
        heading: format_long(record.report_date),
        total: aggregate.total,
        delta: aggregate.delta,
        delta_label: format_delta(aggregate.delta),
        categories: Category::ALL
            .iter()
            .map(|&category| CategoryCount {
                category,
                label: category.label(),
                count: category.count(record),
            })
            .collect(),
        median_line_crossings: record.median_line_crossings,
        report_interval: record.report_interval.clone(),
        narrative: record.narrative.clone(),
    })
}

/// Newest first. Aggregates must come from the same ascending window.
pub fn day_rows(window: &[&DailyRecord], aggregates: &[Aggregate]) -> Vec<DayRow> {
    window
        .iter()
        .zip(aggregates)
        .rev()
        .enumerate()
        .map(|(idx, (record, aggregate))| DayRow {
            report_date: record.report_date,
            label: row_label(idx, record),
            total: aggregate.total,
            delta: aggregate.delta,
            delta_label: format_delta(aggregate.delta),
        })
        .collect()
}

fn row_label(idx: usize, record: &DailyRecord) -> String {
    match idx {
        0 => "今天".to_string(),
        1 => "昨日".to_string(),
        _ => format_month_day(record.report_date),
    }
}

pub fn trend_chart(store: &RecordStore, days: usize) -> TrendChart {
    let window = last_n(store, days);

    TrendChart {
        title: format!("近 {days} 日"),
        labels: window
            .iter()
            .map(|record| format_short(record.report_date))
            .collect(),
        series: Category::ALL
            .iter()
            .map(|&category| ChartSeries {
                category,
                label: category.label(),
                color: category.color(),
                data: window.iter().map(|record| category.count(record)).collect(),
            })
            .collect(),
        totals: totals(&window),
    }
}

pub fn detail_panel(selection: &Selection, details: &DetailSource) -> DetailPanel {
    let event_date = selection.event_date();
    let (status, events) = details.resolve(event_date);

    DetailPanel {
        report_date: selection.report_date(),
        event_date,
        status,
        events,
    }
}

pub fn selection_response(selection: &Selection, details: &DetailSource) -> SelectionResponse {
    SelectionResponse {
        token: selection.token(),
        details: detail_panel(selection, details),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DetailEvent, DetailStatus};
    use chrono::NaiveDate;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    fn record(day: &str, counts: [u32; 4]) -> DailyRecord {
        DailyRecord {
            report_date: date(day),
            aircraft_count: counts[0],
            vessel_count: counts[1],
            official_ship_count: counts[2],
            balloon_count: counts[3],
            median_line_crossings: Some(1),
            report_interval: "0600-0600".to_string(),
            narrative: format!("report {day}"),
        }
    }

    fn sample_store() -> RecordStore {
        RecordStore::from_records([
            record("2025-05-30", [4, 4, 1, 0]),
            record("2025-05-31", [1, 2, 0, 0]),
            record("2025-06-01", [2, 4, 1, 0]),
            record("2025-06-02", [3, 5, 1, 0]),
        ])
    }

    #[test]
    fn rows_are_newest_first_with_ascending_deltas() {
        let store = sample_store();
        let window = last_n(&store, 7);
        let rows = day_rows(&window, &aggregate(&window));

        let summary: Vec<(String, &str, u64, &str)> = rows
            .iter()
            .map(|row| {
                (
                    row.report_date.to_string(),
                    row.label.as_str(),
                    row.total,
                    row.delta_label.as_str(),
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                ("2025-06-02".to_string(), "今天", 9, "+2"),
                ("2025-06-01".to_string(), "昨日", 7, "+4"),
                ("2025-05-31".to_string(), "5月31日", 3, "-6"),
                ("2025-05-30".to_string(), "5月30日", 9, "—"),
            ]
        );
    }

    #[test]
    fn today_panel_agrees_with_top_row() {
        let store = sample_store();
        let window = last_n(&store, 7);
        let aggregates = aggregate(&window);
        let today = today_panel(&window, &aggregates).unwrap();
        let rows = day_rows(&window, &aggregates);

        assert_eq!(today.report_date, rows[0].report_date);
        assert_eq!(today.total, rows[0].total);
        assert_eq!(today.delta, rows[0].delta);
        assert_eq!(today.event_date, date("2025-06-01"));
        assert_eq!(today.heading, "2025年06月02日 星期一");
        let counts: Vec<u32> = today.categories.iter().map(|c| c.count).collect();
        assert_eq!(counts, vec![5, 3, 1, 0]);
        assert_eq!(today.median_line_crossings, Some(1));
    }

    #[test]
    fn today_panel_is_absent_for_empty_store() {
        let store = RecordStore::default();
        let window = last_n(&store, 7);
        assert!(today_panel(&window, &aggregate(&window)).is_none());
        assert!(day_rows(&window, &aggregate(&window)).is_empty());
    }

    #[test]
    fn chart_series_follow_window_order() {
        let store = sample_store();
        let chart = trend_chart(&store, 3);
        assert_eq!(chart.labels, vec!["05/31", "06/01", "06/02"]);
        assert_eq!(chart.totals, vec![3, 7, 9]);
        assert_eq!(chart.series.len(), 4);
        assert_eq!(chart.series[0].label, "軍艦");
        assert_eq!(chart.series[0].data, vec![2, 4, 5]);
        assert_eq!(chart.series[1].label, "軍機");
        assert_eq!(chart.series[1].data, vec![1, 2, 3]);
    }

    #[test]
    fn detail_panel_uses_event_date() {
        let events = DetailSource::Loaded(vec![
            DetailEvent {
                event_date: date("2025-06-01"),
                sequence_number: 1,
                time_window: "0600-1200".to_string(),
                content: "two vessels".to_string(),
            },
            DetailEvent {
                event_date: date("2025-06-02"),
                sequence_number: 1,
                time_window: "0600-1200".to_string(),
                content: "later".to_string(),
            },
        ]);
        let selection = Selection::new(date("2025-06-02"));
        let panel = detail_panel(&selection, &events);
        assert_eq!(panel.event_date, date("2025-06-01"));
        assert_eq!(panel.status, DetailStatus::Found);
        assert_eq!(panel.events.len(), 1);
        assert_eq!(panel.events[0].content, "two vessels");
    }

    #[test]
    fn dashboard_uses_requested_list_length_and_fixed_charts() {
        let store = sample_store();
        let selection = Selection::new(date("2025-06-02"));
        let view = build_dashboard(&store, 2, Some(&selection), &DetailSource::Unavailable);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.week_chart.labels.len(), 4);
        assert_eq!(view.month_chart.labels.len(), 4);
        let selected = view.selection.unwrap();
        assert_eq!(selected.token, 1);
        assert_eq!(selected.details.status, DetailStatus::Unavailable);
    }
}
