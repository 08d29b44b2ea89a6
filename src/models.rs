use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's report, keyed by the date it was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRecord {
    pub report_date: NaiveDate,
    pub aircraft_count: u32,
    pub vessel_count: u32,
    pub official_ship_count: u32,
    pub balloon_count: u32,
    pub median_line_crossings: Option<u32>,
    pub report_interval: String,
    pub narrative: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailEvent {
    pub event_date: NaiveDate,
    pub sequence_number: u32,
    pub time_window: String,
    pub content: String,
}

/// Value side of `summary.json`. The report date is the map key.
#[derive(Debug, Deserialize)]
pub(crate) struct SummaryEntry {
    #[serde(rename = "共機數量", alias = "aircraftCount")]
    pub aircraft_count: u32,
    #[serde(rename = "共艦數量", alias = "vesselCount")]
    pub vessel_count: u32,
    #[serde(rename = "公務船數量", alias = "officialShipCount")]
    pub official_ship_count: u32,
    #[serde(rename = "氣球數量", alias = "balloonCount")]
    pub balloon_count: u32,
    #[serde(rename = "逾越中線數量", alias = "medianLineCrossings", default)]
    pub median_line_crossings: Option<u32>,
    #[serde(rename = "報告時間區間", alias = "reportInterval", default)]
    pub report_interval: String,
    #[serde(rename = "軍機軍艦動態內文", alias = "narrative", default)]
    pub narrative: String,
}

impl SummaryEntry {
    pub(crate) fn into_record(self, report_date: NaiveDate) -> DailyRecord {
        DailyRecord {
            report_date,
            aircraft_count: self.aircraft_count,
            vessel_count: self.vessel_count,
            official_ship_count: self.official_ship_count,
            balloon_count: self.balloon_count,
            median_line_crossings: self.median_line_crossings,
            report_interval: self.report_interval,
            narrative: self.narrative,
        }
    }
}

/// One element of a `detail/*.json` array.
///
/// Rows carry either the day the events happened or the date of the report
/// that listed them; the latter is one day later.
#[derive(Debug, Deserialize)]
pub(crate) struct DetailEntry {
    #[serde(rename = "日期", alias = "eventDate", default)]
    pub event_date: Option<String>,
    #[serde(rename = "報告日期", alias = "reportDate", default)]
    pub report_date: Option<String>,
    #[serde(rename = "序號", alias = "sequenceNumber", default)]
    pub sequence_number: u32,
    #[serde(rename = "時間區段", alias = "timeWindow", default)]
    pub time_window: String,
    #[serde(rename = "內容", alias = "content", default)]
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Vessel,
    Aircraft,
    OfficialShip,
    Balloon,
}

impl Category {
    /// Display and chart order.
    pub const ALL: [Category; 4] = [
        Category::Vessel,
        Category::Aircraft,
        Category::OfficialShip,
        Category::Balloon,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Vessel => "軍艦",
            Category::Aircraft => "軍機",
            Category::OfficialShip => "公務船",
            Category::Balloon => "氣球",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Category::Vessel => "#ff3b30",
            Category::Aircraft => "#1e90ff",
            Category::OfficialShip => "#ffcc00",
            Category::Balloon => "#34c759",
        }
    }

    pub fn count(self, record: &DailyRecord) -> u32 {
        match self {
            Category::Vessel => record.vessel_count,
            Category::Aircraft => record.aircraft_count,
            Category::OfficialShip => record.official_ship_count,
            Category::Balloon => record.balloon_count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailStatus {
    Found,
    NoEvents,
    Unavailable,
}

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub days: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct DetailsQuery {
    pub token: u64,
}

#[derive(Debug, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub label: &'static str,
    pub count: u32,
}

#[derive(Debug, Serialize)]
pub struct TodayPanel {
    pub report_date: NaiveDate,
    pub event_date: NaiveDate,
    pub heading: String,
    pub total: u64,
    pub delta: Option<i64>,
    pub delta_label: String,
    pub categories: Vec<CategoryCount>,
    pub median_line_crossings: Option<u32>,
    pub report_interval: String,
    pub narrative: String,
}

#[derive(Debug, Serialize)]
pub struct DayRow {
    pub report_date: NaiveDate,
    pub label: String,
    pub total: u64,
    pub delta: Option<i64>,
    pub delta_label: String,
}

#[derive(Debug, Serialize)]
pub struct ChartSeries {
    pub category: Category,
    pub label: &'static str,
    pub color: &'static str,
    pub data: Vec<u32>,
}

#[derive(Debug, Serialize)]
pub struct TrendChart {
    pub title: String,
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
    pub totals: Vec<u64>,
}

#[derive(Debug, Serialize)]
pub struct DetailPanel {
    pub report_date: NaiveDate,
    pub event_date: NaiveDate,
    pub status: DetailStatus,
    pub events: Vec<DetailEvent>,
}

#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub token: u64,
    pub details: DetailPanel,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub days: usize,
    pub today: Option<TodayPanel>,
    pub rows: Vec<DayRow>,
    pub week_chart: TrendChart,
    pub month_chart: TrendChart,
    pub selection: Option<SelectionResponse>,
}

#[derive(Debug, Serialize)]
pub struct SourceStatus {
    pub ok: bool,
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub summary: SourceStatus,
    pub details: SourceStatus,
    pub record_count: usize,
    pub event_count: usize,
}
