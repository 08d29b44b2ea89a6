use crate::dates::parse_date;
use crate::errors::LoadError;
use crate::models::{DailyRecord, SummaryEntry};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::Path;

/// All daily reports, keyed by report date. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: BTreeMap<NaiveDate, DailyRecord>,
}

impl RecordStore {
    pub fn from_records(records: impl IntoIterator<Item = DailyRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|record| (record.report_date, record))
                .collect(),
        }
    }

    /// Parses a summary document. `path` is only used for error context.
    pub fn from_json(path: &Path, bytes: &[u8]) -> Result<Self, LoadError> {
        let raw: BTreeMap<String, SummaryEntry> =
            serde_json::from_slice(bytes).map_err(|source| LoadError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        let mut records = BTreeMap::new();
        for (key, entry) in raw {
            let report_date = parse_date(&key).ok_or_else(|| LoadError::InvalidDate {
                path: path.to_path_buf(),
                value: key.clone(),
            })?;
            records.insert(report_date, entry.into_record(report_date));
        }

        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, date: &NaiveDate) -> Option<&DailyRecord> {
        self.records.get(date)
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.records.contains_key(date)
    }

    /// Report dates in ascending order.
    pub fn sorted_dates(&self) -> Vec<NaiveDate> {
        self.records.keys().copied().collect()
    }

    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.records.keys().next_back().copied()
    }

    /// Records in ascending report-date order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &DailyRecord> + ExactSizeIterator {
        self.records.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<RecordStore, LoadError> {
        RecordStore::from_json(Path::new("summary.json"), json.as_bytes())
    }

    #[test]
    fn reads_source_field_names() {
        let store = parse(
            r#"{
              "2025-06-02": {
                "報告時間區間": "06:00-06:00",
                "軍機軍艦動態內文": "text",
                "共機數量": 3, "共艦數量": 5, "公務船數量": 1, "氣球數量": 0,
                "逾越中線數量": 2
              }
            }"#,
        )
        .unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let record = store.get(&date).unwrap();
        assert_eq!(record.report_date, date);
        assert_eq!(record.aircraft_count, 3);
        assert_eq!(record.vessel_count, 5);
        assert_eq!(record.official_ship_count, 1);
        assert_eq!(record.balloon_count, 0);
        assert_eq!(record.median_line_crossings, Some(2));
        assert_eq!(record.report_interval, "06:00-06:00");
        assert_eq!(record.narrative, "text");
    }

    #[test]
    fn reads_english_aliases_and_sorts_dates() {
        let store = parse(
            r#"{
              "2025-06-02": {"aircraftCount": 3, "vesselCount": 5, "officialShipCount": 1, "balloonCount": 0},
              "2024-12-31": {"aircraftCount": 1, "vesselCount": 1, "officialShipCount": 1, "balloonCount": 1},
              "2025-01-15": {"aircraftCount": 0, "vesselCount": 0, "officialShipCount": 0, "balloonCount": 0}
            }"#,
        )
        .unwrap();

        let keys: Vec<String> = store.sorted_dates().iter().map(|d| d.to_string()).collect();
        assert_eq!(keys, vec!["2024-12-31", "2025-01-15", "2025-06-02"]);
        assert_eq!(store.latest_date().unwrap().to_string(), "2025-06-02");
        assert_eq!(store.get(&store.latest_date().unwrap()).unwrap().median_line_crossings, None);
    }

    #[test]
    fn missing_count_is_an_error_not_zero() {
        let err = parse(r#"{"2025-06-02": {"aircraftCount": 3, "vesselCount": 5, "officialShipCount": 1}}"#)
            .unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn negative_count_is_rejected() {
        let err = parse(
            r#"{"2025-06-02": {"aircraftCount": -1, "vesselCount": 5, "officialShipCount": 1, "balloonCount": 0}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn invalid_key_is_reported() {
        let err = parse(
            r#"{"2025-6-2": {"aircraftCount": 1, "vesselCount": 5, "officialShipCount": 1, "balloonCount": 0}}"#,
        )
        .unwrap_err();
        match err {
            LoadError::InvalidDate { value, .. } => assert_eq!(value, "2025-6-2"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_object_document_is_malformed() {
        assert!(matches!(parse("[1, 2, 3]"), Err(LoadError::Malformed { .. })));
        assert!(matches!(parse("not json"), Err(LoadError::Malformed { .. })));
    }
}
