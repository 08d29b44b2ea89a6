use crate::models::{DetailEvent, DetailStatus};
use chrono::NaiveDate;

/// Detail events as held by the dashboard.
#[derive(Debug, Clone, Default)]
pub enum DetailSource {
    #[default]
    NotLoaded,
    Unavailable,
    Loaded(Vec<DetailEvent>),
}

impl DetailSource {
    pub fn event_count(&self) -> usize {
        match self {
            DetailSource::Loaded(events) => events.len(),
            _ => 0,
        }
    }

    /// Events for `event_date` and whether the lookup could be answered at all.
    pub fn resolve(&self, event_date: NaiveDate) -> (DetailStatus, Vec<DetailEvent>) {
        match self {
            DetailSource::Loaded(events) => {
                let matches: Vec<DetailEvent> =
                    details_for(events, event_date).into_iter().cloned().collect();
                if matches.is_empty() {
                    (DetailStatus::NoEvents, matches)
                } else {
                    (DetailStatus::Found, matches)
                }
            }
            DetailSource::NotLoaded | DetailSource::Unavailable => {
                (DetailStatus::Unavailable, Vec::new())
            }
        }
    }
}

/// Stable filter on event date. Callers convert report dates first.
pub fn details_for(events: &[DetailEvent], event_date: NaiveDate) -> Vec<&DetailEvent> {
    events
        .iter()
        .filter(|event| event.event_date == event_date)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    fn event(day: &str, seq: u32, content: &str) -> DetailEvent {
        DetailEvent {
            event_date: date(day),
            sequence_number: seq,
            time_window: "0600-1200".to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(details_for(&[], date("2025-06-01")).is_empty());
    }

    #[test]
    fn keeps_source_order() {
        let events = vec![
            event("2025-06-01", 3, "c"),
            event("2025-05-31", 1, "x"),
            event("2025-06-01", 1, "a"),
            event("2025-06-01", 2, "b"),
        ];
        let found: Vec<&str> = details_for(&events, date("2025-06-01"))
            .iter()
            .map(|e| e.content.as_str())
            .collect();
        assert_eq!(found, vec!["c", "a", "b"]);
    }

    #[test]
    fn no_match_is_distinct_from_unavailable() {
        let loaded = DetailSource::Loaded(vec![event("2025-05-31", 1, "x")]);
        let (status, events) = loaded.resolve(date("2025-06-01"));
        assert_eq!(status, DetailStatus::NoEvents);
        assert!(events.is_empty());

        let (status, events) = loaded.resolve(date("2025-05-31"));
        assert_eq!(status, DetailStatus::Found);
        assert_eq!(events.len(), 1);

        let (status, _) = DetailSource::Unavailable.resolve(date("2025-05-31"));
        assert_eq!(status, DetailStatus::Unavailable);
        let (status, _) = DetailSource::NotLoaded.resolve(date("2025-05-31"));
        assert_eq!(status, DetailStatus::Unavailable);
    }
}
