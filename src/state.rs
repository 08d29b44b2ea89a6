use crate::details::DetailSource;
use crate::errors::LoadError;
use crate::models::{DetailEvent, SourceStatus};
use crate::selection::Selection;
use crate::storage::{load_details, load_summary, DataSources};
use crate::store::RecordStore;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub sources: DataSources,
    pub dashboard: Arc<Mutex<Dashboard>>,
}

impl AppState {
    pub fn new(sources: DataSources, dashboard: Dashboard) -> Self {
        Self {
            sources,
            dashboard: Arc::new(Mutex::new(dashboard)),
        }
    }
}

/// Everything the dashboard shows, owned in one place.
///
/// The record store and detail events only change through [`apply_summary`]
/// and [`apply_details`]; a failed load never replaces data that loaded
/// earlier.
///
/// [`apply_summary`]: Dashboard::apply_summary
/// [`apply_details`]: Dashboard::apply_details
#[derive(Debug, Default)]
pub struct Dashboard {
    store: Option<RecordStore>,
    details: DetailSource,
    selection: Option<Selection>,
    last_token: u64,
}

impl Dashboard {
    /// Loads both sources. Failures are logged and leave the dashboard empty.
    pub async fn load(sources: &DataSources) -> Self {
        let mut dashboard = Dashboard::default();
        dashboard.reload(sources).await;
        dashboard
    }

    pub async fn reload(&mut self, sources: &DataSources) -> (SourceStatus, SourceStatus) {
        let summary = self.apply_summary(load_summary(&sources.summary_path).await);
        let details = self.apply_details(load_details(&sources.detail_dir).await);
        (summary, details)
    }

    pub fn apply_summary(&mut self, result: Result<RecordStore, LoadError>) -> SourceStatus {
        match result {
            Ok(store) => {
                info!(records = store.len(), "summary loaded");
                match store.latest_date() {
                    Some(latest) => {
                        self.issue(latest);
                    }
                    None => self.selection = None,
                }
                self.store = Some(store);
                SourceStatus { ok: true, message: None }
            }
            Err(err) => {
                if self.store.is_some() {
                    error!("summary reload failed, keeping previous data: {err}");
                } else {
                    error!("summary load failed: {err}");
                }
                SourceStatus {
                    ok: false,
                    message: Some(err.to_string()),
                }
            }
        }
    }

    pub fn apply_details(&mut self, result: Result<Vec<DetailEvent>, LoadError>) -> SourceStatus {
        match result {
            Ok(events) => {
                info!(events = events.len(), "detail events loaded");
                self.details = DetailSource::Loaded(events);
                SourceStatus { ok: true, message: None }
            }
            Err(err) => {
                if matches!(self.details, DetailSource::Loaded(_)) {
                    warn!("detail reload failed, keeping previous events: {err}");
                } else {
                    warn!("detail events unavailable: {err}");
                    self.details = DetailSource::Unavailable;
                }
                SourceStatus {
                    ok: false,
                    message: Some(err.to_string()),
                }
            }
        }
    }

    pub fn store(&self) -> Option<&RecordStore> {
        self.store.as_ref()
    }

    pub fn details(&self) -> &DetailSource {
        &self.details
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Moves the selection to `report_date`, which must be in the store.
    pub fn select(&mut self, report_date: NaiveDate) -> Result<&Selection, SelectError> {
        let store = self.store.as_ref().ok_or(SelectError::NoData)?;
        if !store.contains(&report_date) {
            return Err(SelectError::UnknownDate(report_date));
        }

        Ok(self.issue(report_date))
    }

    /// Points the selection at `report_date` with a token newer than any
    /// issued before, even across reloads that emptied the store.
    fn issue(&mut self, report_date: NaiveDate) -> &Selection {
        let selection = match self.selection.take() {
            Some(mut selection) => {
                selection.select(report_date);
                selection
            }
            None => Selection::after(report_date, self.last_token),
        };
        self.last_token = selection.token();
        self.selection.insert(selection)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SelectError {
    NoData,
    UnknownDate(NaiveDate),
}
