use crate::dates::{parse_date, to_event_date};
use crate::errors::LoadError;
use crate::models::{DetailEvent, DetailEntry};
use crate::store::RecordStore;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct DataSources {
    pub summary_path: PathBuf,
    pub detail_dir: PathBuf,
}

impl DataSources {
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            summary_path: dir.join("summary.json"),
            detail_dir: dir.join("detail"),
        }
    }
}

pub fn resolve_data_dir() -> PathBuf {
    if let Ok(path) = env::var("APP_DATA_DIR") {
        return PathBuf::from(path);
    }

    PathBuf::from("data")
}

pub async fn load_summary(path: &Path) -> Result<RecordStore, LoadError> {
    let bytes = fs::read(path).await.map_err(unreachable(path))?;
    RecordStore::from_json(path, &bytes)
}

/// Reads every `*.json` file in `dir`, in file-name order, and concatenates
/// their events. Order within a file is kept.
///
/// A file that cannot be read or parsed is logged and skipped; only an
/// unreadable directory fails the load.
pub async fn load_details(dir: &Path) -> Result<Vec<DetailEvent>, LoadError> {
    let mut entries = fs::read_dir(dir).await.map_err(unreachable(dir))?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(unreachable(dir))? {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();

    let mut events = Vec::new();
    for file in files {
        let parsed = match fs::read(&file).await {
            Ok(bytes) => parse_details(&file, &bytes),
            Err(err) => Err(unreachable(&file)(err)),
        };
        match parsed {
            Ok(found) => events.extend(found),
            Err(err) => warn!("skipping detail file: {err}"),
        }
    }
    Ok(events)
}

fn unreachable(path: &Path) -> impl FnOnce(std::io::Error) -> LoadError {
    let path = path.to_path_buf();
    move |source| LoadError::Unreachable { path, source }
}

pub fn parse_details(path: &Path, bytes: &[u8]) -> Result<Vec<DetailEvent>, LoadError> {
    let raw: Vec<DetailEntry> =
        serde_json::from_slice(bytes).map_err(|source| LoadError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    let parse = |value: &str| {
        parse_date(value).ok_or_else(|| LoadError::InvalidDate {
            path: path.to_path_buf(),
            value: value.to_string(),
        })
    };

    raw.into_iter()
        .map(|entry| -> Result<DetailEvent, LoadError> {
            let event_date = match (&entry.event_date, &entry.report_date) {
                (Some(event_date), _) => parse(event_date)?,
                (None, Some(report_date)) => to_event_date(parse(report_date)?),
                (None, None) => {
                    return Err(LoadError::MissingDate {
                        path: path.to_path_buf(),
                    });
                }
            };
            Ok(DetailEvent {
                event_date,
                sequence_number: entry.sequence_number,
                time_window: entry.time_window,
                content: entry.content,
            })
        })
        .collect()
}
