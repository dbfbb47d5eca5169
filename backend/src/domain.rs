use chrono::{Local, NaiveDate};
use shared::{decode_event_batch, Event};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read event fixture {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse event fixture {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Source of "today" for the upcoming filter
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    Local,
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::Local => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

/// Events served by the development server, read from a JSON fixture on
/// every request so the file can be edited while the server runs.
#[derive(Debug, Clone)]
pub struct EventCatalog {
    fixture_path: PathBuf,
}

impl EventCatalog {
    pub fn new(fixture_path: impl Into<PathBuf>) -> Self {
        Self {
            fixture_path: fixture_path.into(),
        }
    }

    pub fn fixture_path(&self) -> &Path {
        &self.fixture_path
    }

    /// Load and validate every event in the fixture
    pub async fn load(&self) -> Result<Vec<Event>, CatalogError> {
        let contents = tokio::fs::read_to_string(&self.fixture_path)
            .await
            .map_err(|source| CatalogError::Read {
                path: self.fixture_path.clone(),
                source,
            })?;

        let records: Vec<serde_json::Value> =
            serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
                path: self.fixture_path.clone(),
                source,
            })?;

        let (events, rejected) = decode_event_batch(records);
        for error in &rejected {
            warn!("Skipping fixture event: {}", error);
        }
        info!(
            "Loaded {} events from {} ({} skipped)",
            events.len(),
            self.fixture_path.display(),
            rejected.len()
        );

        Ok(events)
    }

    pub async fn upcoming(&self, today: NaiveDate, limit: usize) -> Result<Vec<Event>, CatalogError> {
        Ok(select_upcoming(self.load().await?, today, limit))
    }
}

/// Events still running on or after `today`, soonest first, at most `limit`
pub fn select_upcoming(events: Vec<Event>, today: NaiveDate, limit: usize) -> Vec<Event> {
    let mut upcoming: Vec<Event> = events
        .into_iter()
        .filter(|event| event.last_day() >= today)
        .collect();
    upcoming.sort_by_key(|event| (event.start_date, event.start_time));
    upcoming.truncate(limit);
    upcoming
}
