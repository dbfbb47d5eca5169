use axum::http::HeaderValue;
use chrono::NaiveDate;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_FIXTURE: &str = "fixtures/events.json";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Settings for the development server, read from `EVENT_CONSOLE_*` variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub fixture_path: PathBuf,
    pub allowed_origin: HeaderValue,
    /// Pins "today" for the upcoming filter, handy with a static fixture
    pub today: Option<NaiveDate>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr_raw = lookup("EVENT_CONSOLE_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_raw.parse::<SocketAddr>().map_err(|_| ConfigError::Invalid {
            key: "EVENT_CONSOLE_ADDR",
            value: addr_raw.clone(),
        })?;

        let fixture_path = lookup("EVENT_CONSOLE_FIXTURE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FIXTURE));

        let origin_raw = lookup("EVENT_CONSOLE_ALLOWED_ORIGIN")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string());
        let allowed_origin = origin_raw.parse::<HeaderValue>().map_err(|_| ConfigError::Invalid {
            key: "EVENT_CONSOLE_ALLOWED_ORIGIN",
            value: origin_raw.clone(),
        })?;

        let today = lookup("EVENT_CONSOLE_TODAY")
            .map(|raw| {
                shared::parse_calendar_date(&raw).map_err(|_| ConfigError::Invalid {
                    key: "EVENT_CONSOLE_TODAY",
                    value: raw.clone(),
                })
            })
            .transpose()?;

        Ok(Self {
            addr,
            fixture_path,
            allowed_origin,
            today,
        })
    }
}
