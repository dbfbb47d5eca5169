/// Backend used when no build-time override is given
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Number of upcoming events requested from the backend
pub const DEFAULT_UPCOMING_LIMIT: u32 = 10;

/// Runtime settings for the console frontend
#[derive(Debug, Clone, PartialEq)]
pub struct FrontendConfig {
    pub api_base_url: String,
    pub upcoming_limit: u32,
    /// Periodic refresh of the upcoming list; `None` disables it
    pub refresh_interval_ms: Option<u32>,
}

impl FrontendConfig {
    /// Build the config, honouring `EVENT_CONSOLE_API_URL` and
    /// `EVENT_CONSOLE_REFRESH_MS` when they were set at compile time
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("EVENT_CONSOLE_API_URL"),
            option_env!("EVENT_CONSOLE_REFRESH_MS"),
        )
    }

    fn from_values(api_url: Option<&str>, refresh_ms: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let refresh_interval_ms = refresh_ms
            .and_then(|ms| ms.trim().parse::<u32>().ok())
            .filter(|ms| *ms > 0);

        Self {
            api_base_url,
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
            refresh_interval_ms,
        }
    }

    pub fn log_endpoint(&self) -> String {
        format!("{}/api/logs", self.api_base_url)
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
