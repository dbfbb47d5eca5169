use gloo::net::http::Request;
use shared::LogEntry;
use wasm_bindgen_futures::spawn_local;

use crate::config::FrontendConfig;

/// Logs to the browser console and forwards the line to the backend log sink
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        gloo::console::debug!(format!("[{}] {}", component, message));
        Self::log("debug", message, Some(component.to_string()));
    }

    pub fn info_with_component(component: &str, message: &str) {
        gloo::console::info!(format!("[{}] {}", component, message));
        Self::log("info", message, Some(component.to_string()));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        gloo::console::warn!(format!("[{}] {}", component, message));
        Self::log("warn", message, Some(component.to_string()));
    }

    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(format!("[{}] {}", component, message));
        Self::log("error", message, Some(component.to_string()));
    }

    fn log(level: &str, message: &str, component: Option<String>) {
        let entry = LogEntry {
            level: level.to_string(),
            message: message.to_string(),
            component,
        };
        let endpoint = FrontendConfig::from_build_env().log_endpoint();

        // Send log asynchronously without blocking; a dead sink is not an error
        spawn_local(async move {
            if let Ok(request) = Request::post(&endpoint).json(&entry) {
                let _ = request.send().await;
            }
        });
    }
}
