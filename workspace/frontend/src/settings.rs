use common::{normalize_base_url, DEFAULT_BACKEND_URL};
use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

const BACKEND_URL_KEY: &str = "trustdesk_backend_url";
const LOG_LEVEL_KEY: &str = "trustdesk_log_level";

/// Application settings, built once at startup and handed to the app.
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Backend base URL (protocol + host + port), without a trailing slash
    pub backend_url: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            backend_url: build_time_backend_url(),
            log_level: Level::Info,
            debug_mode: false,
            toast_duration_ms: 5000,
        }
    }
}

/// Backend URL baked in at build time through `TRUSTDESK_BACKEND_URL`.
fn build_time_backend_url() -> String {
    normalize_base_url(option_env!("TRUSTDESK_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL))
}

fn parse_level(raw: &str) -> Option<Level> {
    match raw.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

impl AppSettings {
    /// Create settings from the build environment, window location and localStorage
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(BACKEND_URL_KEY) {
                settings.backend_url = normalize_base_url(&url);
            }

            if let Ok(Some(level)) = storage.get_item(LOG_LEVEL_KEY) {
                if let Some(level) = parse_level(&level) {
                    settings.log_level = level;
                }
            }
        }

        settings
    }

    /// Persist the backend override so the next page load picks it up
    pub fn save_backend_url(url: &str) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                storage.set_item(BACKEND_URL_KEY, &normalize_base_url(url))?;
            }
        }
        Ok(())
    }

    /// Drop the stored override, falling back to the build-time URL
    pub fn clear_backend_url() -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                storage.remove_item(BACKEND_URL_KEY)?;
            }
        }
        Ok(())
    }

    /// Get the full URL for an endpoint path
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.backend_url, endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("WARN"), Some(Level::Warn));
        assert_eq!(parse_level("verbose"), None);
    }

    #[test]
    fn test_api_url_joins_path() {
        let settings = AppSettings {
            backend_url: "http://api.local:8000".to_string(),
            ..AppSettings::default()
        };
        assert_eq!(settings.api_url("/api/summary"), "http://api.local:8000/api/summary");
    }
}
