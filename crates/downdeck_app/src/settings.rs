use std::fs;
use std::path::Path;

use deck_logging::deck_warn;
use serde::Deserialize;

const SETTINGS_FILENAME: &str = "downdeck.ron";

/// Client-side settings, read from `downdeck.ron` in the working directory.
///
/// The two intervals are part of the observable contract (they bound how
/// stale the surfaces can be), so they are never hard-coded at use sites.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub base_url: String,
    pub poll_interval_secs: u64,
    pub reload_interval_secs: u64,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_owned(),
            poll_interval_secs: 3,
            reload_interval_secs: 10,
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}

/// Loads settings, falling back to defaults when the file is missing or
/// unreadable. A broken settings file never prevents startup.
pub fn load(dir: &Path) -> AppSettings {
    let path = dir.join(SETTINGS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return AppSettings::default();
        }
        Err(err) => {
            deck_warn!("Failed to read settings from {:?}: {}", path, err);
            return AppSettings::default();
        }
    };

    match ron::from_str(&content) {
        Ok(settings) => settings,
        Err(err) => {
            deck_warn!("Failed to parse settings from {:?}: {}", path, err);
            AppSettings::default()
        }
    }
}
