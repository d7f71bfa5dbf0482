use std::{fs, path::Path, time::Duration};

use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub service_url: String,
    pub display_cap: usize,
    pub request_timeout_secs: u64,
    pub require_relation: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service_url: "http://localhost:8000".into(),
            display_cap: client_core::DEFAULT_DISPLAY_CAP,
            request_timeout_secs: 60,
            require_relation: false,
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    service_url: Option<String>,
    display_cap: Option<usize>,
    request_timeout_secs: Option<u64>,
    require_relation: Option<bool>,
}

/// Defaults, then the TOML file at `path` if present, then environment variables.
pub fn load_settings(path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => apply_file(&mut settings, file_cfg),
            Err(err) => warn!(path = %path.display(), %err, "ignoring unparseable config file"),
        }
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    settings
}

fn apply_file(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.service_url.filter(|v| !v.trim().is_empty()) {
        settings.service_url = v;
    }
    if let Some(v) = file_cfg.display_cap.filter(|v| *v > 0) {
        settings.display_cap = v;
    }
    if let Some(v) = file_cfg.request_timeout_secs.filter(|v| *v > 0) {
        settings.request_timeout_secs = v;
    }
    if let Some(v) = file_cfg.require_relation {
        settings.require_relation = v;
    }
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("KIOSK_SERVICE_URL") {
        settings.service_url = v;
    }
    if let Some(v) = lookup("APP__SERVICE_URL") {
        settings.service_url = v;
    }

    if let Some(v) = lookup("APP__DISPLAY_CAP") {
        if let Ok(parsed) = v.parse::<usize>() {
            if parsed > 0 {
                settings.display_cap = parsed;
            }
        }
    }

    if let Some(v) = lookup("APP__REQUEST_TIMEOUT_SECS") {
        if let Ok(parsed) = v.parse::<u64>() {
            if parsed > 0 {
                settings.request_timeout_secs = parsed;
            }
        }
    }

    if let Some(v) = lookup("APP__REQUIRE_RELATION") {
        if let Ok(parsed) = v.parse::<bool>() {
            settings.require_relation = parsed;
        }
    }
}
