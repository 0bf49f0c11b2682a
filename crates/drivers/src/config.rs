use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const CONFIG_ENV: &str = "FOLIO_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub preferences_path: String,
    pub content_path: Option<String>,
    pub submit_delay_ms: u64,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            preferences_path: "folio.sqlite3".to_string(),
            content_path: None,
            submit_delay_ms: 1500,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// `$FOLIO_CONFIG` if set, otherwise `folio.toml` in the working
    /// directory. A missing default file yields the defaults.
    pub fn load() -> Result<Self, String> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => Self::load_from_path(Path::new(&path)),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_from_path(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, String> {
        let raw = fs::read_to_string(path)
            .map_err(|error| format!("failed to read config {}: {error}", path.display()))?;
        toml::from_str(&raw)
            .map_err(|error| format!("invalid config {}: {error}", path.display()))
    }
}
