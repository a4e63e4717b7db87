//! Shell configuration.

use serde::Deserialize;
use std::path::Path;

/// Configuration for one shell run, loaded from the environment with an
/// optional JSON config file taking precedence.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Path to the SQLite database file (default: "carpool.db").
    pub db_path: String,

    /// Prompt string printed before each command (default: "carpool> ").
    pub prompt: String,
}

/// Config file structure.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    db_path: String,
    #[serde(default)]
    prompt: Option<String>,
}

impl ShellConfig {
    /// Load configuration from a config file if one exists, otherwise
    /// from environment variables with defaults.
    #[must_use]
    pub fn from_env() -> Self {
        // Probe a couple of fixed paths for a config file first.
        let config_paths = ["carpool.json", ".config/carpool.json"];
        for path in &config_paths {
            if let Ok(file) = load_config_file(path) {
                tracing::info!(path = %path, "Loaded configuration from file");
                return Self {
                    db_path: file.db_path,
                    prompt: file.prompt.unwrap_or_else(default_prompt),
                };
            }
        }

        tracing::debug!("Config file not found, using environment variables");
        Self {
            db_path: std::env::var("CARPOOL_DB").unwrap_or_else(|_| "carpool.db".into()),
            prompt: std::env::var("CARPOOL_PROMPT").unwrap_or_else(|_| default_prompt()),
        }
    }
}

fn default_prompt() -> String {
    "carpool> ".into()
}

/// Load the config from a JSON file.
fn load_config_file(path: &str) -> Result<ConfigFile, std::io::Error> {
    let path = Path::new(path);
    if !path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Config file not found",
        ));
    }
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            db_path: "carpool.db".into(),
            prompt: default_prompt(),
        }
    }
}
