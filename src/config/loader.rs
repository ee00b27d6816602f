use crate::utils::{debug_with_context, warn};
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::env;
use std::path::{Path, PathBuf};
use tokio::fs;

pub const DATE_FORMAT_ENV: &str = "POWERLINE_STATUS_DATE_FORMAT";

/// Load raw (unvalidated) options with priority: CLI args > Env vars > Config files > Defaults.
///
/// `overrides` carries the CLI values, already keyed by option name.
pub async fn load_options(config_path: Option<PathBuf>, overrides: Map<String, Value>) -> Result<Value> {
    let mut options = if let Some(path) = config_path {
        load_options_file(&path).await?
    } else {
        load_options_from_default_locations().await
    };

    if !options.is_object() {
        // Leave non-table input for the validator to report, unless there is
        // something to merge into it.
        if overrides.is_empty() && env::var(DATE_FORMAT_ENV).is_err() {
            return Ok(options);
        }
        warn("config", "options file does not contain a table, ignoring it");
        options = Value::Object(Map::new());
    }

    apply_env_overrides(&mut options);

    if let Value::Object(table) = &mut options {
        table.extend(overrides);
    }

    Ok(options)
}

/// Load options from the first readable default location
async fn load_options_from_default_locations() -> Value {
    for path in get_config_search_paths() {
        if path.exists() {
            match load_options_file(&path).await {
                Ok(options) => {
                    debug_with_context("config", &format!("Loaded options from {}", path.display()));
                    return options;
                }
                Err(e) => {
                    warn("config", &format!("Failed to load options from {}: {:#}", path.display(), e));
                }
            }
        }
    }

    Value::Object(Map::new())
}

/// Get list of paths to search for configuration files
pub fn get_config_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // Current directory
    paths.push(PathBuf::from(".powerline-status.json"));

    if let Some(config) = dirs::config_dir() {
        paths.push(config.join("powerline-status").join("config.json"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".config").join("powerline-status").join("config.json"));
    }

    paths.dedup();
    paths
}

/// Load options from a specific file
pub async fn load_options_file(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let options: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(options)
}

/// Apply environment variable overrides to raw options
fn apply_env_overrides(options: &mut Value) {
    if let (Ok(format), Value::Object(table)) = (env::var(DATE_FORMAT_ENV), options) {
        table.insert("date_format".to_string(), Value::String(format));
    }
}
