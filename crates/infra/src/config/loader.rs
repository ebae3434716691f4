//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `MARQUEE_EVENT_TARGET`: RFC 3339 moment of the event (required)
//! - `MARQUEE_TICK_INTERVAL_MS`: countdown tick period in milliseconds
//! - `MARQUEE_PROBE_OFFSET`: probe line offset from the viewport top
//! - `MARQUEE_HEADER_OFFSET`: fixed header height for scroll-to targets
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./marquee.json` or `./marquee.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use marquee_domain::{Config, MarqueeError, Result};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `MarqueeError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - A loaded value fails validation
pub fn load() -> Result<Config> {
    // Try loading from environment first
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            // Fall back to file
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `MARQUEE_EVENT_TARGET` must be present; the remaining variables fall
/// back to the domain defaults when unset.
///
/// # Errors
/// Returns `MarqueeError::Config` if the target is missing or any
/// variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();

    config.event.target = parse_target(&env_var("MARQUEE_EVENT_TARGET")?)?;

    if let Ok(raw) = std::env::var("MARQUEE_TICK_INTERVAL_MS") {
        config.countdown.tick_interval_ms = raw
            .parse::<u64>()
            .map_err(|e| MarqueeError::Config(format!("Invalid tick interval: {}", e)))?;
    }
    if let Ok(raw) = std::env::var("MARQUEE_PROBE_OFFSET") {
        config.viewport.probe_offset = raw
            .parse::<f64>()
            .map_err(|e| MarqueeError::Config(format!("Invalid probe offset: {}", e)))?;
    }
    if let Ok(raw) = std::env::var("MARQUEE_HEADER_OFFSET") {
        config.viewport.header_offset = raw
            .parse::<f64>()
            .map_err(|e| MarqueeError::Config(format!("Invalid header offset: {}", e)))?;
    }

    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Missing sections fall back to the domain defaults.
///
/// # Errors
/// Returns `MarqueeError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - A loaded value fails validation
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(MarqueeError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            MarqueeError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| MarqueeError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| MarqueeError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| MarqueeError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(MarqueeError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches for config files in the following locations (in order):
/// 1. Current working directory (`./config.{json,toml}`,
///    `./marquee.{json,toml}`)
/// 2. Parent directories (up to 2 levels)
/// 3. Relative to executable location
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    // Try current working directory
    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("marquee.json"),
            cwd.join("marquee.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
            cwd.join("../../config.json"),
            cwd.join("../../config.toml"),
        ]);
    }

    // Try relative to executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("marquee.json"),
                exe_dir.join("marquee.toml"),
            ]);
        }
    }

    // Return first existing candidate
    candidates.into_iter().find(|path| path.exists())
}

/// Parse an RFC 3339 timestamp into UTC
fn parse_target(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| MarqueeError::Config(format!("Invalid event target '{}': {}", raw, e)))
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| MarqueeError::Config(format!("Missing required environment variable: {}", key)))
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn clear_env() {
        std::env::remove_var("MARQUEE_EVENT_TARGET");
        std::env::remove_var("MARQUEE_TICK_INTERVAL_MS");
        std::env::remove_var("MARQUEE_PROBE_OFFSET");
        std::env::remove_var("MARQUEE_HEADER_OFFSET");
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("MARQUEE_EVENT_TARGET", "2026-08-01T18:30:00Z");
        std::env::set_var("MARQUEE_TICK_INTERVAL_MS", "500");
        std::env::set_var("MARQUEE_PROBE_OFFSET", "120");
        std::env::set_var("MARQUEE_HEADER_OFFSET", "64");

        let result = load_from_env();
        assert!(result.is_ok(), "Should load config from env vars, error: {:?}", result.err());

        let config = result.unwrap();
        assert_eq!(config.event.target.to_rfc3339(), "2026-08-01T18:30:00+00:00");
        assert_eq!(config.countdown.tick_interval_ms, 500);
        assert_eq!(config.viewport.probe_offset, 120.0);
        assert_eq!(config.viewport.header_offset, 64.0);

        clear_env();
    }

    #[test]
    fn test_load_from_env_defaults_optional_vars() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("MARQUEE_EVENT_TARGET", "2026-08-01T18:30:00+02:00");

        let config = load_from_env().expect("target alone should be enough");
        // Offset timestamps normalize to UTC
        assert_eq!(config.event.target.to_rfc3339(), "2026-08-01T16:30:00+00:00");
        assert_eq!(config.countdown.tick_interval_ms, 1000);
        assert_eq!(config.viewport.probe_offset, 100.0);

        clear_env();
    }

    #[test]
    fn test_load_from_env_missing_target() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let result = load_from_env();
        assert!(result.is_err(), "Should fail with missing env var");

        let err = result.unwrap_err();
        assert!(matches!(err, MarqueeError::Config(_)), "Should be a Config error");
    }

    #[test]
    fn test_load_from_env_invalid_target() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("MARQUEE_EVENT_TARGET", "May 15, 2025 17:00:00");

        let result = load_from_env();
        assert!(result.is_err(), "Should fail with non-RFC-3339 target");

        clear_env();
    }

    #[test]
    fn test_load_from_env_invalid_number() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("MARQUEE_EVENT_TARGET", "2026-08-01T18:30:00Z");
        std::env::set_var("MARQUEE_TICK_INTERVAL_MS", "not-a-number");

        let result = load_from_env();
        assert!(result.is_err(), "Should fail with invalid tick interval");

        clear_env();
    }

    #[test]
    fn test_load_from_env_rejects_zero_tick() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("MARQUEE_EVENT_TARGET", "2026-08-01T18:30:00Z");
        std::env::set_var("MARQUEE_TICK_INTERVAL_MS", "0");

        let result = load_from_env();
        assert!(result.is_err(), "Validation should reject a zero tick period");

        clear_env();
    }

    #[test]
    fn test_load_from_file_json() {
        let json_content = r#"{
            "event": { "target": "2025-05-15T17:00:00Z" },
            "countdown": { "tick_interval_ms": 250 },
            "viewport": { "probe_offset": 100.0, "header_offset": 70.0 }
        }"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(json_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let result = load_from_file(Some(path.clone()));
        assert!(result.is_ok(), "Should load config from JSON file");

        let config = result.unwrap();
        assert_eq!(config.countdown.tick_interval_ms, 250);
        assert_eq!(config.event.target.to_rfc3339(), "2025-05-15T17:00:00+00:00");

        // Cleanup
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_toml_partial() {
        let toml_content = r#"
[event]
target = "2026-01-01T00:00:00Z"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("toml");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let result = load_from_file(Some(path.clone()));
        assert!(result.is_ok(), "Should load config from TOML file");

        let config = result.unwrap();
        assert_eq!(config.event.target.to_rfc3339(), "2026-01-01T00:00:00+00:00");
        // Missing sections fall back to defaults
        assert_eq!(config.countdown.tick_interval_ms, 1000);
        assert_eq!(config.viewport.header_offset, 70.0);

        // Cleanup
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/config.json")));
        assert!(result.is_err(), "Should fail when file not found");

        let err = result.unwrap_err();
        assert!(matches!(err, MarqueeError::Config(_)), "Should be a Config error");
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let invalid_json = r#"{ "this is": "not valid json" "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(invalid_json.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let result = load_from_file(Some(path.clone()));
        assert!(result.is_err(), "Should fail with invalid JSON");

        // Cleanup
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let content = "some content";
        let path = PathBuf::from("test.yaml");
        let result = parse_config(content, &path);
        assert!(result.is_err(), "Should fail with unsupported format");
    }
}
