use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use frontend::AppSettings;

/// Settings file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "agristock.toml";

/// Prefix of the environment variables overriding settings (e.g. `AGRISTOCK_API_BASE_URL`).
pub const ENV_PREFIX: &str = "AGRISTOCK";

/// Load application settings.
///
/// Layers, lowest priority first: built-in defaults, the TOML file (optional
/// unless `path` is given explicitly), then `AGRISTOCK_*` environment variables.
pub fn load_settings(path: Option<&Path>) -> Result<AppSettings> {
    build_settings(path, Environment::with_prefix(ENV_PREFIX))
}

fn build_settings(path: Option<&Path>, env: Environment) -> Result<AppSettings> {
    let defaults = AppSettings::default();
    let (file, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    Config::builder()
        .set_default("api_base_url", defaults.api_base_url)?
        .set_default("history_path", defaults.history_path)?
        .set_default("predict_path", defaults.predict_path)?
        .set_default("log_filter", defaults.log_filter)?
        .add_source(File::from(file.clone()).format(FileFormat::Toml).required(required))
        .add_source(env.try_parsing(true))
        .build()
        .with_context(|| format!("Failed to load settings from {}", file.display()))?
        .try_deserialize::<AppSettings>()
        .context("Invalid settings")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let mut map = config::Map::new();
        for (key, value) in vars {
            map.insert(key.to_string(), value.to_string());
        }
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        let settings = build_settings(None, env(&[])).unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = toml_file(
            r#"
            api_base_url = "http://prices.internal:8080"
            request_timeout_ms = 1500
            "#,
        );

        let settings = build_settings(Some(file.path()), env(&[])).unwrap();
        assert_eq!(settings.api_base_url, "http://prices.internal:8080");
        assert_eq!(settings.request_timeout_ms, Some(1500));
        assert_eq!(settings.history_path, "/api/prices/history");
    }

    #[test]
    fn test_env_overrides_file() {
        let file = toml_file(r#"api_base_url = "http://from-file:5000""#);
        let vars = env(&[
            ("AGRISTOCK_API_BASE_URL", "http://from-env:5000"),
            ("AGRISTOCK_REQUEST_TIMEOUT_MS", "250"),
        ]);

        let settings = build_settings(Some(file.path()), vars).unwrap();
        assert_eq!(settings.api_base_url, "http://from-env:5000");
        assert_eq!(settings.request_timeout_ms, Some(250));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let missing = Path::new("/nonexistent/agristock.toml");
        assert!(build_settings(Some(missing), env(&[])).is_err());
    }
}
