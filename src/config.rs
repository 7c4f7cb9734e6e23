use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use reqwest::Url;

pub const API_URL_VAR: &str = "VITE_API_URL";
pub const ORIGIN_VAR: &str = "APP_ORIGIN";

/// Base URL used when `VITE_API_URL` is unset or empty
pub const DEFAULT_BASE_URL: &str = "api";
pub const DEFAULT_ORIGIN: &str = "http://localhost:8000/";

/// Immutable API configuration, resolved once and shared by every namespace
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Prefix for every request path, e.g. `api` or `https://x/api`
    pub base_url: String,
    /// Location a relative base URL is resolved against, like a browser page
    pub origin: Url,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, origin: Url) -> Self {
        Self {
            base_url: base_url.into(),
            origin,
        }
    }

    /// Resolve from the process environment, falling back to the nearest `.env` file
    pub fn load() -> Result<Self> {
        Self::from_env_file(dotenvy::dotenv_iter())
    }

    /// Like [`ApiConfig::load`], reading the `.env` file at `path`.
    /// A missing file is not an error; a malformed one is.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_env_file(dotenvy::from_path_iter(path.as_ref()))
    }

    fn from_env_file(file: dotenvy::Result<dotenvy::Iter<File>>) -> Result<Self> {
        let vars = match file {
            Ok(iter) => {
                let vars = iter
                    .collect::<dotenvy::Result<HashMap<String, String>>>()
                    .context("Failed to read .env file")?;
                tracing::debug!("Loaded {} variables from .env", vars.len());
                vars
            }
            Err(e) if e.not_found() => {
                tracing::debug!("No .env file found");
                HashMap::new()
            }
            Err(e) => return Err(e).context("Failed to read .env file"),
        };

        // Process environment wins over the file
        Self::from_lookup(|key| env::var(key).ok().or_else(|| vars.get(key).cloned()))
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(API_URL_VAR)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let origin = lookup(ORIGIN_VAR)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
        let origin = Url::parse(&origin)
            .with_context(|| format!("{} must be an absolute URL, got '{}'", ORIGIN_VAR, origin))?;

        Ok(Self { base_url, origin })
    }

    /// Join the base URL and a request path the way the HTTP client does:
    /// trailing slashes of the base and leading slashes of the path collapse to one.
    pub fn endpoint(&self, path: &str) -> String {
        combine_urls(&self.base_url, path)
    }

    pub fn log_startup(&self) {
        tracing::info!("API configuration loaded:");
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Origin: {}", self.origin);
    }
}

fn combine_urls(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes tests that read or write the process environment
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_config_with_defaults() {
        let config = ApiConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.base_url, "api");
        assert_eq!(config.origin.as_str(), "http://localhost:8000/");
    }

    #[test]
    fn test_config_with_all_vars() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("VITE_API_URL", "https://x/api"),
            ("APP_ORIGIN", "https://garden.example/"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "https://x/api");
        assert_eq!(config.origin.as_str(), "https://garden.example/");
    }

    #[test]
    fn test_empty_api_url_falls_back_to_default() {
        let config = ApiConfig::from_lookup(lookup_from(&[("VITE_API_URL", "")])).unwrap();
        assert_eq!(config.base_url, "api");
    }

    #[test]
    fn test_invalid_origin() {
        let result = ApiConfig::from_lookup(lookup_from(&[("APP_ORIGIN", "not a url")]));

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("APP_ORIGIN"));
    }

    #[test]
    fn test_from_process_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            env::set_var("VITE_API_URL", "https://x/api");
            env::remove_var("APP_ORIGIN");
        }

        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.base_url, "https://x/api");
        assert_eq!(config.origin.as_str(), DEFAULT_ORIGIN);

        unsafe {
            env::remove_var("VITE_API_URL");
        }
    }

    fn write_env_file(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(".env");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_from_env_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let path = write_env_file(&dir, "VITE_API_URL=https://x/api\n");

        let config = ApiConfig::load_from(&path).unwrap();

        assert_eq!(config.base_url, "https://x/api");
        assert_eq!(config.origin.as_str(), DEFAULT_ORIGIN);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();

        let config = ApiConfig::load_from(dir.path().join(".env")).unwrap();

        assert_eq!(config.base_url, "api");
    }

    #[test]
    fn test_load_from_malformed_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let path = write_env_file(&dir, "VITE_API_URL=\"unterminated\n");

        let result = ApiConfig::load_from(&path);

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("Failed to read .env file"));
    }

    #[test]
    fn test_endpoint_joins_with_single_slash() {
        let origin = Url::parse(DEFAULT_ORIGIN).unwrap();

        let config = ApiConfig::new("api", origin.clone());
        assert_eq!(config.endpoint("/plants/"), "api/plants/");

        let config = ApiConfig::new("https://x/api/", origin.clone());
        assert_eq!(config.endpoint("/plants/7/"), "https://x/api/plants/7/");

        let config = ApiConfig::new("/api", origin);
        assert_eq!(config.endpoint("dashboard/stats/"), "/api/dashboard/stats/");
    }
}
