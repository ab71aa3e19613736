use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

const GRAPHQL_URL_VAR: &str = "ENCORE_GRAPHQL_URL";
const ANON_KEY_VAR: &str = "ENCORE_ANON_KEY";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(&'static str),
    #[error("Invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}

/// Application configuration
/// In debug builds: also loads a .env file from the working directory
/// In all builds: loads ~/.config/encore/.env (or the platform equivalent) if present
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// GraphQL endpoint of the hosted catalog backend
    pub graphql_url: String,
    /// Public anon key, sent as the `apiKey` header
    pub anon_key: Option<String>,
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: Dev mode activated - loaded .env file");
            } else {
                tracing::debug!("Config: No .env file in working directory");
            }
        }

        if let Some(path) = Self::user_env_path() {
            if dotenvy::from_path(&path).is_ok() {
                info!("Config: Loaded {}", path.display());
            }
        }

        Self::from_env()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let graphql_url = lookup(GRAPHQL_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar(GRAPHQL_URL_VAR))?;

        if !graphql_url.starts_with("http://") && !graphql_url.starts_with("https://") {
            return Err(ConfigError::InvalidVar(GRAPHQL_URL_VAR, graphql_url));
        }

        let anon_key = lookup(ANON_KEY_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        if anon_key.is_none() {
            info!("Config: {} not set, requests go out without an apiKey", ANON_KEY_VAR);
        }

        Ok(Self {
            graphql_url,
            anon_key,
        })
    }

    fn user_env_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("encore").join(".env"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_loads_url_and_key() {
        let config = Config::from_lookup(lookup(&[
            ("ENCORE_GRAPHQL_URL", "https://demo.supabase.co/graphql/v1"),
            ("ENCORE_ANON_KEY", "anon-123"),
        ]))
        .unwrap();
        assert_eq!(config.graphql_url, "https://demo.supabase.co/graphql/v1");
        assert_eq!(config.anon_key.as_deref(), Some("anon-123"));
    }

    #[test]
    fn test_missing_url_is_an_error() {
        assert_eq!(
            Config::from_lookup(lookup(&[("ENCORE_ANON_KEY", "anon-123")])),
            Err(ConfigError::MissingVar("ENCORE_GRAPHQL_URL"))
        );
        assert_eq!(
            Config::from_lookup(lookup(&[("ENCORE_GRAPHQL_URL", "   ")])),
            Err(ConfigError::MissingVar("ENCORE_GRAPHQL_URL"))
        );
    }

    #[test]
    fn test_rejects_non_http_url() {
        assert!(matches!(
            Config::from_lookup(lookup(&[("ENCORE_GRAPHQL_URL", "demo.supabase.co")])),
            Err(ConfigError::InvalidVar("ENCORE_GRAPHQL_URL", _))
        ));
    }

    #[test]
    fn test_blank_key_is_none() {
        let config = Config::from_lookup(lookup(&[
            ("ENCORE_GRAPHQL_URL", "http://localhost:54321/graphql/v1"),
            ("ENCORE_ANON_KEY", ""),
        ]))
        .unwrap();
        assert_eq!(config.anon_key, None);
    }
}
