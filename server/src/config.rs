use std::net::SocketAddr;

use blog_summarizer::ai::DEFAULT_API_BASE;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Where summary rows go, chosen by the scheme of `SUPABASE_URL`.
#[derive(Debug, Clone, PartialEq)]
pub enum RowStoreConfig {
    Rest { url: String, api_key: String },
    Postgres { url: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub groq_api_base: String,
    pub mongodb_uri: String,
    pub row_store: RowStoreConfig,
    pub bind_addr: SocketAddr,
    pub client_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let row_store_url = require("SUPABASE_URL")?;
        let row_store = if row_store_url.starts_with("postgres://")
            || row_store_url.starts_with("postgresql://")
        {
            RowStoreConfig::Postgres { url: row_store_url }
        } else if row_store_url.starts_with("http://") || row_store_url.starts_with("https://") {
            RowStoreConfig::Rest {
                url: row_store_url,
                api_key: require("SUPABASE_ANON_KEY")?,
            }
        } else {
            return Err(ConfigError::Invalid {
                name: "SUPABASE_URL",
                reason: format!("unsupported scheme in {row_store_url}"),
            });
        };

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        Ok(Config {
            groq_api_key: require("GROQ_API_KEY")?,
            groq_api_base: get("GROQ_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            mongodb_uri: require("MONGODB_URI")?,
            row_store,
            bind_addr,
            client_url: get("CLIENT_URL"),
        })
    }
}
