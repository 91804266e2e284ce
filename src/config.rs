use crate::infrastructure::providers::canvas::DEFAULT_TERM_ID;
use std::env;
use std::str::FromStr;

/// Which cache backend serves single-assignment lookups
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheBackend {
    Redis,
    Memory,
}

impl FromStr for CacheBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "redis" => Ok(CacheBackend::Redis),
            "memory" => Ok(CacheBackend::Memory),
            other => Err(ConfigError::InvalidCacheBackend(other.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub canvas_url: String,
    pub canvas_token: String,
    pub canvas_term_id: i64,
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub cache_backend: CacheBackend,
    pub redis_url: String,
    pub uploads_dir: String,
    /// Accepted for compatibility with existing `.env` files; nothing reads it.
    pub openai_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let canvas_url = var("CANVAS_URL").ok_or(ConfigError::MissingCanvasUrl)?;

        let canvas_token = var("CANVAS_TOKEN").ok_or(ConfigError::MissingCanvasToken)?;

        let canvas_term_id = match var("CANVAS_TERM_ID") {
            Some(raw) => raw.parse::<i64>().map_err(|_| ConfigError::InvalidTermId(raw))?,
            None => DEFAULT_TERM_ID,
        };

        let database_url =
            var("DATABASE_URL").unwrap_or_else(|| "sqlite://canvas.db?mode=rwc".to_string());

        let server_host = var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let server_port = var("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let cache_backend = match var("CACHE_BACKEND") {
            Some(raw) => raw.parse()?,
            None => CacheBackend::Redis,
        };

        let redis_url = var("REDIS_URL").unwrap_or_else(|| "redis://localhost:6379".to_string());

        let uploads_dir = var("UPLOADS_DIR").unwrap_or_else(|| "./uploads".to_string());

        let openai_api_key = var("OPENAI_API_KEY");

        Ok(Config {
            canvas_url,
            canvas_token,
            canvas_term_id,
            database_url,
            server_host,
            server_port,
            cache_backend,
            redis_url,
            uploads_dir,
            openai_api_key,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("CANVAS_URL environment variable not set")]
    MissingCanvasUrl,

    #[error("CANVAS_TOKEN environment variable not set")]
    MissingCanvasToken,

    #[error("Invalid CANVAS_TERM_ID: {0}")]
    InvalidTermId(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Unknown CACHE_BACKEND {0:?} (expected \"redis\" or \"memory\")")]
    InvalidCacheBackend(String),
}
