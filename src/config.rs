use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: Url,
    pub http_timeout: Duration,
    pub cache: CacheSettings,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheSettings {
    pub stale_time: Duration,
    pub gc_time: Duration,
    pub retries: u32,
    pub retry_base_delay: Duration,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            stale_time: Duration::from_secs(5 * 60),
            gc_time: Duration::from_secs(10 * 60),
            retries: 2,
            retry_base_delay: Duration::from_millis(1000),
        }
    }
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let raw_url = get_env_or("CANDIDATES_API_URL", "http://localhost:3001");
        let api_base_url = Url::parse(&raw_url)
            .map_err(|e| Error::Config(format!("Invalid value for CANDIDATES_API_URL: {}", e)))?;

        let log_format = match get_env_or("LOG_FORMAT", "text").as_str() {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            other => {
                return Err(Error::Config(format!(
                    "Invalid value for LOG_FORMAT: {} (expected text or json)",
                    other
                )))
            }
        };

        Ok(Self {
            api_base_url,
            http_timeout: Duration::from_secs(get_env_parse_or("HTTP_TIMEOUT_SECS", 10)?),
            cache: CacheSettings {
                stale_time: Duration::from_secs(get_env_parse_or("CACHE_STALE_SECS", 300)?),
                gc_time: Duration::from_secs(get_env_parse_or("CACHE_GC_SECS", 600)?),
                retries: get_env_parse_or("FETCH_RETRIES", 2)?,
                retry_base_delay: Duration::from_millis(get_env_parse_or(
                    "FETCH_RETRY_BASE_MS",
                    1000,
                )?),
            },
            log_format,
        })
    }
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        _ => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::Config("Configuration has not been initialized".to_string()))
}
