use crate::error::{ReportError, Result};
use dashmap::DashMap;
use std::env;
use std::ffi::OsString;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

pub const DATABASE_URL_KEY: &str = "SCHOOL_REPORT_DATABASE_URL";
pub const CONNECT_TIMEOUT_KEY: &str = "SCHOOL_REPORT_DB_CONNECT_TIMEOUT_SECS";

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(8);

/// Configuration service
///
/// A snapshot of string settings. [`ConfigService::from_env`] fills it from the
/// process environment after loading an optional `.env` file.
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!(error = %e, "Ignoring unreadable .env file"),
        }

        Self::from_os_vars(env::vars_os())
    }

    /// Collect variables, skipping any whose key or value is not UTF-8.
    pub fn from_os_vars(vars: impl IntoIterator<Item = (OsString, OsString)>) -> Self {
        let service = Self::default();
        for (key, value) in vars {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => service.set(&key, &value),
                (key, _) => {
                    let key = key.unwrap_or_else(|raw| raw.to_string_lossy().into_owned());
                    tracing::debug!(key = %key, "Skipping non UTF-8 environment variable");
                }
            }
        }
        service
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let service = Self::default();
        for (key, value) in pairs {
            service.set(key, value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }
}

/// Connection settings for the backing store
#[derive(Clone)]
pub struct DatabaseConfig {
    url: String,
    connect_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn from_config(config: &ConfigService) -> Result<Self> {
        let url = config
            .get(DATABASE_URL_KEY)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ReportError::config(DATABASE_URL_KEY, "not set"))?;

        Url::parse(&url).map_err(|e| ReportError::config(DATABASE_URL_KEY, e.to_string()))?;

        let connect_timeout = match config.get(CONNECT_TIMEOUT_KEY) {
            None => DEFAULT_CONNECT_TIMEOUT,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ReportError::config(
                        CONNECT_TIMEOUT_KEY,
                        format!("expected a positive number of seconds, got '{raw}'"),
                    ));
                }
            },
        };

        Ok(Self {
            url,
            connect_timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// The URL with any password replaced by `***`, safe to log.
    pub fn redacted_url(&self) -> String {
        match Url::parse(&self.url) {
            Ok(mut url) => {
                if url.password().is_some() {
                    let _ = url.set_password(Some("***"));
                }
                url.to_string()
            }
            Err(_) => "<unparseable url>".to_string(),
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.redacted_url())
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}
