use std::time::Duration;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_SESSION_TTL_SECS: u64 = 3600;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub session_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let session_ttl_secs = match std::env::var("SESSION_TTL_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "SESSION_TTL_SECS".to_string(),
                    value: raw,
                })?,
            Err(_) => DEFAULT_SESSION_TTL_SECS,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            session_ttl: Duration::from_secs(session_ttl_secs),
        })
    }
}
