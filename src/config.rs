use std::env;
use std::time::Duration;

use crate::errors::AppError;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Simulated latency between a valid submit and the record being stored.
    pub submit_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            submit_delay: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("BIND_ADDR").filter(|v| !v.trim().is_empty()) {
            config.bind_addr = addr;
        }

        if let Some(raw) = lookup("SUBMIT_DELAY_MS") {
            let millis = raw.trim().parse::<u64>().map_err(|err| {
                AppError::Config(format!("SUBMIT_DELAY_MS must be a whole number of milliseconds: {}", err))
            })?;
            config.submit_delay = Duration::from_millis(millis);
        }

        Ok(config)
    }
}
