use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{SwishError, SwishResult};

pub const DEFAULT_API_BASE_URL: &str = "https://swicpc.bgc.se/api/v1/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SwishConfig {
    pub payee_alias: String,
    pub api_base_url: String,
    /// PEM with the client certificate, and the key too when `key_path` is unset.
    pub cert_path: Option<PathBuf>,
    pub key_path: Option<PathBuf>,
    pub timeout_secs: u64,
}

impl SwishConfig {
    /// Reads `SWISH_*` variables from the process environment.
    pub fn from_env() -> SwishResult<Self> {
        let builder = config::Config::builder()
            .add_source(config::Environment::default().separator("_"));

        Self::from_builder(builder)
    }

    pub fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> SwishResult<Self> {
        let config = builder
            .set_default("swish.api.base.url", DEFAULT_API_BASE_URL)?
            .set_default("swish.timeout.secs", DEFAULT_TIMEOUT_SECS as i64)?
            .build()?;

        let raw_timeout = config.get_int("swish.timeout.secs")?;
        let timeout_secs = u64::try_from(raw_timeout)
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| {
                SwishError::Config(format!(
                    "swish.timeout.secs must be a positive number of seconds, got {}",
                    raw_timeout
                ))
            })?;

        // Manual construction due to environment variable naming
        Ok(SwishConfig {
            payee_alias: config.get_string("swish.payee.alias")?,
            api_base_url: config.get_string("swish.api.base.url")?,
            cert_path: config.get_string("swish.cert.path").ok().map(PathBuf::from),
            key_path: config.get_string("swish.key.path").ok().map(PathBuf::from),
            timeout_secs,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
