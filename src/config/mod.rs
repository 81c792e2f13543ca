// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the Hawkular Metrics probes
//!
//! Built once at startup from environment variables (and an optional `.env`
//! file), then passed explicitly to the probes and the client initializer.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{AppError, Result};


/// Default configuration values
pub mod defaults {
    pub const HOST: &str = "localhost";
    pub const STATUS_PATH: &str = "/hawkular/metrics/status";
    pub const TIMEOUT_SECS: u64 = 5;
    pub const GRACE_PERIOD_SECS: u64 = 300;
    pub const PROCESS_NAME: &str = "standalone.sh";
    pub const TENANT: &str = "default";
    pub const USERNAME_FILE: &str = "/client-secrets/hawkular-metrics.username";
    pub const PASSWORD_FILE: &str = "/client-secrets/hawkular-metrics.password";
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const PORT: &str = "HAWKULAR_METRICS_ENDPOINT_PORT";
    pub const HOST: &str = "HAWKULAR_METRICS_HOST";
    pub const STATUS_PATH: &str = "HAWKULAR_METRICS_STATUS_PATH";
    pub const TIMEOUT_SECS: &str = "HAWKULAR_PROBE_TIMEOUT_SECONDS";
    pub const GRACE_PERIOD_SECS: &str = "HAWKULAR_PROBE_GRACE_PERIOD_SECONDS";
    pub const PROCESS_NAME: &str = "HAWKULAR_PROBE_PROCESS_NAME";
    pub const TENANT: &str = "HAWKULAR_METRICS_TENANT";
    pub const USERNAME_FILE: &str = "HAWKULAR_METRICS_USERNAME_FILE";
    pub const PASSWORD_FILE: &str = "HAWKULAR_METRICS_PASSWORD_FILE";
}

/// Probe and client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub host: String,
    pub status_path: String,
    pub timeout: Duration,
    pub grace_period: Duration,
    pub process_name: String,
    pub tenant: String,
    pub username_file: PathBuf,
    pub password_file: PathBuf,
}

impl Config {
    /// Creates a configuration for the given port with every other value defaulted
    #[must_use]
    pub fn with_port(port: u16) -> Self {
        Config {
            port,
            host: defaults::HOST.to_string(),
            status_path: defaults::STATUS_PATH.to_string(),
            timeout: Duration::from_secs(defaults::TIMEOUT_SECS),
            grace_period: Duration::from_secs(defaults::GRACE_PERIOD_SECS),
            process_name: defaults::PROCESS_NAME.to_string(),
            tenant: defaults::TENANT.to_string(),
            username_file: PathBuf::from(defaults::USERNAME_FILE),
            password_file: PathBuf::from(defaults::PASSWORD_FILE),
        }
    }

    /// Loads configuration from environment variables
    ///
    /// `overrides` is consulted first for every key, so command-line flags
    /// win over the environment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if the port is missing or any numeric
    /// variable cannot be parsed.
    pub fn from_env<F>(overrides: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| overrides(key).or_else(|| std::env::var(key).ok()))
    }

    /// Builds configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup(env_vars::PORT)
            .ok_or_else(|| AppError::Config(format!("{} is not set", env_vars::PORT)))
            .and_then(|raw| parse_port(&raw))?;

        let mut config = Config::with_port(port);

        if let Some(host) = non_empty(lookup(env_vars::HOST)) {
            config.host = host;
        }
        if let Some(path) = non_empty(lookup(env_vars::STATUS_PATH)) {
            config.status_path = normalize_path(&path);
        }
        if let Some(raw) = lookup(env_vars::TIMEOUT_SECS) {
            config.timeout = Duration::from_secs(parse_secs(env_vars::TIMEOUT_SECS, &raw)?);
        }
        if let Some(raw) = lookup(env_vars::GRACE_PERIOD_SECS) {
            config.grace_period =
                Duration::from_secs(parse_secs(env_vars::GRACE_PERIOD_SECS, &raw)?);
        }
        if let Some(name) = non_empty(lookup(env_vars::PROCESS_NAME)) {
            config.process_name = name;
        }
        if let Some(tenant) = non_empty(lookup(env_vars::TENANT)) {
            config.tenant = tenant;
        }
        if let Some(path) = non_empty(lookup(env_vars::USERNAME_FILE)) {
            config.username_file = PathBuf::from(path);
        }
        if let Some(path) = non_empty(lookup(env_vars::PASSWORD_FILE)) {
            config.password_file = PathBuf::from(path);
        }

        config.validate()?;
        tracing::debug!(?config, "Loaded probe configuration");
        Ok(config)
    }

    /// Validates configuration values
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(AppError::Config(format!(
                "{} must be between 1 and 65535",
                env_vars::PORT
            )));
        }
        if self.host.trim().is_empty() {
            return Err(AppError::Config("Host cannot be empty".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(AppError::Config(
                "Request timeout must be at least one second".to_string(),
            ));
        }
        Ok(())
    }

    /// Base URL of the metrics service, without a trailing slash
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Full URL of the status endpoint
    #[must_use]
    pub fn status_url(&self) -> String {
        format!("{}{}", self.base_url(), self.status_path)
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim().parse::<u16>().map_err(|e| {
        AppError::Config(format!(
            "Invalid {} '{}': {}",
            env_vars::PORT,
            raw.trim(),
            e
        ))
    })
}

fn parse_secs(key: &str, raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| AppError::Config(format!("Invalid {} '{}': {}", key, raw.trim(), e)))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
