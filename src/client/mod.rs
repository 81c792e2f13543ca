// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Tenant-scoped Hawkular Metrics client session
//!
//! Credentials come from mounted secret files. The client only sets up the
//! authenticated session; reading and writing metric data is left to callers.

mod credentials;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;

pub use credentials::Credentials;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::status::{ServiceState, StatusClient, StatusError};

/// Header selecting the tenant every request is scoped to
pub const TENANT_HEADER: &str = "Hawkular-Tenant";

/// Authenticated Hawkular Metrics client
pub struct MetricsClient {
    http: reqwest::Client,
    base_url: String,
    tenant: String,
    username: String,
    status_url: String,
}

impl MetricsClient {
    /// Loads credentials from the configured secret files and builds a client
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Credentials`] if a secret file cannot be read, or a
    /// configuration/HTTP error if the client cannot be constructed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let credentials = Credentials::load(&config.username_file, &config.password_file)?;
        Self::new(config, &credentials)
    }

    /// Builds a client for the configured tenant with the given credentials
    ///
    /// # Errors
    ///
    /// Returns an error if the tenant is not a valid header value or the HTTP
    /// client cannot be built.
    pub fn new(config: &Config, credentials: &Credentials) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let tenant = HeaderValue::from_str(&config.tenant).map_err(|e| {
            AppError::Config(format!("Invalid tenant id '{}': {}", config.tenant, e))
        })?;
        headers.insert(TENANT_HEADER, tenant);

        let mut authorization = HeaderValue::from_str(&credentials.basic_auth())
            .map_err(|e| AppError::Config(format!("Invalid credentials: {e}")))?;
        authorization.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, authorization);

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .no_proxy()
            .default_headers(headers)
            .build()?;

        tracing::info!(
            "Initialized Hawkular Metrics client for tenant '{}' as '{}' at {}",
            config.tenant,
            credentials.username,
            config.base_url()
        );

        Ok(Self {
            http,
            base_url: config.base_url(),
            tenant: config.tenant.clone(),
            username: credentials.username.clone(),
            status_url: config.status_url(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Fetches the service state through the authenticated session
    ///
    /// # Errors
    ///
    /// Same as [`StatusClient::fetch_state`].
    pub async fn status(&self) -> std::result::Result<ServiceState, StatusError> {
        StatusClient::with_client(self.http.clone(), self.status_url.clone())
            .fetch_state()
            .await
    }
}

impl Credentials {
    /// Value of the `Authorization` header for HTTP basic auth
    fn basic_auth(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password.expose_secret());
        format!("Basic {}", STANDARD.encode(raw))
    }
}
