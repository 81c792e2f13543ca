// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! HTTP client for the status endpoint

use reqwest::StatusCode;

use super::types::{ServiceState, StatusError, StatusResponse};
use crate::config::Config;
use crate::error::Result;

/// Client issuing one bounded GET against the status endpoint
pub struct StatusClient {
    http: reqwest::Client,
    url: String,
}

impl StatusClient {
    /// Creates a status client from configuration
    ///
    /// The configured timeout bounds the whole request, connect included.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .no_proxy()
            .build()?;
        Ok(Self::with_client(http, config.status_url()))
    }

    /// Wraps an already configured HTTP client
    #[must_use]
    pub fn with_client(http: reqwest::Client, url: String) -> Self {
        Self { http, url }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches and decodes the current service state
    ///
    /// # Errors
    ///
    /// [`StatusError::Transport`] when the request cannot complete,
    /// [`StatusError::Protocol`] for any status other than 200 and
    /// [`StatusError::Payload`] when the body lacks a `MetricsService` string.
    pub async fn fetch_state(&self) -> std::result::Result<ServiceState, StatusError> {
        tracing::debug!("GET {}", self.url);
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(StatusError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!("Status endpoint returned {}", status);
            return Err(StatusError::Protocol(status));
        }

        let body = response.bytes().await.map_err(StatusError::Transport)?;
        let payload: StatusResponse = serde_json::from_slice(&body)?;
        let state = ServiceState::from(payload);
        tracing::debug!("MetricsService state: {}", state);
        Ok(state)
    }
}
