// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Type definitions for the status endpoint

use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// JSON body returned by the status endpoint
///
/// Only `MetricsService` is consumed; other fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    #[serde(rename = "MetricsService")]
    pub metrics_service: String,
}

/// Lifecycle state reported by the metrics service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceState {
    Started,
    Failed,
    /// Any transitional or unknown state, kept verbatim
    Other(String),
}

impl ServiceState {
    /// Case-sensitive mapping of the raw `MetricsService` value
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "STARTED" => ServiceState::Started,
            "FAILED" => ServiceState::Failed,
            other => ServiceState::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ServiceState::Started => "STARTED",
            ServiceState::Failed => "FAILED",
            ServiceState::Other(raw) => raw,
        }
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<StatusResponse> for ServiceState {
    fn from(response: StatusResponse) -> Self {
        ServiceState::from_raw(&response.metrics_service)
    }
}

/// Failure to obtain a service state from the status endpoint
#[derive(Debug, Error)]
pub enum StatusError {
    /// Connection refused, DNS failure, timeout
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    /// Endpoint answered with something other than 200
    #[error("unexpected HTTP status {0}")]
    Protocol(StatusCode),

    /// 200 with a body that does not carry a `MetricsService` string
    #[error("invalid status payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl StatusError {
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, StatusError::Transport(e) if e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_started() {
        let response: StatusResponse =
            serde_json::from_str(r#"{"MetricsService":"STARTED"}"#).unwrap();
        assert_eq!(ServiceState::from(response), ServiceState::Started);
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let json = r#"{
            "MetricsService": "FAILED",
            "Implementation-Version": "0.21.0.Final",
            "Built-From-Git-SHA1": "abc123"
        }"#;
        let response: StatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(ServiceState::from(response), ServiceState::Failed);
    }

    #[test]
    fn test_state_matching_is_case_sensitive() {
        assert_eq!(
            ServiceState::from_raw("started"),
            ServiceState::Other("started".to_string())
        );
        assert_eq!(
            ServiceState::from_raw("Failed"),
            ServiceState::Other("Failed".to_string())
        );
    }

    #[test]
    fn test_other_state_kept_verbatim() {
        let response: StatusResponse =
            serde_json::from_str(r#"{"MetricsService":" STARTING "}"#).unwrap();
        let state = ServiceState::from(response);
        assert_eq!(state.as_str(), " STARTING ");
        assert_eq!(state.to_string(), " STARTING ");
    }

    #[test]
    fn test_missing_field_is_payload_error() {
        let err: StatusError = serde_json::from_str::<StatusResponse>(r#"{"status":"UP"}"#)
            .unwrap_err()
            .into();
        assert!(matches!(err, StatusError::Payload(_)));
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_non_string_field_is_rejected() {
        assert!(serde_json::from_str::<StatusResponse>(r#"{"MetricsService":1}"#).is_err());
    }

    #[test]
    fn test_protocol_error_message() {
        let err = StatusError::Protocol(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_string(), "unexpected HTTP status 503 Service Unavailable");
    }
}
