// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Readiness probe: strict, no grace period

use super::report::ProbeReport;
use crate::status::{ServiceState, StatusClient, StatusError};

/// Checks whether the metrics service can serve traffic right now
pub async fn check_readiness(status: &StatusClient) -> ProbeReport {
    let result = status.fetch_state().await;
    if let Err(e) = &result {
        tracing::debug!("Readiness check against {} failed: {}", status.url(), e);
    }
    readiness_report(result)
}

/// Maps a status lookup result to the readiness verdict
#[must_use]
pub fn readiness_report(result: Result<ServiceState, StatusError>) -> ProbeReport {
    match result {
        Ok(ServiceState::Started) => ProbeReport::healthy(),
        Ok(state) => ProbeReport::unhealthy(format!(
            "The MetricsService is not yet in the STARTED state [{state}]. \
             We need to wait until it is in the STARTED state."
        )),
        Err(StatusError::Protocol(code)) => ProbeReport::unhealthy(format!(
            "Could not connect to the Hawkular Metrics' status endpoint ({code}). \
             This may be due to Hawkular Metrics not being ready yet. Will try again."
        )),
        Err(e) => ProbeReport::unhealthy(format!(
            "Failed to access the status endpoint: {e}. \
             This may be due to Hawkular Metrics not being ready yet. Will try again."
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::Verdict;
    use reqwest::StatusCode;

    #[test]
    fn test_started_is_ready_and_silent() {
        let report = readiness_report(Ok(ServiceState::Started));
        assert_eq!(report.verdict, Verdict::Healthy);
        assert!(report.message.is_none());
    }

    #[test]
    fn test_failed_is_not_ready() {
        let report = readiness_report(Ok(ServiceState::Failed));
        assert_eq!(report.exit_code(), 1);
        assert!(report.message.unwrap().contains("[FAILED]"));
    }

    #[test]
    fn test_transitional_state_surfaced_in_message() {
        let report = readiness_report(Ok(ServiceState::from_raw("STARTING")));
        assert_eq!(report.exit_code(), 1);
        assert!(report.message.unwrap().contains("[STARTING]"));
    }

    #[test]
    fn test_non_200_is_not_ready() {
        let report = readiness_report(Err(StatusError::Protocol(
            StatusCode::INTERNAL_SERVER_ERROR,
        )));
        assert_eq!(report.exit_code(), 1);
        assert!(report.message.unwrap().contains("500"));
    }

    #[test]
    fn test_bad_payload_is_not_ready() {
        let err = serde_json::from_str::<crate::status::StatusResponse>("not json").unwrap_err();
        let report = readiness_report(Err(StatusError::Payload(err)));
        assert_eq!(report.exit_code(), 1);
        assert!(
            report
                .message
                .unwrap()
                .starts_with("Failed to access the status endpoint")
        );
    }
}
