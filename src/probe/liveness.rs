// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Liveness probe: tolerant while the service is still starting
//!
//! Only an explicit `FAILED` state fails immediately. Anything short of
//! `STARTED` defers to the uptime of the server process: inside the grace
//! period the process is left alone, past it the probe reports it dead.
//! An undeterminable uptime fails closed.

use std::time::Duration;

use super::report::ProbeReport;
use crate::status::{ServiceState, StatusClient, StatusError};
use crate::uptime::UptimeSource;

/// Checks whether the metrics service is alive
pub async fn check_liveness(
    status: &StatusClient,
    uptime: &dyn UptimeSource,
    grace_period: Duration,
) -> ProbeReport {
    let result = status.fetch_state().await;
    if let Err(e) = &result {
        tracing::debug!("Liveness check against {} failed: {}", status.url(), e);
    }
    liveness_report(result, uptime, grace_period)
}

/// Maps a status lookup result, and the uptime fallback if needed, to the
/// liveness verdict
///
/// The uptime source is only consulted when the state is neither `STARTED`
/// nor `FAILED`.
pub fn liveness_report(
    result: Result<ServiceState, StatusError>,
    uptime: &dyn UptimeSource,
    grace_period: Duration,
) -> ProbeReport {
    let reason = match result {
        Ok(ServiceState::Started) => {
            return ProbeReport::healthy_with(
                "The MetricsService is in the STARTED state and is available.",
            );
        }
        Ok(ServiceState::Failed) => {
            return ProbeReport::unhealthy("The MetricsService is in a FAILED state. Aborting.");
        }
        Ok(state) => format!("The MetricsService is in the [{state}] state"),
        Err(e) => format!("Failed to access the status endpoint: {e}"),
    };

    let grace_secs = grace_period.as_secs();
    match uptime.uptime() {
        Ok(elapsed) if elapsed < grace_period => ProbeReport::healthy_with(format!(
            "{reason}. Hawkular Metrics has only been running for {} seconds \
             (grace period {grace_secs}s), not aborting yet.",
            elapsed.as_secs()
        )),
        Ok(elapsed) => ProbeReport::unhealthy(format!(
            "{reason}. Hawkular Metrics has been running for {} seconds \
             (grace period {grace_secs}s). Aborting.",
            elapsed.as_secs()
        )),
        Err(e) => {
            tracing::warn!("Uptime fallback failed: {}", e);
            ProbeReport::unhealthy(format!(
                "{reason}. Could not determine Hawkular Metrics uptime ({e}). Aborting."
            ))
        }
    }
}
