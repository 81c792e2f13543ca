// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Uptime of the monitored server process
//!
//! The liveness probe falls back to this when the status endpoint cannot
//! vouch for the service.

mod process;

use std::time::Duration;

use thiserror::Error;

pub use process::ProcessTable;

/// Failure to determine how long the monitored process has been running
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UptimeError {
    #[error("no running process matches '{0}'")]
    ProcessNotFound(String),
}

/// Source of elapsed time since the monitored process started
pub trait UptimeSource {
    /// # Errors
    ///
    /// Returns [`UptimeError`] when the uptime cannot be determined.
    fn uptime(&self) -> Result<Duration, UptimeError>;
}
