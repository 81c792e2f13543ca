// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Hawkular Probe
//!
//! Container health probes and client bootstrap for Hawkular Metrics.
//!
//! Each probe issues one bounded request against the metrics status endpoint
//! and maps the reported `MetricsService` state to an exit code for the
//! orchestrator.
//!
//! ## Main modules
//! - `cli`: command-line surface and exit-code mapping
//! - `client`: credential loading and tenant-scoped client session
//! - `config`: configuration management
//! - `error`: error types
//! - `probe`: readiness and liveness decisions
//! - `status`: status endpoint client and payload types
//! - `uptime`: monitored process uptime
//! - `prelude`: commonly used types and traits

pub mod cli;
mod client;
mod config;
mod error;
mod probe;
mod status;
mod uptime;
pub mod prelude;

// Re-export commonly used types
/// Probe configuration
pub use config::{Config, defaults, env_vars};

/// Application error and result type
pub use error::{AppError, CONFIG_EXIT_CODE, Result};

/// Status endpoint client and decoded state
pub use status::{ServiceState, StatusClient, StatusError, StatusResponse};

/// Probe entry points and outcome
pub use probe::{
    ProbeReport, Verdict, check_liveness, check_readiness, liveness_report, readiness_report,
};

/// Uptime sources for the liveness fallback
pub use uptime::{ProcessTable, UptimeError, UptimeSource};

/// Metrics client session
pub use client::{Credentials, MetricsClient, TENANT_HEADER};
