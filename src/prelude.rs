// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! ```rust
//! use hawkular_probe::prelude::*;
//! ```

// Core types
pub use crate::config::Config;
pub use crate::error::{AppError, Result};

// Probes
pub use crate::probe::{ProbeReport, Verdict, check_liveness, check_readiness};
pub use crate::status::{ServiceState, StatusClient, StatusError};
pub use crate::uptime::{ProcessTable, UptimeError, UptimeSource};

// Client
pub use crate::client::{Credentials, MetricsClient};
