// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Readiness and liveness probes
//!
//! Each probe makes exactly one status request and turns the result into a
//! [`ProbeReport`]. Retrying is left to the orchestrator invoking the probe.

mod liveness;
mod readiness;
mod report;

pub use liveness::{check_liveness, liveness_report};
pub use readiness::{check_readiness, readiness_report};
pub use report::{ProbeReport, Verdict};
