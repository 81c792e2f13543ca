// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Hawkular Metrics status endpoint module
//!
//! Issues the single status request a probe makes and decodes the
//! `MetricsService` lifecycle state out of the JSON payload.

mod client;
mod types;

pub use client::StatusClient;
pub use types::{ServiceState, StatusError, StatusResponse};
