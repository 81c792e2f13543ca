// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Error types for the Hawkular Metrics probes

use std::path::PathBuf;

use thiserror::Error;

/// Exit code reserved for configuration and setup failures
pub const CONFIG_EXIT_CODE: u8 = 2;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Secret file could not be read
    #[error("Failed to read credentials from {}: {source}", path.display())]
    Credentials {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl AppError {
    /// Process exit code reported for this error
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        CONFIG_EXIT_CODE
    }
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;
