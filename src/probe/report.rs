// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Probe outcome and its exit code

/// Health verdict understood by the orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Healthy,
    Unhealthy,
}

impl Verdict {
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            Verdict::Healthy => 0,
            Verdict::Unhealthy => 1,
        }
    }
}

/// Result of a single probe invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub verdict: Verdict,
    /// Diagnostic line for the operator, printed to stdout
    pub message: Option<String>,
}

impl ProbeReport {
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            verdict: Verdict::Healthy,
            message: None,
        }
    }

    #[must_use]
    pub fn healthy_with(message: impl Into<String>) -> Self {
        Self {
            verdict: Verdict::Healthy,
            message: Some(message.into()),
        }
    }

    #[must_use]
    pub fn unhealthy(message: impl Into<String>) -> Self {
        Self {
            verdict: Verdict::Unhealthy,
            message: Some(message.into()),
        }
    }

    #[must_use]
    pub fn exit_code(&self) -> u8 {
        self.verdict.exit_code()
    }
}
