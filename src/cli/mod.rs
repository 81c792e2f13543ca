// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Command-line interface for the probes
//!
//! Flags override the matching environment variables; everything else is
//! resolved by [`Config::from_lookup`].

use clap::{Args, Parser, Subcommand};

use crate::client::MetricsClient;
use crate::config::{Config, env_vars};
use crate::error::Result;
use crate::probe::{self, ProbeReport};
use crate::status::StatusClient;
use crate::uptime::ProcessTable;

/// Health probes and client bootstrap for Hawkular Metrics
#[derive(Parser, Debug)]
#[command(name = "hawkular-probe")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    HAWKULAR_METRICS_ENDPOINT_PORT       Status endpoint port (required)
    HAWKULAR_METRICS_HOST                Host (default: localhost)
    HAWKULAR_METRICS_STATUS_PATH         Path (default: /hawkular/metrics/status)
    HAWKULAR_PROBE_TIMEOUT_SECONDS       Request timeout (default: 5)
    HAWKULAR_PROBE_GRACE_PERIOD_SECONDS  Liveness grace period (default: 300)
    HAWKULAR_PROBE_PROCESS_NAME          Monitored process (default: standalone.sh)
    HAWKULAR_METRICS_TENANT              Client tenant (default: default)
    HAWKULAR_METRICS_USERNAME_FILE       Username secret file
    HAWKULAR_METRICS_PASSWORD_FILE       Password secret file
    RUST_LOG                             Log filter for stderr (default: info)

EXIT CODES:
    0  healthy / ready
    1  unhealthy / not ready
    2  configuration error
"#)]
pub struct Cli {
    /// Status endpoint port
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Status endpoint host
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Exit 0 only if the MetricsService is STARTED
    Readiness,
    /// Exit 1 if the MetricsService FAILED or has not started within the grace period
    Liveness(LivenessArgs),
    /// Load credentials and initialize a tenant-scoped metrics client
    ClientInit(ClientInitArgs),
}

#[derive(Args, Debug)]
pub struct LivenessArgs {
    /// Seconds of uptime during which an unhealthy service is tolerated
    #[arg(long)]
    pub grace_period_secs: Option<u64>,

    /// Name of the monitored server process
    #[arg(long)]
    pub process_name: Option<String>,
}

#[derive(Args, Debug)]
pub struct ClientInitArgs {
    /// Query the status endpoint through the authenticated client
    #[arg(long, default_value_t = false)]
    pub verify: bool,
}

impl Cli {
    /// Flag values keyed by the environment variable they override
    #[must_use]
    pub fn overrides(&self) -> Vec<(&'static str, String)> {
        let mut overrides = Vec::new();
        if let Some(port) = self.port {
            overrides.push((env_vars::PORT, port.to_string()));
        }
        if let Some(host) = &self.host {
            overrides.push((env_vars::HOST, host.clone()));
        }
        if let Some(timeout) = self.timeout_secs {
            overrides.push((env_vars::TIMEOUT_SECS, timeout.to_string()));
        }
        if let Commands::Liveness(args) = &self.command {
            if let Some(grace) = args.grace_period_secs {
                overrides.push((env_vars::GRACE_PERIOD_SECS, grace.to_string()));
            }
            if let Some(name) = &args.process_name {
                overrides.push((env_vars::PROCESS_NAME, name.clone()));
            }
        }
        overrides
    }

    /// Flag value overriding the environment variable `key`, if given
    #[must_use]
    pub fn override_for(&self, key: &str) -> Option<String> {
        self.overrides()
            .into_iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
    }
}

/// Runs the selected command and returns the process exit code
///
/// Every path prints at most one diagnostic line to stdout.
pub async fn run(cli: Cli) -> u8 {
    let config = match Config::from_env(|key| cli.override_for(key)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            println!("{e}");
            return e.exit_code();
        }
    };

    match execute(&cli.command, &config).await {
        Ok(report) => {
            if let Some(message) = &report.message {
                println!("{message}");
            }
            report.exit_code()
        }
        Err(e) => {
            tracing::error!("{}", e);
            println!("{e}");
            e.exit_code()
        }
    }
}

async fn execute(command: &Commands, config: &Config) -> Result<ProbeReport> {
    match command {
        Commands::Readiness => {
            let status = StatusClient::new(config)?;
            Ok(probe::check_readiness(&status).await)
        }
        Commands::Liveness(_) => {
            let status = StatusClient::new(config)?;
            let uptime = ProcessTable::new(config.process_name.clone());
            Ok(probe::check_liveness(&status, &uptime, config.grace_period).await)
        }
        Commands::ClientInit(args) => {
            let client = MetricsClient::from_config(config)?;
            if !args.verify {
                return Ok(ProbeReport::healthy());
            }
            Ok(match client.status().await {
                Ok(state) => ProbeReport::healthy_with(format!(
                    "Hawkular Metrics client for tenant '{}' connected to {}; MetricsService is {}",
                    client.tenant(),
                    client.base_url(),
                    state
                )),
                Err(e) => ProbeReport::unhealthy(format!(
                    "Hawkular Metrics client for tenant '{}' could not reach {}: {}",
                    client.tenant(),
                    client.base_url(),
                    e
                )),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config_with<F>(cli: &Cli, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        Config::from_lookup(|key| cli.override_for(key).or_else(|| lookup(key)))
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("hawkular-probe").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_parse_readiness() {
        let cli = parse(&["readiness"]);
        assert!(matches!(cli.command, Commands::Readiness));
        assert!(cli.overrides().is_empty());
        assert_eq!(cli.override_for(env_vars::PORT), None);
    }

    #[test]
    fn test_flags_override_lookup() {
        let cli = parse(&[
            "liveness",
            "--port",
            "9090",
            "--grace-period-secs",
            "120",
            "--process-name",
            "java",
        ]);
        let config = config_with(&cli, |key| {
            (key == env_vars::PORT).then(|| "8080".to_string())
        })
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.grace_period, Duration::from_secs(120));
        assert_eq!(config.process_name, "java");
    }

    #[test]
    fn test_lookup_used_without_flags() {
        let cli = parse(&["readiness"]);
        let config = config_with(&cli, |key| {
            (key == env_vars::PORT).then(|| "8080".to_string())
        })
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_missing_port_exit_code() {
        let cli = parse(&["readiness"]);
        let err = config_with(&cli, |_| None).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_client_init_verify_flag() {
        let cli = parse(&["client-init", "--verify"]);
        assert!(matches!(cli.command, Commands::ClientInit(ClientInitArgs { verify: true })));
    }

    #[test]
    fn test_invalid_port_flag_rejected() {
        assert!(Cli::try_parse_from(["hawkular-probe", "readiness", "--port", "70000"]).is_err());
    }
}
