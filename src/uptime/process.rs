// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Process table backed uptime lookup

use std::time::Duration;

use sysinfo::{ProcessesToUpdate, System};

use super::{UptimeError, UptimeSource};

/// Reads process uptime from the OS process table
///
/// Matches processes whose name contains the configured pattern, ignoring
/// case. With several matches the one with the lowest PID wins.
#[derive(Debug, Clone)]
pub struct ProcessTable {
    pattern: String,
}

impl ProcessTable {
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl UptimeSource for ProcessTable {
    fn uptime(&self) -> Result<Duration, UptimeError> {
        let mut system = System::new();
        system.refresh_processes(ProcessesToUpdate::All, true);

        let candidates = system.processes().iter().map(|(pid, process)| {
            (
                pid.as_u32(),
                process.name().to_string_lossy().into_owned(),
                process.run_time(),
            )
        });

        match first_match(candidates, &self.pattern) {
            Some(secs) => {
                tracing::debug!("Process '{}' running for {}s", self.pattern, secs);
                Ok(Duration::from_secs(secs))
            }
            None => Err(UptimeError::ProcessNotFound(self.pattern.clone())),
        }
    }
}

fn name_matches(name: &str, pattern: &str) -> bool {
    name.to_lowercase().contains(&pattern.to_lowercase())
}

/// Run time of the lowest-PID process whose name matches `pattern`
fn first_match<I>(processes: I, pattern: &str) -> Option<u64>
where
    I: IntoIterator<Item = (u32, String, u64)>,
{
    processes
        .into_iter()
        .filter(|(_, name, _)| name_matches(name, pattern))
        .min_by_key(|(pid, _, _)| *pid)
        .map(|(_, _, run_time)| run_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<(u32, String, u64)> {
        vec![
            (812, "java".to_string(), 1200),
            (97, "Standalone.sh".to_string(), 420),
            (1, "init".to_string(), 9000),
            (640, "standalone.sh".to_string(), 15),
        ]
    }

    #[test]
    fn test_name_match_ignores_case() {
        assert!(name_matches("STANDALONE.SH", "standalone.sh"));
        assert!(!name_matches("standalone", "standalone.sh"));
    }

    #[test]
    fn test_first_match_prefers_lowest_pid() {
        assert_eq!(first_match(table(), "standalone.sh"), Some(420));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(first_match(table(), "cassandra"), None);
        assert_eq!(first_match(Vec::new(), "standalone.sh"), None);
    }

    #[test]
    fn test_unknown_process_is_not_found() {
        let source = ProcessTable::new("no-such-process-for-hawkular-probe-tests");
        assert_eq!(
            source.uptime(),
            Err(UptimeError::ProcessNotFound(
                "no-such-process-for-hawkular-probe-tests".to_string()
            ))
        );
    }
}
