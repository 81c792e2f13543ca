// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Credentials loaded from mounted secret files

use std::fmt;
use std::path::Path;

use secrecy::SecretString;

use crate::error::{AppError, Result};

/// Username and password for the metrics service
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    /// Reads both secret files, trimming trailing whitespace
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Credentials`] naming the file that could not be
    /// read. Contents are not validated.
    pub fn load(username_file: &Path, password_file: &Path) -> Result<Self> {
        let username = read_secret(username_file)?;
        let password = read_secret(password_file)?;

        tracing::debug!(
            "Loaded credentials for '{}' from {}",
            username,
            username_file.display()
        );
        Ok(Self {
            username,
            password: SecretString::from(password),
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

fn read_secret(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map(|raw| raw.trim_end().to_string())
        .map_err(|source| AppError::Credentials {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn secret_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_trims_trailing_whitespace() {
        let user = secret_file("hawkular\n");
        let pass = secret_file("s3cr3t \r\n\t");
        let creds = Credentials::load(user.path(), pass.path()).unwrap();
        assert_eq!(creds.username, "hawkular");
        assert_eq!(creds.password.expose_secret(), "s3cr3t");
    }

    #[test]
    fn test_leading_whitespace_is_kept() {
        let user = secret_file("  hawkular\n");
        let pass = secret_file(" pass\n");
        let creds = Credentials::load(user.path(), pass.path()).unwrap();
        assert_eq!(creds.username, "  hawkular");
        assert_eq!(creds.password.expose_secret(), " pass");
    }

    #[test]
    fn test_missing_password_file() {
        let user = secret_file("hawkular");
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("hawkular-metrics.password");
        let err = Credentials::load(user.path(), &missing).unwrap_err();
        assert!(matches!(err, AppError::Credentials { ref path, .. } if *path == missing));
    }

    #[test]
    fn test_empty_files_are_passed_through() {
        let user = secret_file("\n");
        let pass = secret_file("");
        let creds = Credentials::load(user.path(), pass.path()).unwrap();
        assert_eq!(creds.username, "");
        assert_eq!(creds.password.expose_secret(), "");
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials {
            username: "hawkular".to_string(),
            password: SecretString::from("s3cr3t".to_string()),
        };
        let debug = format!("{creds:?}");
        assert!(!debug.contains("s3cr3t"));
        assert!(debug.contains("REDACTED"));
    }
}
