//! Run configuration.
//!
//! Built once from the command-line flags and passed explicitly to every
//! stage of the migration.

use std::path::PathBuf;

use tracing::debug;

use crate::core::constants;
use crate::core::domain::{Passphrase, Target};
use crate::error::{Result, UsageError};

/// Everything a migration run needs.
#[derive(Debug, Clone)]
pub struct MigrationConfig {
    /// Source stack name
    pub source: String,
    /// Destination stack name (created if absent)
    pub destination: String,
    /// Source stack passphrase
    pub source_pass: Passphrase,
    /// Destination stack passphrase
    pub destination_pass: Passphrase,
    /// Pulumi project directory
    pub work_dir: PathBuf,
    /// Provider binary name or path
    pub provider_bin: String,
    /// Report what would change without writing to the destination
    pub dry_run: bool,
}

impl MigrationConfig {
    /// Create a configuration with default work dir and provider binary.
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        source_pass: Passphrase,
        destination_pass: Passphrase,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            source_pass,
            destination_pass,
            work_dir: PathBuf::from("."),
            provider_bin: constants::PROVIDER_BIN.to_string(),
            dry_run: false,
        }
    }

    /// Set the Pulumi project directory.
    pub fn with_work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = dir.into();
        self
    }

    /// Enable or disable dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Source stack as addressed through the provider.
    pub fn source_target(&self) -> Target {
        Target::new(&self.work_dir, &self.source, self.source_pass.clone())
    }

    /// Destination stack as addressed through the provider.
    pub fn destination_target(&self) -> Target {
        Target::new(
            &self.work_dir,
            &self.destination,
            self.destination_pass.clone(),
        )
    }

    /// Validate the configuration before any provider call.
    ///
    /// Checks:
    /// - Stack names and passphrases are non-empty
    /// - Source and destination are different stacks
    /// - The working directory exists
    ///
    /// # Errors
    ///
    /// Returns `UsageError` on the first failed check.
    pub fn validate(&self) -> Result<()> {
        debug!("validating config");

        if self.source.trim().is_empty() {
            return Err(UsageError::Missing { flag: "--src" }.into());
        }
        if self.destination.trim().is_empty() {
            return Err(UsageError::Missing { flag: "--dst" }.into());
        }
        if self.source_pass.is_empty() {
            return Err(UsageError::Missing { flag: "--src-pass" }.into());
        }
        if self.destination_pass.is_empty() {
            return Err(UsageError::Missing { flag: "--dst-pass" }.into());
        }
        if self.source == self.destination {
            return Err(UsageError::SameStack(self.source.clone()).into());
        }
        if !self.work_dir.is_dir() {
            return Err(UsageError::NoWorkDir(self.work_dir.display().to_string()).into());
        }

        Ok(())
    }
}
