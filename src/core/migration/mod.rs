//! Stack-to-stack config migration.
//!
//! A run is a strict linear sequence with no retries:
//!
//! ```text
//! fetch (source) ─▶ ensure (destination) ─▶ replicate (one set per key)
//! ```
//!
//! The first error from any stage ends the run.

mod ensure;
mod fetch;
mod replicate;

pub use ensure::{ensure_stack, stack_exists, Ensured};
pub use fetch::{fetch_config, fetch_invocation};
pub use replicate::{replicate, set_invocation};

use tracing::info;

use crate::core::config::MigrationConfig;
use crate::core::domain::ConfigEntry;
use crate::core::provider::Provider;
use crate::error::Result;

/// Receives progress events during a run.
pub trait Observer {
    /// The destination stack was missing and has been created.
    fn stack_created(&mut self, _stack: &str) {}

    /// `key` is about to be set on the destination.
    fn key_started(&mut self, _key: &str, _entry: &ConfigEntry) {}

    /// Dry run: `key` would be set on the destination.
    fn key_planned(&mut self, _key: &str, _entry: &ConfigEntry) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default)]
pub struct Silent;

impl Observer for Silent {}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Entries set (or, in a dry run, that would be set)
    pub migrated: usize,
    pub source: String,
    pub destination: String,
    /// Destination was created (or, in a dry run, would be)
    pub created: bool,
    pub dry_run: bool,
}

/// One migration run against a provider.
pub struct Migration<P> {
    provider: P,
    config: MigrationConfig,
}

impl<P: Provider> Migration<P> {
    pub fn new(provider: P, config: MigrationConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &MigrationConfig {
        &self.config
    }

    /// Run the migration.
    ///
    /// The configuration is validated first; a usage error means no
    /// provider call was made.
    ///
    /// # Errors
    ///
    /// Returns the first usage, provider or decode error.
    pub fn run(&self, observer: &mut dyn Observer) -> Result<Report> {
        self.config.validate()?;

        let source = self.config.source_target();
        let destination = self.config.destination_target();
        info!(
            source = source.stack(),
            destination = destination.stack(),
            dry_run = self.config.dry_run,
            "starting migration"
        );

        let entries = fetch_config(&self.provider, &source)?;

        if self.config.dry_run {
            let created = !stack_exists(&self.provider, &destination)?;
            for (key, entry) in &entries {
                observer.key_planned(key, entry);
            }
            return Ok(self.report(entries.len(), created));
        }

        let created = ensure_stack(&self.provider, &destination)? == Ensured::Created;
        if created {
            observer.stack_created(destination.stack());
        }

        let migrated = replicate(&self.provider, &entries, &destination, |key, entry| {
            observer.key_started(key, entry)
        })?;

        info!(migrated, "migration complete");
        Ok(self.report(migrated, created))
    }

    fn report(&self, migrated: usize, created: bool) -> Report {
        Report {
            migrated,
            source: self.config.source.clone(),
            destination: self.config.destination.clone(),
            created,
            dry_run: self.config.dry_run,
        }
    }
}
