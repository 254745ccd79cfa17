//! Migrate command - copy config from the source stack to the destination.

use tracing::info;

use crate::cli::output;
use crate::core::config::MigrationConfig;
use crate::core::domain::ConfigEntry;
use crate::core::migration::{Migration, Observer, Report};
use crate::core::provider::Pulumi;
use crate::error::Result;

/// Prints one line per event as the migration runs.
struct Progress;

impl Observer for Progress {
    fn stack_created(&mut self, stack: &str) {
        output::success(&format!("created stack {}", stack));
    }

    fn key_started(&mut self, key: &str, _entry: &ConfigEntry) {
        output::step(key);
    }

    fn key_planned(&mut self, key: &str, entry: &ConfigEntry) {
        output::list_item(key, entry.is_secret());
    }
}

/// Run a migration and print its summary.
pub fn execute(config: MigrationConfig) -> Result<()> {
    config.validate()?;
    let provider = Pulumi::locate(&config.provider_bin)?;

    info!(bin = %provider.bin().display(), "running migration");
    let report = Migration::new(provider, config).run(&mut Progress)?;

    summarize(&report);
    Ok(())
}

fn summarize(report: &Report) {
    if report.dry_run {
        if report.migrated == 0 {
            output::dimmed("no config values to migrate");
        }
        if report.created {
            output::dimmed(&format!("would create stack {:?}", report.destination));
        }
        output::success(&format!(
            "would migrate {} config values from {:?} → {:?}",
            report.migrated, report.source, report.destination
        ));
        return;
    }

    println!();
    output::success(&format!(
        "migrated {} config values from {:?} → {:?}",
        report.migrated, report.source, report.destination
    ));
}
