//! Command-line interface.

pub mod migrate;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::core::config::MigrationConfig;
use crate::core::constants;
use crate::core::domain::Passphrase;

/// Stackport - copy Pulumi stack configuration, secrets included.
#[derive(Parser)]
#[command(
    name = "stackport",
    about = "Copy Pulumi stack configuration, secrets included, to another stack",
    version,
    after_help = "Requires the pulumi CLI on PATH (or --pulumi <path>)."
)]
pub struct Cli {
    /// Source stack name
    #[arg(long = "src", value_name = "STACK", env = "STACKPORT_SRC")]
    pub src: String,

    /// Destination stack name (created if absent)
    #[arg(long = "dst", value_name = "STACK", env = "STACKPORT_DST")]
    pub dst: String,

    /// Source stack passphrase
    #[arg(
        long = "src-pass",
        value_name = "PASSPHRASE",
        env = "STACKPORT_SRC_PASS",
        hide_env_values = true
    )]
    pub src_pass: String,

    /// Destination stack passphrase
    #[arg(
        long = "dst-pass",
        value_name = "PASSPHRASE",
        env = "STACKPORT_DST_PASS",
        hide_env_values = true
    )]
    pub dst_pass: String,

    /// Pulumi project directory
    #[arg(long, value_name = "DIR", default_value = ".", env = "STACKPORT_DIR")]
    pub dir: PathBuf,

    /// Pulumi binary to run
    #[arg(
        long,
        value_name = "BIN",
        default_value = constants::PROVIDER_BIN,
        env = "STACKPORT_PULUMI"
    )]
    pub pulumi: String,

    /// Show what would be migrated without touching the destination
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Turn parsed flags into the run configuration.
    pub fn into_config(self) -> MigrationConfig {
        let mut config = MigrationConfig::new(
            self.src,
            self.dst,
            Passphrase::from(self.src_pass),
            Passphrase::from(self.dst_pass),
        )
        .with_work_dir(self.dir)
        .with_dry_run(self.dry_run);
        config.provider_bin = self.pulumi;
        config
    }
}

/// Execute a migration from parsed flags.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    migrate::execute(cli.into_config())
}
