//! Stackport - copy Pulumi stack configuration, secrets included.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stackport::cli::output;
use stackport::cli::{execute, Cli};
use stackport::core::constants::LOG_ENV;
use stackport::error::{Error, ProviderError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("stackport=debug")
        } else {
            EnvFilter::new("stackport=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Usage(_) => Some("run: stackport --help"),
            Error::Provider(ProviderError::NotFound { .. }) => {
                Some("install pulumi (https://www.pulumi.com/docs/install/) or pass --pulumi <path>")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
