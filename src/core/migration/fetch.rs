//! Config fetcher.

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::core::domain::{ConfigSet, Target};
use crate::core::provider::{Invocation, Provider};
use crate::error::{DecodeError, Result};

/// Invocation dumping every config value of `stack`, secrets decrypted.
pub fn fetch_invocation(stack: &str) -> Invocation {
    Invocation::new(["config", "--show-secrets", "--json", "--stack"]).arg(stack)
}

/// Fetch all configuration of the source stack.
///
/// # Errors
///
/// Returns `ProviderError` if the provider call fails, or
/// `DecodeError` if its output is not a `key -> {value, secret}` object.
pub fn fetch_config<P: Provider + ?Sized>(provider: &P, source: &Target) -> Result<ConfigSet> {
    info!(stack = source.stack(), "fetching config");

    // output holds decrypted secrets
    let output = Zeroizing::new(provider.invoke(source, &fetch_invocation(source.stack()))?);
    let config: ConfigSet = serde_json::from_slice(&output).map_err(|source| DecodeError::Json {
        what: "config",
        source,
    })?;

    debug!(
        entries = config.len(),
        secrets = config.values().filter(|e| e.is_secret()).count(),
        "config fetched"
    );
    Ok(config)
}
