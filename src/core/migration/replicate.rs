//! Config replicator.

use tracing::{debug, info};

use crate::core::domain::{ConfigEntry, ConfigSet, Target};
use crate::core::provider::{Invocation, Provider};
use crate::error::Result;

/// Invocation setting `key` on `stack`.
///
/// Secret entries get `--secret` and their value is marked sensitive so it
/// is redacted from logs and errors. `--` keeps values starting with `-`
/// from being read as flags.
pub fn set_invocation(stack: &str, key: &str, entry: &ConfigEntry) -> Invocation {
    let mut inv = Invocation::new(["config", "set", "--stack"]).arg(stack);
    if entry.is_secret() {
        inv = inv.arg("--secret");
    }
    inv = inv.arg("--").arg(key);
    if entry.is_secret() {
        inv.sensitive(entry.value())
    } else {
        inv.arg(entry.value())
    }
}

/// Apply every entry of `config` to the destination stack.
///
/// One provider call per entry, in enumeration order. `on_key` runs before
/// each call, so progress shows the key being attempted even if it fails.
/// Keys already on the destination but absent from `config` are left alone.
///
/// # Returns
///
/// Number of entries applied.
///
/// # Errors
///
/// Returns the first provider error; earlier sets are not rolled back.
pub fn replicate<P, F>(
    provider: &P,
    config: &ConfigSet,
    destination: &Target,
    mut on_key: F,
) -> Result<usize>
where
    P: Provider + ?Sized,
    F: FnMut(&str, &ConfigEntry),
{
    info!(
        stack = destination.stack(),
        entries = config.len(),
        "replicating config"
    );

    for (key, entry) in config {
        on_key(key.as_str(), entry);
        debug!(key = %key, secret = entry.is_secret(), "setting config value");
        provider.invoke(destination, &set_invocation(destination.stack(), key, entry))?;
    }

    Ok(config.len())
}
