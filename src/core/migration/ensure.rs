//! Stack ensurer.

use tracing::{debug, info};

use crate::core::domain::{StackSummary, Target};
use crate::core::provider::{Invocation, Provider};
use crate::error::{DecodeError, Result};

/// Outcome of [`ensure_stack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ensured {
    /// The stack was already known; nothing was changed.
    Existing,
    /// The stack was initialised by this call.
    Created,
}

/// Check whether `target`'s stack is known to the provider.
///
/// Runs `stack ls --json` with the target's own directory and passphrase.
///
/// # Errors
///
/// Returns `ProviderError` if listing fails, or `DecodeError` if the
/// listing is not an array of `{ name }` records.
pub fn stack_exists<P: Provider + ?Sized>(provider: &P, target: &Target) -> Result<bool> {
    let output = provider.invoke(target, &Invocation::new(["stack", "ls", "--json"]))?;
    let stacks: Vec<StackSummary> =
        serde_json::from_slice(&output).map_err(|source| DecodeError::Json {
            what: "stack ls",
            source,
        })?;

    let exists = stacks.iter().any(|s| s.name == target.stack());
    debug!(stack = target.stack(), known = stacks.len(), exists, "checked stack");
    Ok(exists)
}

/// Make sure `target`'s stack exists, creating it if absent.
///
/// Idempotent: a second call finds the stack and changes nothing.
///
/// # Errors
///
/// Returns error if listing, decoding or `stack init` fails.
pub fn ensure_stack<P: Provider + ?Sized>(provider: &P, target: &Target) -> Result<Ensured> {
    if stack_exists(provider, target)? {
        return Ok(Ensured::Existing);
    }

    info!(stack = target.stack(), "destination stack not found, creating it");
    provider.invoke(target, &Invocation::new(["stack", "init"]).arg(target.stack()))?;
    Ok(Ensured::Created)
}
