//! External provider abstraction.
//!
//! Storage, encryption and stack lifecycle all belong to the provider CLI.
//! This module models a call to it as "arguments in, combined output or
//! error out" so the migration logic can run against a fake in tests.
//!
//! ## Adding a New Provider
//!
//! 1. Implement the `Provider` trait
//! 2. Add the implementation in a new file (e.g., `pulumi.rs`)
//! 3. Re-export from this module

mod invocation;
mod pulumi;


pub use invocation::Invocation;
pub use pulumi::Pulumi;

use crate::core::domain::Target;
use crate::error::Result;

/// Executes provider commands.
pub trait Provider {
    /// Run one provider command against a stack.
    ///
    /// # Arguments
    ///
    /// * `target` - Working directory and passphrase for the call
    /// * `invocation` - Command arguments
    ///
    /// # Returns
    ///
    /// Combined standard output and standard error.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` if the command cannot be started or exits
    /// unsuccessfully.
    fn invoke(&self, target: &Target, invocation: &Invocation) -> Result<Vec<u8>>;
}

impl<P: Provider + ?Sized> Provider for &P {
    fn invoke(&self, target: &Target, invocation: &Invocation) -> Result<Vec<u8>> {
        (**self).invoke(target, invocation)
    }
}

impl<P: Provider + ?Sized> Provider for Box<P> {
    fn invoke(&self, target: &Target, invocation: &Invocation) -> Result<Vec<u8>> {
        (**self).invoke(target, invocation)
    }
}
