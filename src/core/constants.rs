//! Constants used throughout stackport.
//!
//! Centralizes the provider binary name and the environment variables
//! exchanged with it.

/// Default provider binary, resolved on `PATH`.
pub const PROVIDER_BIN: &str = "pulumi";

/// Passphrase used by the provider to encrypt/decrypt a stack's secrets.
pub const PASSPHRASE_ENV: &str = "PULUMI_CONFIG_PASSPHRASE";

/// Disables the provider's update check so its output stays parseable.
pub const SKIP_UPDATE_CHECK_ENV: &str = "PULUMI_SKIP_UPDATE_CHECK";

/// Log filter override (e.g. `STACKPORT_LOG=debug`).
pub const LOG_ENV: &str = "STACKPORT_LOG";

/// Placeholder shown instead of sensitive arguments.
pub const REDACTED: &str = "[redacted]";
