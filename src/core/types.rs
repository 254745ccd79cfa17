//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A stack name as known to the provider (e.g. `dev`, `acme/app/prod`).
pub type StackName = String;

/// A configuration key, usually namespaced (e.g. `aws:region`, `app:dbUrl`).
pub type ConfigKey = String;
