//! Stackport - copy Pulumi stack configuration, secrets included.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── migrate       # Run a migration, print progress and summary
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # Run configuration and validation
//!     ├── domain/       # ConfigEntry, ConfigSet, StackSummary, Passphrase, Target
//!     ├── provider/     # Provider trait and the pulumi CLI implementation
//!     └── migration/    # fetch → ensure → replicate
//! ```
//!
//! # Features
//!
//! - Secrets copied decrypted in memory only, re-encrypted by pulumi on write
//! - Destination stack created when missing
//! - Passphrases and secret values never logged
//! - Provider behind a trait, so the migration runs against fakes in tests

pub mod cli;
pub mod core;
pub mod error;
