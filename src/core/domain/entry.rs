//! Configuration entry types.
//!
//! Mirrors the JSON emitted by `pulumi config --show-secrets --json`:
//!
//! ```json
//! { "app:dbUrl": { "value": "postgres://...", "secret": true } }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;
use zeroize::Zeroizing;

use crate::core::constants::REDACTED;
use crate::core::types::ConfigKey;

/// All configuration of one stack, keyed by config key.
///
/// Enumeration order is ascending key order.
pub type ConfigSet = BTreeMap<ConfigKey, ConfigEntry>;

/// One configuration key's current value.
///
/// Secret values are held decrypted, so the value is wiped from memory on
/// drop and never shown by `Debug`.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawEntry")]
pub struct ConfigEntry {
    value: Zeroizing<String>,
    secret: bool,
}

/// Wire shape; `secret` is omitted by the provider for plain values.
#[derive(Deserialize)]
struct RawEntry {
    value: String,
    #[serde(default)]
    secret: bool,
}

impl From<RawEntry> for ConfigEntry {
    fn from(raw: RawEntry) -> Self {
        Self {
            value: Zeroizing::new(raw.value),
            secret: raw.secret,
        }
    }
}

impl ConfigEntry {
    /// A plain (non-secret) entry.
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: Zeroizing::new(value.into()),
            secret: false,
        }
    }

    /// A secret entry; the provider re-encrypts it on write.
    pub fn secret(value: impl Into<String>) -> Self {
        Self {
            value: Zeroizing::new(value.into()),
            secret: true,
        }
    }

    /// Decrypted value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the value must be stored encrypted
    pub fn is_secret(&self) -> bool {
        self.secret
    }
}

impl std::fmt::Debug for ConfigEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value: &str = if self.secret { REDACTED } else { &self.value };
        f.debug_struct("ConfigEntry")
            .field("value", &value)
            .field("secret", &self.secret)
            .finish()
    }
}
