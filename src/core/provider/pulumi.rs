//! Pulumi CLI provider.
//!
//! ## Requirements
//!
//! - `pulumi` CLI must be installed (or passed explicitly with `--pulumi`)
//! - The working directory must contain the Pulumi project
//!
//! Every call runs with `PULUMI_CONFIG_PASSPHRASE` set to the target's
//! passphrase and `PULUMI_SKIP_UPDATE_CHECK=1`.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use super::{Invocation, Provider};
use crate::core::constants::{PASSPHRASE_ENV, SKIP_UPDATE_CHECK_ENV};
use crate::core::domain::Target;
use crate::error::{ProviderError, Result};

/// Provider backed by the `pulumi` binary.
#[derive(Debug, Clone)]
pub struct Pulumi {
    bin: PathBuf,
}

impl Pulumi {
    /// Resolve the provider binary.
    ///
    /// Accepts a bare name looked up on `PATH` or an explicit path.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::NotFound` if no executable matches.
    pub fn locate(bin: &str) -> Result<Self> {
        let bin = which::which(bin).map_err(|e| ProviderError::NotFound {
            bin: bin.to_string(),
            reason: e.to_string(),
        })?;
        debug!(bin = %bin.display(), "located provider");
        Ok(Self { bin })
    }

    /// Resolved binary path
    pub fn bin(&self) -> &Path {
        &self.bin
    }

    fn label(&self, invocation: &Invocation) -> String {
        let name = self
            .bin
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.bin.display().to_string());
        format!("{} {}", name, invocation)
    }
}

impl Provider for Pulumi {
    fn invoke(&self, target: &Target, invocation: &Invocation) -> Result<Vec<u8>> {
        let command = self.label(invocation);
        debug!(
            command = %command,
            dir = %target.work_dir().display(),
            "invoking provider"
        );

        let output = Command::new(&self.bin)
            .args(invocation.args())
            .current_dir(target.work_dir())
            .env(PASSPHRASE_ENV, target.passphrase().expose())
            .env(SKIP_UPDATE_CHECK_ENV, "1")
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ProviderError::Spawn {
                command: command.clone(),
                source,
            })?;

        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);

        if !output.status.success() {
            return Err(ProviderError::Failed {
                command,
                status: output.status.to_string(),
                output: String::from_utf8_lossy(&combined).into_owned(),
            }
            .into());
        }

        trace!(bytes = combined.len(), "provider output captured");
        Ok(combined)
    }
}
