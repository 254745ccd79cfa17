//! Invocation context for one side of a migration.

use std::path::{Path, PathBuf};

use crate::core::domain::Passphrase;

/// A stack as addressed through the provider: project directory, stack
/// name and the passphrase protecting its secrets.
///
/// Every provider call takes a whole `Target`, so the stack name and its
/// passphrase always travel together.
#[derive(Debug, Clone)]
pub struct Target {
    work_dir: PathBuf,
    stack: String,
    passphrase: Passphrase,
}

impl Target {
    pub fn new(work_dir: impl Into<PathBuf>, stack: impl Into<String>, passphrase: Passphrase) -> Self {
        Self {
            work_dir: work_dir.into(),
            stack: stack.into(),
            passphrase,
        }
    }

    /// Project directory the provider runs in
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Stack name
    pub fn stack(&self) -> &str {
        &self.stack
    }

    /// Passphrase for this stack's secrets
    pub fn passphrase(&self) -> &Passphrase {
        &self.passphrase
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.stack)
    }
}
