//! Test support utilities for stackport integration tests.
//!
//! Provides an isolated project directory with a fake `pulumi` script for
//! CLI runs, and an in-memory provider for library-level runs.

#![allow(dead_code)]

pub mod assertions;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use memory::Memory;

#[cfg(unix)]
use std::path::PathBuf;
#[cfg(unix)]
use tempfile::TempDir;

/// Fake `pulumi` used by CLI tests.
///
/// Appends `pwd|passphrase|skip-update-check|args` to `calls.log` in
/// `$FAKE_PULUMI_STATE` and answers from the files next to it:
/// - `config.json` for `config --show-secrets`
/// - `stacks.json` for `stack ls`
/// - `fail-config`, `fail-ls`, `fail-init` make that command exit 1
/// - `fail-set` holds a key whose `config set` exits 1
#[cfg(unix)]
const FAKE_PULUMI: &str = r#"#!/bin/sh
state="$FAKE_PULUMI_STATE"
printf '%s|%s|%s|%s\n' "$(pwd)" "$PULUMI_CONFIG_PASSPHRASE" "$PULUMI_SKIP_UPDATE_CHECK" "$*" >> "$state/calls.log"
case "$1 $2" in
  "config --show-secrets")
    if [ -f "$state/fail-config" ]; then echo "error: failed to decrypt config" >&2; exit 1; fi
    cat "$state/config.json"
    ;;
  "stack ls")
    if [ -f "$state/fail-ls" ]; then echo "error: could not list stacks" >&2; exit 1; fi
    cat "$state/stacks.json"
    ;;
  "stack init")
    if [ -f "$state/fail-init" ]; then echo "error: could not create stack $3" >&2; exit 1; fi
    echo "Created stack '$3'"
    ;;
  "config set")
    if [ -f "$state/fail-set" ]; then
      bad=$(cat "$state/fail-set")
      for arg in "$@"; do
        if [ "$arg" = "$bad" ]; then echo "error: could not set $bad" >&2; exit 1; fi
      done
    fi
    ;;
esac
exit 0
"#;

/// Test environment with isolated temp directories.
///
/// `dir` is the Pulumi project directory the binary runs in; `state`
/// holds the fake provider script, its canned answers and its call log.
#[cfg(unix)]
pub struct Test {
    /// Temporary project directory
    pub dir: TempDir,
    /// Fake provider script and state
    pub state: TempDir,
}

#[cfg(unix)]
impl Test {
    /// Create a new test environment with no stacks and no config.
    pub fn new() -> Self {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().expect("failed to create temp dir");
        let state = TempDir::new().expect("failed to create state dir");

        let script = state.path().join("pulumi");
        std::fs::write(&script, FAKE_PULUMI).expect("failed to write fake pulumi");
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
            .expect("failed to chmod fake pulumi");

        let t = Self { dir, state };
        t.write_state("config.json", "{}");
        t.write_state("stacks.json", "[]");
        t
    }

    /// Create a test environment whose source stack holds `config`.
    pub fn with_config(config: &str) -> Self {
        let t = Self::new();
        t.write_state("config.json", config);
        t.write_state("stacks.json", r#"[{"name":"dev","current":true}]"#);
        t
    }

    /// Path to the fake provider script.
    pub fn pulumi(&self) -> PathBuf {
        self.state.path().join("pulumi")
    }

    /// Overwrite one of the fake provider's state files.
    pub fn write_state(&self, name: &str, contents: &str) {
        std::fs::write(self.state.path().join(name), contents)
            .expect("failed to write fake pulumi state");
    }
}
