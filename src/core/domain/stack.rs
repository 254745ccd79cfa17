//! Stack listing record.

use serde::Deserialize;

use crate::core::types::StackName;

/// One record of `pulumi stack ls --json`.
///
/// Only the name is needed; the other fields (`current`, `updateInProgress`,
/// `url`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StackSummary {
    pub name: StackName,
}
