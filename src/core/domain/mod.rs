//! Domain types.

mod entry;
mod passphrase;
mod stack;
mod target;

pub use entry::{ConfigEntry, ConfigSet};
pub use passphrase::Passphrase;
pub use stack::StackSummary;
pub use target::Target;
