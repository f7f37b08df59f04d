//! Domain types.

mod change;
pub mod entry;
mod recipients;
mod secret_path;

pub use change::Change;
pub use entry::{Entry, EntryKind};
pub use recipients::Recipients;
pub use secret_path::SecretPath;
