//! Cellar - a personal password store.
//!
//! Every secret is a separate encrypted file in a directory tree, so the
//! store can be synced and versioned with ordinary tools.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Create or clone a store, set recipients
//! │   ├── secrets/      # show, insert, edit, generate, rm, mv, cp, ls, find, grep
//! │   ├── git           # git passthrough
//! │   ├── reencrypt     # Re-key secrets
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # config.toml management
//!     ├── domain/       # SecretPath, Entry, Recipients, Change
//!     ├── recipient     # Nearest recipient file lookup
//!     ├── generator     # Password generation
//!     ├── cipher/       # Encryption backends
//!     │   ├── mod       # Cipher trait
//!     │   ├── gpg       # gpg CLI implementation
//!     │   └── age       # age encryption implementation
//!     ├── vcs/          # Version control backends
//!     │   ├── mod       # VersionControl trait
//!     │   └── git       # git CLI implementation
//!     └── store/        # The password store
//! ```
//!
//! # Example
//!
//! ```no_run
//! use cellar::core::config::Config;
//! use cellar::core::domain::SecretPath;
//! use cellar::core::store::{Options, Store};
//!
//! # fn main() -> cellar::error::Result<()> {
//! let config = Config::load()?;
//! let store = Store::open(config.store_root(None)?, Options::from_config(&config)?)?;
//!
//! let path = SecretPath::parse("Email/bob.net")?;
//! let change = store.insert(&path, "hunter2\nusername: bob")?;
//! store.record(&change)?;
//!
//! println!("{}", store.get(&path)?.primary());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::store::Store;
pub use crate::error::{Error, Result};
