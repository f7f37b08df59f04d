//! Change record.
//!
//! What a mutating store operation touched, for handing to version control.

use std::path::PathBuf;

/// Paths affected by one store operation, relative to the store root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    paths: Vec<PathBuf>,
    message: String,
}

impl Change {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            paths: Vec::new(),
            message: message.into(),
        }
    }

    /// Add an affected path.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Replace the commit message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Merge another change's paths into this one.
    pub fn absorb(&mut self, other: Change) {
        self.paths.extend(other.paths);
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Suggested commit message.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
