//! Recipient set.
//!
//! The identities listed in a recipient file.

use std::fmt;

use crate::core::types::Identity;

/// Ordered list of recipient identities for one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipients(Vec<Identity>);

impl Recipients {
    /// Build from identities, trimming whitespace and dropping blanks.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            ids.into_iter()
                .map(|s| s.as_ref().trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }

    /// Parse recipient file contents: one identity per line.
    pub fn parse(contents: &str) -> Self {
        Self::new(contents.lines())
    }

    /// Serialize for writing back to a recipient file.
    pub fn to_contents(&self) -> String {
        let mut out = String::new();
        for id in &self.0 {
            out.push_str(id);
            out.push('\n');
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Identity> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Identity] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Recipients {
    type Item = &'a Identity;
    type IntoIter = std::slice::Iter<'a, Identity>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Recipients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}
