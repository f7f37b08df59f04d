//! Decrypted entry.
//!
//! Splits the free-form text of a secret into its primary value (the
//! password) and a handful of `key: value` fields.
//!
//! Only the first matching line of each kind is used. When a secret holds
//! several `user:` lines, which one the author meant is undefined; we keep
//! the first.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use zeroize::Zeroizing;

use crate::error::{Error, ValidationError};

/// Field kinds recognised inside an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Password,
    Username,
    Hostname,
}

impl EntryKind {
    /// Lowercase name, as accepted by `show --field`.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Password => "password",
            EntryKind::Username => "username",
            EntryKind::Hostname => "hostname",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "password" => Ok(EntryKind::Password),
            "username" => Ok(EntryKind::Username),
            "hostname" => Ok(EntryKind::Hostname),
            other => Err(ValidationError::UnknownField(other.to_string()).into()),
        }
    }
}

fn password_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:password|pass):\s*(.+)").expect("valid regex"))
}

fn username_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:username|user|login):\s*(.+)").expect("valid regex"))
}

fn hostname_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:host|hostname):\s*(.+)").expect("valid regex"))
}

/// Byte range of the first capture of `re` on any line of `content`.
fn first_capture(content: &str, re: &Regex) -> Option<Range<usize>> {
    let mut offset = 0;
    for line in content.split('\n') {
        let text = line.strip_suffix('\r').unwrap_or(line);
        if let Some(m) = re.captures(text).and_then(|c| c.get(1)) {
            return Some(offset + m.start()..offset + m.end());
        }
        offset += line.len() + 1;
    }
    None
}

/// A decrypted secret.
///
/// The content is zeroed on drop. Accessors borrow from it rather than
/// copying plaintext around.
pub struct Entry {
    content: Zeroizing<String>,
    primary: Range<usize>,
}

impl Entry {
    /// Parse decrypted text.
    pub fn parse(content: Zeroizing<String>) -> Self {
        let primary = first_capture(&content, password_re()).unwrap_or_else(|| {
            let end = content.find('\n').unwrap_or(content.len());
            let line = &content[..end];
            0..line.strip_suffix('\r').map_or(end, str::len)
        });
        Self { content, primary }
    }

    /// The complete decrypted text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The password: a `password:`/`pass:` value, or else the first line.
    pub fn primary(&self) -> &str {
        &self.content[self.primary.clone()]
    }

    /// Value of a named field, if present.
    pub fn get(&self, kind: EntryKind) -> Option<&str> {
        let re = match kind {
            EntryKind::Password => return Some(self.primary()),
            EntryKind::Username => username_re(),
            EntryKind::Hostname => hostname_re(),
        };
        first_capture(&self.content, re).map(|r| &self.content[r])
    }

    /// Everything after the first line, if any.
    pub fn rest(&self) -> Option<&str> {
        self.content.find('\n').map(|i| &self.content[i + 1..])
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("content", &"[REDACTED]")
            .field("len", &self.content.len())
            .finish()
    }
}

/// Replace the first line of `content` with `first`, keeping the rest verbatim.
pub fn replace_first_line(content: &str, first: &str) -> Zeroizing<String> {
    let mut out = Zeroizing::new(String::with_capacity(first.len() + content.len()));
    out.push_str(first);
    if let Some(i) = content.find('\n') {
        out.push_str(&content[i..]);
    }
    out
}
