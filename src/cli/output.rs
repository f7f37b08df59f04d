//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: secret names, hints
//! - Blue bold: folders
//! - Dimmed: secondary info
//!
//! Status lines go to stderr so stdout carries only data (decrypted
//! content, listings, JSON) and stays safe to pipe.

use std::fmt::Display;

use console::style;

/// Check if color output is enabled.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled_stderr()
}

fn stdout_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ added Email/bob.net`
pub fn success(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✓").green(), msg);
    } else {
        eprintln!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ Email/bob.net is not in the password store`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("⚠").yellow(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ run: cellar init <gpg-id>`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  store:  /home/bob/.password-store`
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        eprintln!("  {}  {}", style(label).dim(), style(value).bold());
    } else {
        eprintln!("  {}  {}", label, value);
    }
}

/// Print plain data to stdout, undecorated.
pub fn data(msg: &str) {
    println!("{}", msg);
}

/// Format a secret name in cyan.
pub fn key(k: &str) -> String {
    if colors_enabled() {
        style(k).cyan().to_string()
    } else {
        k.to_string()
    }
}

/// Format a folder name for stdout listings.
pub fn folder(name: &str) -> String {
    if stdout_colors() {
        style(name).blue().bold().to_string()
    } else {
        name.to_string()
    }
}

/// Format a secret name for stdout listings.
pub fn secret(name: &str) -> String {
    if stdout_colors() {
        style(name).cyan().to_string()
    } else {
        name.to_string()
    }
}

/// Highlight the part of a line that matched a pattern.
pub fn highlight(text: &str) -> String {
    if stdout_colors() {
        style(text).red().bold().to_string()
    } else {
        text.to_string()
    }
}
