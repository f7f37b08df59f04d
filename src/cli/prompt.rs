//! Interactive input.
//!
//! Prompts only when stdin is a terminal; otherwise input is read from
//! the pipe so every command can be scripted.

use std::io::{self, IsTerminal, Read};

use dialoguer::{Confirm, Input, Password};
use zeroize::Zeroizing;

use crate::cli::output;
use crate::error::{Result, StoreError};

/// True when stdin is a terminal.
pub fn interactive() -> bool {
    io::stdin().is_terminal()
}

/// Hidden input with confirmation, or one line from a pipe.
pub fn password(name: &str) -> Result<Zeroizing<String>> {
    if !interactive() {
        return read_line();
    }
    let value = Password::new()
        .with_prompt(format!("Enter password for {}", output::key(name)))
        .with_confirmation(
            format!("Retype password for {}", output::key(name)),
            "the entered passwords do not match",
        )
        .interact()?;
    Ok(Zeroizing::new(value))
}

/// Visible single-line input, or one line from a pipe.
pub fn echo(name: &str) -> Result<Zeroizing<String>> {
    if !interactive() {
        return read_line();
    }
    let value: String = Input::new()
        .with_prompt(format!("Enter password for {}", output::key(name)))
        .interact_text()?;
    Ok(Zeroizing::new(value))
}

/// Everything up to end of input.
pub fn multiline(name: &str) -> Result<Zeroizing<String>> {
    if interactive() {
        eprintln!(
            "Enter contents of {} and press Ctrl+D when finished:",
            output::key(name)
        );
    }
    let mut input = Zeroizing::new(String::new());
    io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

fn read_line() -> Result<Zeroizing<String>> {
    let mut input = Zeroizing::new(String::new());
    io::stdin().read_line(&mut input)?;
    let len = input.trim_end_matches(['\n', '\r']).len();
    input.truncate(len);
    Ok(input)
}

/// Ask before overwriting `name`. Off a terminal the answer is no.
///
/// # Errors
///
/// Returns `StoreError::AlreadyExists` when the user declines.
pub fn confirm_overwrite(name: &str) -> Result<()> {
    let confirmed = interactive()
        && Confirm::new()
            .with_prompt(format!(
                "An entry already exists for {}. Overwrite it?",
                output::key(name)
            ))
            .default(false)
            .interact()?;
    if confirmed {
        Ok(())
    } else {
        Err(StoreError::AlreadyExists(name.to_string()).into())
    }
}

/// Ask a yes/no question. Off a terminal the answer is no.
pub fn confirm(question: &str) -> Result<bool> {
    if !interactive() {
        return Ok(false);
    }
    Ok(Confirm::new()
        .with_prompt(question)
        .default(false)
        .interact()?)
}
