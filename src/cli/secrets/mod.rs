//! Secret commands.
//!
//! Implements show, insert and rm here; listing, search, generation,
//! editing and move/copy live in submodules.

mod edit;
mod generate;
mod grep;
mod list;
mod transfer;

use tracing::info;

use crate::cli::{output, prompt, Context};
use crate::core::domain::{EntryKind, SecretPath};
use crate::error::{Result, StoreError, ValidationError};

pub use edit::execute as edit;
pub use generate::{execute as generate, GenerateArgs};
pub use grep::execute as grep;
pub use list::{find, list};
pub use transfer::{cp, mv};

/// Print a secret, one of its fields, or the tree of a folder.
pub fn show(ctx: &Context, path: &str, field: Option<&str>) -> Result<()> {
    let store = ctx.open()?;
    let path = SecretPath::parse(path)?;

    if !store.contains(&path)? && store.is_dir(&path)? {
        return list::print_tree(&store, Some(&path), false);
    }

    let entry = store.get(&path)?;
    match field {
        Some(field) => {
            let kind: EntryKind = field.parse()?;
            let value = entry.get(kind).ok_or_else(|| StoreError::MissingField {
                path: path.to_string(),
                field: kind.to_string(),
            })?;
            output::data(value);
        }
        None => {
            // Plain output for scripting - no decoration
            let content = entry.content();
            if content.ends_with('\n') {
                print!("{}", content);
            } else {
                println!("{}", content);
            }
        }
    }
    Ok(())
}

/// Insert a secret read from the terminal or stdin.
pub fn insert(ctx: &Context, path: &str, multiline: bool, echo: bool, force: bool) -> Result<()> {
    let store = ctx.open()?;
    let path = SecretPath::parse(path)?;

    if !force && store.contains(&path)? {
        prompt::confirm_overwrite(path.as_str())?;
    }

    let value = if multiline {
        prompt::multiline(path.as_str())?
    } else if echo {
        prompt::echo(path.as_str())?
    } else {
        prompt::password(path.as_str())?
    };
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyValue(path.to_string()).into());
    }

    info!(path = %path, multiline, "inserting secret");
    let change = store.insert(&path, &value)?;
    store.record(&change)?;
    output::success(&format!("added {}", output::key(path.as_str())));
    Ok(())
}

/// Remove a secret or folder, asking first on a terminal.
pub fn rm(ctx: &Context, path: &str, recursive: bool, force: bool) -> Result<()> {
    let store = ctx.open()?;
    let path = SecretPath::parse(path)?;

    if !store.contains(&path)? && !store.is_dir(&path)? {
        return Err(StoreError::NotFound(path.to_string()).into());
    }
    if !force
        && prompt::interactive()
        && !prompt::confirm(&format!(
            "Are you sure you would like to delete {}?",
            output::key(path.as_str())
        ))?
    {
        output::warn("nothing removed");
        return Ok(());
    }

    info!(path = %path, recursive, "removing");
    let change = store.remove(&path, recursive)?;
    store.record(&change)?;
    output::success(&format!("removed {}", output::key(path.as_str())));
    Ok(())
}
