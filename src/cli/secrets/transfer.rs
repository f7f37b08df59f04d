//! Move and copy commands.

use tracing::info;

use crate::cli::{output, prompt, Context};
use crate::core::domain::{Change, SecretPath};
use crate::core::store::Store;
use crate::error::{Error, Result, StoreError};

/// Move or rename a secret or folder.
pub fn mv(ctx: &Context, old: &str, new: &str, force: bool, reencrypt: bool) -> Result<()> {
    transfer(ctx, old, new, force, reencrypt, true)
}

/// Copy a secret or folder.
pub fn cp(ctx: &Context, old: &str, new: &str, force: bool, reencrypt: bool) -> Result<()> {
    transfer(ctx, old, new, force, reencrypt, false)
}

fn transfer(
    ctx: &Context,
    old: &str,
    new: &str,
    force: bool,
    reencrypt: bool,
    rename: bool,
) -> Result<()> {
    let store = ctx.open()?;
    let old = SecretPath::parse(old)?;
    let new = SecretPath::parse(new)?;

    let target = if store.is_dir(&new)? {
        new.join(old.name())?
    } else {
        new.clone()
    };

    let run = |store: &Store, force: bool| -> Result<Change> {
        if rename {
            store.rename(&old, &new, force)
        } else {
            store.copy(&old, &new, force)
        }
    };
    let mut change = match run(&store, force) {
        Err(Error::Store(StoreError::AlreadyExists(_))) if prompt::interactive() => {
            prompt::confirm_overwrite(target.as_str())?;
            run(&store, true)?
        }
        other => other?,
    };

    if reencrypt {
        change.absorb(store.reencrypt(Some(&target))?);
    }
    store.record(&change)?;

    info!(from = %old, to = %target, rename, "transferred");
    output::success(&format!(
        "{} {} to {}",
        if rename { "moved" } else { "copied" },
        output::key(old.as_str()),
        output::key(target.as_str())
    ));
    Ok(())
}
