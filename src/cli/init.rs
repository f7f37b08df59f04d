//! Init command.
//!
//! Creates (or clones) a store, or sets the recipients of a subfolder and
//! re-encrypts what is already in it.

use tracing::info;

use crate::cli::{output, Context};
use crate::core::cipher::{self, Cipher, CipherBackend};
use crate::core::domain::{Recipients, SecretPath};
use crate::core::store::Store;
use crate::error::Result;

/// Initialize a store or a subfolder.
pub fn execute(
    ctx: &Context,
    recipients: &[String],
    subfolder: Option<&str>,
    clone: Option<&str>,
) -> Result<()> {
    let recipients = Recipients::new(recipients);
    let options = ctx.options()?;
    if let CipherBackend::Age(_) = options.cipher {
        for id in &recipients {
            cipher::parse_recipient(id)?;
        }
    }

    if let Some(sub) = subfolder {
        let sub = SecretPath::parse(sub)?;
        let store = Store::open(ctx.root(), options)?;
        let mut change = store.set_recipients(Some(&sub), &recipients)?;
        if store.list_under(&sub)?.next().is_some() {
            change.absorb(store.reencrypt(Some(&sub))?);
        }
        store.record(&change)?;

        output::success(&format!(
            "recipients for {} set to {}",
            output::key(sub.as_str()),
            recipients
        ));
        return Ok(());
    }

    let existing = ctx.root().join(options.cipher.recipient_file());
    let existed = existing.is_file();
    let store = Store::initialize(&recipients, ctx.root(), clone, options)?;
    info!(root = %store.root().display(), "initialized store");

    if clone.is_some() {
        output::success(&format!("cloned store into {}", store.root().display()));
    } else if existed {
        output::warn(&format!(
            "{} already exists; recipients left unchanged",
            existing.display()
        ));
        output::hint("run: cellar init -p <subfolder> <ids> to re-key part of the store");
    } else {
        output::success(&format!(
            "initialized password store at {}",
            store.root().display()
        ));
        output::kv("recipients:", &recipients);
    }
    output::kv("cipher:", store.cipher().name());
    Ok(())
}
