//! Reencrypt command.
//!
//! Re-keys secrets after their recipient files changed.

use tracing::info;

use crate::cli::{output, Context};
use crate::core::domain::SecretPath;
use crate::error::Result;

/// Re-encrypt a secret, a folder, or the whole store.
pub fn execute(ctx: &Context, path: Option<&str>) -> Result<()> {
    let store = ctx.open()?;
    let path = path.map(SecretPath::parse).transpose()?;

    let change = store.reencrypt(path.as_ref())?;
    let count = change.paths().len();
    store.record(&change)?;

    info!(count, "re-encrypted");
    output::success(&format!("re-encrypted {} secrets", count));
    Ok(())
}
