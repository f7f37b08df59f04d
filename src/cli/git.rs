//! Git command.
//!
//! Runs git against the store's repository. `git init` additionally
//! configures diffs of decrypted content and commits what is there.

use crate::cli::{output, Context};
use crate::error::Result;

/// Run git in the store.
pub fn execute(ctx: &Context, args: &[String]) -> Result<()> {
    let store = ctx.open()?;

    if args.first().map(String::as_str) == Some("init") {
        let change = store.enable_version_control()?;
        store.record(&change)?;
        output::success(&format!(
            "initialized git repository at {}",
            store.repository().git_dir.display()
        ));
        return Ok(());
    }

    let status = store.run_vcs(args)?;
    if !status.success() {
        std::process::exit(status.code().unwrap_or(1));
    }
    Ok(())
}
