//! Generate command.

use tracing::info;

use crate::cli::{output, prompt, Context};
use crate::core::domain::SecretPath;
use crate::error::Result;

/// Flags for `generate`.
#[derive(Debug, Clone, Copy)]
pub struct GenerateArgs {
    pub length: Option<usize>,
    pub symbols: bool,
    pub digits: bool,
    pub in_place: bool,
    pub force: bool,
}

/// Generate a password, store it, and print it.
pub fn execute(ctx: &Context, path: &str, args: GenerateArgs) -> Result<()> {
    let store = ctx.open()?;
    let path = SecretPath::parse(path)?;

    let mut policy = ctx.config.policy();
    if let Some(length) = args.length {
        policy = policy.length(length);
    }
    if !args.symbols {
        policy = policy.with_symbols(false);
    }
    if !args.digits {
        policy = policy.with_digits(false);
    }

    if !args.in_place && !args.force && store.contains(&path)? {
        prompt::confirm_overwrite(path.as_str())?;
    }

    info!(path = %path, length = policy.length, in_place = args.in_place, "generating");
    let (password, change) = store.generate(&path, &policy, args.in_place)?;
    store.record(&change)?;

    output::success(&format!(
        "generated password for {}",
        output::key(path.as_str())
    ));
    output::data(&password);
    Ok(())
}
