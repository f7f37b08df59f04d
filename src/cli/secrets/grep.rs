//! Grep command - search decrypted contents.

use regex::{Captures, Regex, RegexBuilder};
use zeroize::Zeroizing;

use crate::cli::{output, Context};
use crate::error::{Result, ValidationError};

/// Print every line matching `pattern`, grouped by secret.
pub fn execute(ctx: &Context, pattern: &str, ignore_case: bool) -> Result<()> {
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(ignore_case)
        .build()
        .map_err(|e| ValidationError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

    let store = ctx.open()?;
    for found in store.grep(&regex)? {
        println!("{}:", output::folder(found.path.as_str()));
        for line in &found.lines {
            println!("{}", highlight(&regex, line).as_str());
        }
    }
    Ok(())
}

fn highlight(regex: &Regex, line: &str) -> Zeroizing<String> {
    Zeroizing::new(
        regex
            .replace_all(line, |caps: &Captures| output::highlight(&caps[0]))
            .into_owned(),
    )
}
