//! List and find commands.

use crate::cli::{tree, Context};
use crate::core::domain::SecretPath;
use crate::core::store::Store;
use crate::error::Result;

const TITLE: &str = "Password Store";

/// List the whole store or one folder.
pub fn list(ctx: &Context, subfolder: Option<&str>, json: bool) -> Result<()> {
    let store = ctx.open()?;
    let subfolder = subfolder.map(SecretPath::parse).transpose()?;
    print_tree(&store, subfolder.as_ref(), json)
}

/// Print secrets as a tree, or as a JSON array of names.
pub(super) fn print_tree(store: &Store, subfolder: Option<&SecretPath>, json: bool) -> Result<()> {
    let (title, secrets, skip) = match subfolder {
        Some(sub) => (
            sub.to_string(),
            store.list_under(sub)?.collect::<Result<Vec<_>>>()?,
            sub.as_str().split('/').count(),
        ),
        None => (
            TITLE.to_string(),
            store.list().collect::<Result<Vec<_>>>()?,
            0,
        ),
    };

    if json {
        let names: Vec<&str> = secrets.iter().map(SecretPath::as_str).collect();
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else {
        print!("{}", tree::render(&title, &secrets, skip));
    }
    Ok(())
}

/// Show secrets whose names contain any of `terms`.
pub fn find(ctx: &Context, terms: &[String]) -> Result<()> {
    let store = ctx.open()?;
    let found = store.search(terms)?;
    let title = format!("Search Terms: {}", terms.join(","));
    print!("{}", tree::render(&title, &found, 0));
    Ok(())
}
