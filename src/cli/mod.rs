//! Command-line interface.

pub mod completions;
pub mod context;
pub mod git;
pub mod init;
pub mod output;
pub mod prompt;
pub mod reencrypt;
pub mod secrets;
pub mod tree;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use context::Context;

/// Cellar - a password store of individually encrypted files.
#[derive(Parser)]
#[command(
    name = "cellar",
    about = "A password store of individually encrypted files",
    version
)]
pub struct Cli {
    /// Password store directory
    #[arg(long, global = true, env = "PASSWORD_STORE_DIR", value_name = "DIR")]
    pub store: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create a store, or set the recipients of a subfolder
    Init {
        /// Recipient ids (gpg key ids or age public keys)
        recipients: Vec<String>,
        /// Set recipients for this subfolder only and re-encrypt it
        #[arg(short = 'p', long = "path", value_name = "SUBFOLDER")]
        subfolder: Option<String>,
        /// Clone an existing store from a git URL
        #[arg(long, value_name = "URL", conflicts_with = "subfolder")]
        clone: Option<String>,
    },

    /// List secrets as a tree
    #[command(visible_alias = "list")]
    Ls {
        /// Only list this subfolder
        subfolder: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find secrets whose names contain any of the terms
    #[command(visible_alias = "search")]
    Find {
        #[arg(required = true)]
        terms: Vec<String>,
    },

    /// Search the decrypted contents of every secret
    Grep {
        /// Regular expression
        pattern: String,
        /// Match case-insensitively
        #[arg(short, long)]
        ignore_case: bool,
    },

    /// Decrypt and print a secret
    Show {
        /// Secret name; lists the store when omitted
        path: Option<String>,
        /// Print only this field: password, username or hostname
        #[arg(long, value_name = "FIELD")]
        field: Option<String>,
    },

    /// Insert a new secret
    #[command(visible_alias = "add")]
    Insert {
        path: String,
        /// Read lines until end of input
        #[arg(short, long, conflicts_with = "echo")]
        multiline: bool,
        /// Echo the password while typing
        #[arg(short, long)]
        echo: bool,
        /// Overwrite without asking
        #[arg(short, long)]
        force: bool,
    },

    /// Edit a secret with $VISUAL or $EDITOR
    Edit { path: String },

    /// Generate a new password
    Generate {
        path: String,
        /// Password length
        length: Option<usize>,
        /// Leave out symbols
        #[arg(short = 'n', long)]
        no_symbols: bool,
        /// Leave out digits
        #[arg(long)]
        no_digits: bool,
        /// Replace only the first line of an existing secret
        #[arg(short, long, conflicts_with = "force")]
        in_place: bool,
        /// Overwrite without asking
        #[arg(short, long)]
        force: bool,
    },

    /// Remove a secret or folder
    #[command(visible_aliases = ["remove", "delete"])]
    Rm {
        path: String,
        /// Remove folders and their contents
        #[arg(short, long)]
        recursive: bool,
        /// Do not ask for confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Move or rename a secret or folder
    #[command(visible_alias = "rename")]
    Mv {
        old: String,
        new: String,
        /// Overwrite the destination
        #[arg(short, long)]
        force: bool,
        /// Re-encrypt for the destination's recipients
        #[arg(long)]
        reencrypt: bool,
    },

    /// Copy a secret or folder
    #[command(visible_alias = "copy")]
    Cp {
        old: String,
        new: String,
        /// Overwrite the destination
        #[arg(short, long)]
        force: bool,
        /// Re-encrypt for the destination's recipients
        #[arg(long)]
        reencrypt: bool,
    },

    /// Re-encrypt secrets for their current recipients
    Reencrypt {
        /// Secret or folder; the whole store when omitted
        path: Option<String>,
    },

    /// Run git inside the store; `git init` also sets up diffs
    Git {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, store: Option<PathBuf>) -> crate::error::Result<()> {
    use Command::*;

    if let Completions { shell } = &command {
        return completions::execute(shell.clone());
    }

    let ctx = Context::load(store)?;
    match command {
        Init {
            recipients,
            subfolder,
            clone,
        } => init::execute(&ctx, &recipients, subfolder.as_deref(), clone.as_deref()),
        Ls { subfolder, json } => secrets::list(&ctx, subfolder.as_deref(), json),
        Find { terms } => secrets::find(&ctx, &terms),
        Grep {
            pattern,
            ignore_case,
        } => secrets::grep(&ctx, &pattern, ignore_case),
        Show { path, field } => match path {
            Some(path) => secrets::show(&ctx, &path, field.as_deref()),
            None => secrets::list(&ctx, None, false),
        },
        Insert {
            path,
            multiline,
            echo,
            force,
        } => secrets::insert(&ctx, &path, multiline, echo, force),
        Edit { path } => secrets::edit(&ctx, &path),
        Generate {
            path,
            length,
            no_symbols,
            no_digits,
            in_place,
            force,
        } => secrets::generate(
            &ctx,
            &path,
            secrets::GenerateArgs {
                length,
                symbols: !no_symbols,
                digits: !no_digits,
                in_place,
                force,
            },
        ),
        Rm {
            path,
            recursive,
            force,
        } => secrets::rm(&ctx, &path, recursive, force),
        Mv {
            old,
            new,
            force,
            reencrypt,
        } => secrets::mv(&ctx, &old, &new, force, reencrypt),
        Cp {
            old,
            new,
            force,
            reencrypt,
        } => secrets::cp(&ctx, &old, &new, force, reencrypt),
        Reencrypt { path } => reencrypt::execute(&ctx, path.as_deref()),
        Git { args } => git::execute(&ctx, &args),
        Completions { .. } => Ok(()),
    }
}
