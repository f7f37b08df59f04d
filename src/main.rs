//! Cellar - a password store of individually encrypted files.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cellar::cli::output;
use cellar::cli::{execute, Cli};
use cellar::error::{ConfigError, Error, StoreError, ToolError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("CELLAR_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("cellar=debug")
        } else {
            EnvFilter::new("cellar=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.store) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Config(ConfigError::NotInitialized(_) | ConfigError::NoRecipients { .. }) => {
                Some("run: cellar init <recipient-id>...")
            }
            Error::Config(ConfigError::MissingIdentity) => {
                Some("set [age] identity in config.toml, or use cipher = \"gpg\"")
            }
            Error::Store(StoreError::MissingField { .. }) => {
                Some("supported fields: password, username, hostname")
            }
            Error::Tool(ToolError::Missing(tool)) if tool.contains("gpg") => {
                Some("install GnuPG, or use cipher = \"age\" in config.toml")
            }
            Error::Tool(ToolError::Disabled(_)) => Some("set git = true in config.toml"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
