//! Edit command.
//!
//! Decrypts into a private temp file, runs the editor on it, and stores
//! the result if it changed.

use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::NamedTempFile;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::cli::{output, Context};
use crate::core::constants;
use crate::core::domain::SecretPath;
use crate::error::{Result, ToolError, ValidationError};

/// Edit a secret, creating it if it does not exist.
pub fn execute(ctx: &Context, path: &str) -> Result<()> {
    let store = ctx.open()?;
    let path = SecretPath::parse(path)?;

    let existed = store.contains(&path)?;
    let original = if existed {
        Zeroizing::new(store.get(&path)?.content().to_string())
    } else {
        Zeroizing::new(String::new())
    };

    let mut file = tempfile::Builder::new()
        .prefix("cellar-")
        .suffix(".txt")
        .tempfile_in(scratch_dir())?;
    file.write_all(original.as_bytes())?;
    file.flush()?;

    let result = run_editor(file.path());
    let edited = Zeroizing::new(std::fs::read_to_string(file.path())?);
    shred(&mut file, edited.len().max(original.len()));
    result?;

    if *edited == *original {
        output::warn(&format!(
            "{} unchanged, nothing saved",
            output::key(path.as_str())
        ));
        return Ok(());
    }
    if edited.trim().is_empty() {
        return Err(ValidationError::EmptyValue(path.to_string()).into());
    }

    let verb = if existed { "Edit" } else { "Add" };
    let change = store
        .insert(&path, &edited)?
        .with_message(format!("{verb} password for {path} using editor."));
    store.record(&change)?;

    info!(path = %path, "edited secret");
    output::success(&format!("saved {}", output::key(path.as_str())));
    Ok(())
}

/// `$VISUAL`, then `$EDITOR`, then `vi`. May carry arguments.
fn editor() -> String {
    std::env::var("VISUAL")
        .ok()
        .filter(|e| !e.trim().is_empty())
        .or_else(|| std::env::var("EDITOR").ok().filter(|e| !e.trim().is_empty()))
        .unwrap_or_else(|| constants::DEFAULT_EDITOR.to_string())
}

fn run_editor(file: &Path) -> Result<()> {
    let editor = editor();
    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or(constants::DEFAULT_EDITOR);
    debug!(editor = %editor, "launching editor");

    let status = Command::new(program)
        .args(parts)
        .arg(file)
        .status()
        .map_err(|source| ToolError::Spawn {
            tool: program.to_string(),
            source,
        })?;
    if !status.success() {
        return Err(ToolError::Failed {
            tool: program.to_string(),
            status: status.to_string(),
            stderr: String::new(),
        }
        .into());
    }
    Ok(())
}

/// Prefer a memory-backed directory so plaintext never reaches disk.
fn scratch_dir() -> PathBuf {
    let shm = Path::new("/dev/shm");
    if shm.is_dir() {
        shm.to_path_buf()
    } else {
        std::env::temp_dir()
    }
}

/// Overwrite the temp file before it is removed. Best effort.
fn shred(file: &mut NamedTempFile, len: usize) {
    let zeros = vec![0u8; len];
    let _ = file.seek(SeekFrom::Start(0));
    let _ = file.write_all(&zeros);
    let _ = file.as_file().sync_all();
}
