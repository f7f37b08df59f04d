//! GPG cipher backend.
//!
//! Encrypts secrets using GnuPG (GNU Privacy Guard).
//!
//! ## Requirements
//!
//! - `gpg` CLI must be installed
//! - GPG keyring must hold the recipients' public keys
//! - Private key must be available (agent or unprotected) for decryption

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tracing::trace;
use zeroize::Zeroizing;

use super::Cipher;
use crate::core::domain::Recipients;
use crate::error::{CipherError, Result, ToolError};

/// GPG cipher backend using the gpg CLI.
#[derive(Debug, Clone)]
pub struct Gpg {
    program: String,
    homedir: Option<PathBuf>,
    extra_args: Vec<String>,
}

impl Default for Gpg {
    fn default() -> Self {
        Self::new("gpg")
    }
}

impl Gpg {
    /// Backend invoking `program` (e.g. `gpg` or `gpg2`).
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            homedir: None,
            extra_args: Vec::new(),
        }
    }

    /// Use an explicit keyring directory (`--homedir`).
    pub fn with_homedir(mut self, homedir: impl Into<PathBuf>) -> Self {
        self.homedir = Some(homedir.into());
        self
    }

    /// Extra options passed before the operation flags.
    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    /// Check that the gpg binary is on PATH.
    fn check_gpg(&self) -> Result<()> {
        which::which(&self.program).map_err(|_| ToolError::Missing(self.program.clone()))?;
        Ok(())
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        if let Some(home) = &self.homedir {
            cmd.arg("--homedir").arg(home);
        }
        cmd.args(&self.extra_args);
        cmd.args(["--batch", "--yes", "--quiet"]);
        cmd
    }

    /// Spawn `cmd`, feed it `input` on stdin and collect its output.
    ///
    /// stdin is written from a scoped thread so a large payload cannot
    /// deadlock against a full stdout pipe.
    fn run(&self, mut cmd: Command, input: &[u8]) -> Result<Output> {
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().map_err(|source| ToolError::Spawn {
            tool: self.program.clone(),
            source,
        })?;
        let mut stdin = child.stdin.take();

        let (written, output) = std::thread::scope(|s| {
            let writer = s.spawn(move || match stdin.as_mut() {
                Some(pipe) => pipe.write_all(input),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            (writer.join(), output)
        });

        let output = output?;
        match written {
            Ok(Ok(())) => {}
            // gpg may exit before reading all input; its status says why.
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
            Ok(Err(e)) => return Err(e.into()),
            Err(_) => {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "stdin writer thread panicked",
                )
                .into())
            }
        }
        Ok(output)
    }
}

impl Cipher for Gpg {
    fn name(&self) -> &'static str {
        "gpg"
    }

    fn extension(&self) -> &'static str {
        "gpg"
    }

    fn recipient_file(&self) -> &'static str {
        ".gpg-id"
    }

    fn encrypt(&self, plaintext: &[u8], recipients: &Recipients) -> Result<Vec<u8>> {
        trace!(
            recipients = recipients.len(),
            plaintext_len = plaintext.len(),
            "encrypting with GPG"
        );

        self.check_gpg()?;

        if recipients.is_empty() {
            return Err(CipherError::EncryptionFailed("no recipients provided".to_string()).into());
        }

        let mut cmd = self.command();
        cmd.args(["--encrypt", "--trust-model", "always", "--output", "-"]);
        for recipient in recipients {
            cmd.arg("--recipient").arg(recipient);
        }

        let output = self.run(cmd, plaintext)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CipherError::EncryptionFailed(format!(
                "gpg encrypt failed: {}",
                stderr.trim()
            ))
            .into());
        }

        trace!(ciphertext_len = output.stdout.len(), "encrypted with GPG");
        Ok(output.stdout)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        trace!(ciphertext_len = ciphertext.len(), "decrypting with GPG");

        self.check_gpg()?;

        let mut cmd = self.command();
        cmd.args(["--decrypt", "--output", "-"]);

        let output = self.run(cmd, ciphertext)?;
        let plaintext = Zeroizing::new(output.stdout);
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CipherError::DecryptionFailed(format!(
                "gpg decrypt failed: {}. Ensure you have the private key in your keyring.",
                stderr.trim()
            ))
            .into());
        }

        trace!(plaintext_len = plaintext.len(), "decrypted with GPG");
        Ok(plaintext)
    }

    fn textconv(&self) -> String {
        match &self.homedir {
            Some(home) => format!(
                "{} --homedir {} -d",
                shell_quote(&self.program),
                shell_quote(&home.display().to_string())
            ),
            None => format!("{} -d", shell_quote(&self.program)),
        }
    }
}

/// Quote a word for the POSIX shell git runs textconv commands through.
fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:@%+=,".contains(c));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', "'\\''"))
    }
}
