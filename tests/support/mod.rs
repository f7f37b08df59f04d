//! Shared test harness for cellar integration tests.
//!
//! Every [`Test`] gets its own home directory, age identity, config file
//! and store location, so tests never see the user's real store or each
//! other's.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;
pub mod skip;

use std::fs;
use std::path::PathBuf;

use age::secrecy::ExposeSecret;
use tempfile::TempDir;

pub use assertions::*;
pub use fixtures::*;

/// An isolated cellar environment.
pub struct Test {
    /// Parent of the store; also the working directory of spawned commands.
    pub dir: TempDir,
    /// `HOME` for spawned commands.
    pub home: TempDir,
    /// Public key matching the generated identity.
    pub public_key: String,
}

impl Test {
    /// Environment with config and identity but no store.
    pub fn new() -> Self {
        Self::with_config("")
    }

    /// Like [`Test::new`], appending `extra` to the generated config.
    ///
    /// `extra` is inserted before the `[age]` table, so it may set
    /// top-level keys.
    pub fn with_config(extra: &str) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create home dir");

        let identity = age::x25519::Identity::generate();
        let public_key = identity.to_public().to_string();
        let identity_path = home.path().join("identity.txt");
        fs::write(
            &identity_path,
            format!("# test identity\n{}\n", identity.to_string().expose_secret()),
        )
        .expect("failed to write identity");

        let test = Self {
            dir,
            home,
            public_key,
        };
        test.write_config(extra);
        test
    }

    /// Environment with an initialized store.
    pub fn init() -> Self {
        let t = Self::new();
        let output = t.init_store();
        assert_success(&output);
        t
    }

    /// Environment with an initialized store holding `secrets`.
    pub fn with_secrets(secrets: &[(&str, &str)]) -> Self {
        let t = Self::init();
        for (path, value) in secrets {
            assert_success(&t.insert(path, value));
        }
        t
    }

    /// Store root used by spawned commands.
    pub fn store(&self) -> PathBuf {
        self.dir.path().join("store")
    }

    pub fn config_path(&self) -> PathBuf {
        self.home.path().join("config.toml")
    }

    pub fn identity_path(&self) -> PathBuf {
        self.home.path().join("identity.txt")
    }

    /// Path of the encrypted file for `name`.
    pub fn secret_file(&self, name: &str) -> PathBuf {
        self.store().join(format!("{name}.age"))
    }

    /// Rewrite config.toml, with `extra` as additional top-level settings.
    pub fn write_config(&self, extra: &str) {
        let config = format!(
            "cipher = \"age\"\n{extra}\n\n[age]\nidentity = \"{}\"\n",
            self.identity_path().display()
        );
        fs::write(self.config_path(), config).expect("failed to write config");
    }

    /// Extra identity for recipient tests; returns (public key, identity path).
    pub fn second_identity(&self) -> (String, PathBuf) {
        let identity = age::x25519::Identity::generate();
        let path = self.home.path().join("second.txt");
        fs::write(&path, format!("{}\n", identity.to_string().expose_secret()))
            .expect("failed to write identity");
        (identity.to_public().to_string(), path)
    }
}

impl Default for Test {
    fn default() -> Self {
        Self::new()
    }
}
