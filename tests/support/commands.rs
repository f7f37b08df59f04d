//! Command builders for the cellar binary.

use std::process::Output;

use assert_cmd::Command;

use super::Test;

impl Test {
    /// A `cellar` command wired to this environment.
    ///
    /// Git identity is fixed so commits work on machines without a global
    /// git config; editor variables are cleared.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("cellar").expect("failed to find binary");
        cmd.current_dir(self.dir.path())
            .env("HOME", self.home.path())
            .env("USERPROFILE", self.home.path())
            .env("CELLAR_CONFIG", self.config_path())
            .env("PASSWORD_STORE_DIR", self.store())
            .env("NO_COLOR", "1")
            .env("GIT_AUTHOR_NAME", "Cellar Test")
            .env("GIT_AUTHOR_EMAIL", "test@example.com")
            .env("GIT_COMMITTER_NAME", "Cellar Test")
            .env("GIT_COMMITTER_EMAIL", "test@example.com")
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env_remove("CELLAR_LOG")
            .env_remove("VISUAL")
            .env_remove("EDITOR");
        cmd
    }

    /// Run `cellar` with `args`.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd().args(args).output().expect("failed to run command")
    }

    /// Run `cellar` with `args` and `stdin`.
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Output {
        self.cmd()
            .args(args)
            .write_stdin(stdin)
            .output()
            .expect("failed to run command")
    }

    /// `cellar init <own public key>`.
    pub fn init_store(&self) -> Output {
        self.run(&["init", &self.public_key])
    }

    /// `cellar insert <path>` with the value on stdin.
    pub fn insert(&self, path: &str, value: &str) -> Output {
        self.run_with_stdin(&["insert", path], &format!("{value}\n"))
    }

    /// `cellar insert --force <path>`.
    pub fn insert_force(&self, path: &str, value: &str) -> Output {
        self.run_with_stdin(&["insert", "--force", path], &format!("{value}\n"))
    }

    /// `cellar insert --multiline <path>`.
    pub fn insert_multiline(&self, path: &str, content: &str) -> Output {
        self.run_with_stdin(&["insert", "--multiline", path], content)
    }

    pub fn show(&self, path: &str) -> Output {
        self.run(&["show", path])
    }

    pub fn show_field(&self, path: &str, field: &str) -> Output {
        self.run(&["show", path, "--field", field])
    }

    pub fn ls(&self) -> Output {
        self.run(&["ls"])
    }

    pub fn rm(&self, path: &str) -> Output {
        self.run(&["rm", path])
    }

    pub fn mv(&self, old: &str, new: &str) -> Output {
        self.run(&["mv", old, new])
    }

    pub fn cp(&self, old: &str, new: &str) -> Output {
        self.run(&["cp", old, new])
    }

    pub fn generate(&self, path: &str, length: usize) -> Output {
        self.run(&["generate", path, &length.to_string()])
    }

    pub fn git(&self, args: &[&str]) -> Output {
        let mut full = vec!["git"];
        full.extend_from_slice(args);
        self.run(&full)
    }

    /// Subjects of the store's commits, newest first.
    pub fn git_log(&self) -> Vec<String> {
        let output = std::process::Command::new("git")
            .args(["log", "--format=%s"])
            .current_dir(self.store())
            .output()
            .expect("failed to run git log");
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect()
    }
}
