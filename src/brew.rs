//! Homebrew invocation: formula install and prefix discovery.

use anyhow::{Context as _, Result, bail};
use std::path::{Path, PathBuf};
use std::process::Command;

/// The one formula this tool installs.
pub const FORMULA: &str = "libomp";

/// Homebrew client bound to a single executable path.
#[derive(Debug, Clone)]
pub struct Brew {
    exe: PathBuf,
}

impl Brew {
    /// Create a client for the given `brew` executable.
    pub fn new(exe: impl Into<PathBuf>) -> Self {
        Self { exe: exe.into() }
    }

    /// The executable this client invokes.
    pub fn exe(&self) -> &Path {
        &self.exe
    }

    /// Run `brew install <formula>`.
    ///
    /// The child inherits stdio, so Homebrew's own progress and diagnostics
    /// reach the CI log unmodified. Fails on spawn error or non-zero exit.
    pub fn install(&self, formula: &str) -> Result<()> {
        let status = Command::new(&self.exe)
            .args(["install", formula])
            .status()
            .with_context(|| {
                format!("failed to start: {} install {}", self.exe.display(), formula)
            })?;

        if !status.success() {
            bail!(
                "command failed with exit code: {:?}\n  command: {} install {}",
                status.code(),
                self.exe.display(),
                formula
            );
        }

        Ok(())
    }

    /// Run `brew --prefix <formula>` and return the reported install prefix.
    ///
    /// Stdout is captured and trimmed; an empty result is an error, as is a
    /// non-zero exit (stderr is folded into the error message).
    pub fn prefix(&self, formula: &str) -> Result<PathBuf> {
        let output = Command::new(&self.exe)
            .args(["--prefix", formula])
            .output()
            .with_context(|| {
                format!("failed to start: {} --prefix {}", self.exe.display(), formula)
            })?;

        if !output.status.success() {
            bail!(
                "command failed with exit code: {:?}\n  command: {} --prefix {}\n  stderr: {}",
                output.status.code(),
                self.exe.display(),
                formula,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let prefix = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if prefix.is_empty() {
            bail!(
                "{} --prefix {} printed no path",
                self.exe.display(),
                formula
            );
        }

        Ok(PathBuf::from(prefix))
    }
}
