//! Export lines and the append-only env file writer.
//!
//! CI env files take one raw `KEY=VALUE` assignment per line; when a key
//! repeats, the last occurrence wins. Writes here are strictly append-only
//! and never deduplicate, so repeated runs stack lines instead of editing
//! earlier ones.

use anyhow::{Context as _, Result};
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// One `KEY=VALUE` assignment destined for the env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvLine {
    pub key: String,
    pub value: String,
}

impl EnvLine {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for EnvLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Build the three OpenMP exports for a Homebrew install prefix.
///
/// `prior_dyld` is the current value of `DYLD_LIBRARY_PATH`; it stays at the
/// tail of the new search path. An empty prior value leaves a trailing colon,
/// the same thing a shell writes when expanding an unset variable.
pub fn openmp_exports(prefix: &Path, prior_dyld: &str) -> Vec<EnvLine> {
    let lib = prefix.join("lib");
    let include = prefix.join("include");

    vec![
        EnvLine::new(
            "DYLD_LIBRARY_PATH",
            format!("{}:{}", lib.display(), prior_dyld),
        ),
        EnvLine::new("LDFLAGS", format!("-L{}", lib.display())),
        EnvLine::new("CPPFLAGS", format!("-I{}", include.display())),
    ]
}

/// Append lines to the env file, creating it if missing.
///
/// Existing content is never read or rewritten.
pub fn append(path: &Path, lines: &[EnvLine]) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open env file: {}", path.display()))?;

    for line in lines {
        writeln!(file, "{line}")
            .with_context(|| format!("failed to append to env file: {}", path.display()))?;
    }

    Ok(())
}
