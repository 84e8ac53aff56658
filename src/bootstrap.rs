//! Bootstrap lifecycle: platform gate, install, verify, export.
//!
//! The phases run in a fixed order and the first failure aborts the rest:
//! 1. host check - skip cleanly on anything that is not macOS
//! 2. `brew install libomp`
//! 3. `brew --prefix libomp` - discover the install prefix
//! 4. verify `lib/libomp.dylib` exists under the prefix
//! 5. append the build-flag exports to the env file

use crate::brew::{Brew, FORMULA};
use crate::context::{Context, ENV_FILE_VAR, TARGET_OS};
use crate::env_file;
use crate::output;
use anyhow::{Context as _, Result, bail};
use std::path::{Path, PathBuf};

/// Runtime artifact expected under the Homebrew prefix after install.
pub const OMP_DYLIB: &str = "lib/libomp.dylib";

/// What a bootstrap pass did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Host is not macOS; nothing was installed or written.
    Skipped { host_os: String },
    /// The plan was printed; nothing was executed or written.
    DryRun,
    /// libomp is installed and the exports were appended.
    Exported { prefix: PathBuf },
}

/// Run one bootstrap pass with the given configuration.
pub fn run(ctx: &Context) -> Result<Outcome> {
    if !ctx.is_target_os() {
        output::skip(&format!(
            "host is {} (not {}), skipping libomp bootstrap",
            ctx.host_os, TARGET_OS
        ));
        return Ok(Outcome::Skipped {
            host_os: ctx.host_os.clone(),
        });
    }

    if ctx.dry_run {
        return Ok(plan(ctx));
    }

    let brew = Brew::new(ctx.brew.clone());

    output::action(&format!("Installing {} via Homebrew", FORMULA));
    if ctx.verbose {
        output::detail(&format!("exec: {} install {}", brew.exe().display(), FORMULA));
    }
    brew.install(FORMULA)?;

    if ctx.verbose {
        output::detail(&format!("exec: {} --prefix {}", brew.exe().display(), FORMULA));
    }
    let prefix = brew.prefix(FORMULA)?;
    output::detail(&format!("prefix {}", prefix.display()));

    verify_dylib(&prefix)?;

    // Resolved only here: the skip path and a failed install or verify must
    // not depend on the env file being set.
    let env_path = match ctx.env_file.as_deref() {
        Some(path) => path,
        None => bail!("{} is not set; cannot export the build flags", ENV_FILE_VAR),
    };

    let exports = env_file::openmp_exports(&prefix, &prior_dyld());
    env_file::append(env_path, &exports)
        .with_context(|| format!("failed to export build flags to {}", env_path.display()))?;
    for line in &exports {
        output::detail(&line.to_string());
    }

    output::success(&format!("{} ready at {}", FORMULA, prefix.display()));
    Ok(Outcome::Exported { prefix })
}

/// Confirm the runtime dylib exists where Homebrew says the formula lives.
///
/// Absence means Homebrew's reported state and the filesystem disagree.
fn verify_dylib(prefix: &Path) -> Result<()> {
    let dylib = prefix.join(OMP_DYLIB);
    if !dylib.is_file() {
        bail!(
            "Homebrew reported prefix {} but {} does not exist",
            prefix.display(),
            dylib.display()
        );
    }
    Ok(())
}

/// Current `DYLD_LIBRARY_PATH`, empty when unset.
fn prior_dyld() -> String {
    std::env::var("DYLD_LIBRARY_PATH").unwrap_or_default()
}

/// Print the commands a real pass would run, without executing anything.
fn plan(ctx: &Context) -> Outcome {
    output::action(&format!("Dry run: {} bootstrap plan", FORMULA));
    output::detail(&format!("{} install {}", ctx.brew.display(), FORMULA));
    output::detail(&format!("{} --prefix {}", ctx.brew.display(), FORMULA));
    output::detail(&format!("check <prefix>/{}", OMP_DYLIB));
    match &ctx.env_file {
        Some(path) => output::detail(&format!(
            "append DYLD_LIBRARY_PATH, LDFLAGS, CPPFLAGS to {}",
            path.display()
        )),
        None => output::detail(&format!(
            "append DYLD_LIBRARY_PATH, LDFLAGS, CPPFLAGS ({} currently unset)",
            ENV_FILE_VAR
        )),
    }
    output::info("dry run: nothing executed, nothing written");
    Outcome::DryRun
}
