//! omp-bootstrap CLI - Homebrew OpenMP bootstrap for macOS CI
//!
//! Running with no arguments performs the whole pass: install the libomp
//! formula, discover its prefix, verify the runtime dylib, and append the
//! build-flag exports to the file named by GITHUB_ENV. On a non-macOS host
//! it prints a notice and exits 0 without touching anything.

use anyhow::Result;
use clap::Parser;
use omp_bootstrap::{Context, bootstrap};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "omp-bootstrap")]
#[command(about = "Install the Homebrew OpenMP runtime and export build flags for CI")]
#[command(version)]
struct Cli {
    /// Environment file receiving the exported variables
    #[arg(long, env = "GITHUB_ENV", value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Homebrew executable to invoke
    #[arg(long, env = "OMP_BOOTSTRAP_BREW", value_name = "PATH")]
    brew: Option<PathBuf>,

    /// Print the planned commands without executing them
    #[arg(long)]
    dry_run: bool,

    /// Print commands as they execute
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut ctx = Context::default().dry_run(cli.dry_run).verbose(cli.verbose);
    if let Some(path) = cli.env_file {
        ctx = ctx.env_file(path);
    }
    if let Some(brew) = cli.brew {
        ctx = ctx.brew(brew);
    }

    bootstrap::run(&ctx)?;
    Ok(())
}
