//! Homebrew OpenMP bootstrap for macOS CI
//!
//! Later pipeline steps that compile OpenMP-enabled extensions need the
//! `libomp` runtime and the flags to find it. On a macOS host this crate
//! installs the `libomp` formula through Homebrew, asks Homebrew where it
//! landed, confirms `lib/libomp.dylib` exists under that prefix, and appends
//! the build flags to the CI environment file named by `GITHUB_ENV`. On any
//! other host it prints a notice and does nothing.
//!
//! # Example
//!
//! ```no_run
//! use omp_bootstrap::{bootstrap, Context, Outcome};
//!
//! fn main() -> anyhow::Result<()> {
//!     match bootstrap::run(&Context::default())? {
//!         Outcome::Exported { prefix } => println!("libomp at {}", prefix.display()),
//!         Outcome::Skipped { host_os } => println!("nothing to do on {host_os}"),
//!         Outcome::DryRun => {}
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Exported variables
//!
//! Appended to the env file as `KEY=VALUE` lines, in this order:
//!
//! - `DYLD_LIBRARY_PATH` - `<prefix>/lib:` followed by the prior value
//! - `LDFLAGS` - `-L<prefix>/lib`
//! - `CPPFLAGS` - `-I<prefix>/include`
//!
//! The file is append-only: a second run adds the lines again. Env files give
//! the last occurrence of a key the final say, so repeats are harmless and
//! downstream steps may rely on that.
//!
//! # Environment
//!
//! - `GITHUB_ENV` - destination file for the exports (CI-provided)
//! - `OMP_BOOTSTRAP_BREW` - overrides the `brew` executable

pub mod bootstrap;
pub mod brew;
pub mod context;
pub mod env_file;
pub mod output;

pub use bootstrap::{run, Outcome};
pub use context::Context;
