//! Run configuration for a bootstrap pass.

use std::path::PathBuf;

/// CI-provided environment file that receives the exported variables.
pub const ENV_FILE_VAR: &str = "GITHUB_ENV";

/// Overrides the Homebrew executable: `OMP_BOOTSTRAP_BREW`
pub const BREW_VAR: &str = "OMP_BOOTSTRAP_BREW";

/// The only host this tool provisions.
pub const TARGET_OS: &str = "macos";

/// Configuration for one bootstrap pass.
///
/// `Default` reads everything from the environment; builder methods override
/// individual fields.
///
/// # Example
/// ```
/// use omp_bootstrap::Context;
///
/// let ctx = Context::default().host_os("macos").dry_run(true);
/// assert!(ctx.is_target_os());
/// ```
#[derive(Debug, Clone)]
pub struct Context {
    /// Host operating system identifier, in `std::env::consts::OS` form.
    pub host_os: String,
    /// Homebrew executable to invoke (default: `brew` from PATH).
    pub brew: PathBuf,
    /// Destination env file; `None` when the CI did not provide one.
    pub env_file: Option<PathBuf>,
    /// Print the planned commands without executing them.
    pub dry_run: bool,
    /// Print commands as they execute.
    pub verbose: bool,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            host_os: std::env::consts::OS.to_string(),
            brew: std::env::var_os(BREW_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("brew")),
            env_file: std::env::var_os(ENV_FILE_VAR).map(PathBuf::from),
            dry_run: false,
            verbose: false,
        }
    }
}

impl Context {
    /// Set the host operating system identifier.
    pub fn host_os(mut self, os: impl Into<String>) -> Self {
        self.host_os = os.into();
        self
    }

    /// Set the Homebrew executable.
    pub fn brew(mut self, exe: impl Into<PathBuf>) -> Self {
        self.brew = exe.into();
        self
    }

    /// Set the destination env file.
    pub fn env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Set dry run mode.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set verbose mode.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Whether the host is the one supported platform.
    pub fn is_target_os(&self) -> bool {
        self.host_os == TARGET_OS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_host_os_matches_runtime() {
        let ctx = Context::default();
        assert_eq!(ctx.host_os, std::env::consts::OS);
    }

    #[test]
    fn test_default_flags_off() {
        let ctx = Context::default();
        assert!(!ctx.dry_run);
        assert!(!ctx.verbose);
    }

    #[test]
    fn test_builder_overrides() {
        let ctx = Context::default()
            .host_os("macos")
            .brew("/opt/homebrew/bin/brew")
            .env_file("/tmp/github.env")
            .dry_run(true)
            .verbose(true);

        assert_eq!(ctx.host_os, "macos");
        assert_eq!(ctx.brew, PathBuf::from("/opt/homebrew/bin/brew"));
        assert_eq!(ctx.env_file, Some(PathBuf::from("/tmp/github.env")));
        assert!(ctx.dry_run);
        assert!(ctx.verbose);
    }

    #[test]
    fn test_is_target_os() {
        assert!(Context::default().host_os("macos").is_target_os());
        assert!(!Context::default().host_os("linux").is_target_os());
        assert!(!Context::default().host_os("windows").is_target_os());
        // Comparison is exact, not case-folded
        assert!(!Context::default().host_os("Darwin").is_target_os());
    }
}
