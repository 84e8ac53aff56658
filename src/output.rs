//! Colored status output.
//!
//! Uses owo-colors for terminal colors. Homebrew's own output is not wrapped
//! or filtered; these helpers only frame the steps around it.

use owo_colors::OwoColorize;

/// Print an action header (blue, bold)
/// Example: "==> Installing libomp"
pub fn action(message: &str) {
    println!("{} {}", "==>".blue().bold(), message.bold());
}

/// Print a detail line (dimmed prefix)
/// Example: "     prefix /opt/homebrew/opt/libomp"
pub fn detail(message: &str) {
    println!("     {}", message.dimmed());
}

/// Print an info message (cyan)
pub fn info(message: &str) {
    println!("{} {}", "::".cyan(), message);
}

/// Print a success message (green)
/// Example: "==> libomp ready at /opt/homebrew/opt/libomp"
pub fn success(message: &str) {
    println!("{} {}", "==>".green().bold(), message.green());
}

/// Print a skip message (dimmed)
/// Example: "==> host is linux, skipping"
pub fn skip(message: &str) {
    println!("{} {}", "==>".dimmed(), message.dimmed());
}
