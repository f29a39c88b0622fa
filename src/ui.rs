//! Colored terminal output helpers for the sundry CLI.

use colored::Colorize;

/// Print an error to stderr with a red prefix.
pub fn error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}

/// Print a confirmation line with a green check mark.
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Dimmed placeholder for an absent result.
pub fn none_placeholder() -> String {
    "(none)".dimmed().to_string()
}
