//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print the help listing to stdout
pub fn listing(msg: &(impl std::fmt::Display + ?Sized)) {
    print!("{}", msg);
}

/// Print the help listing to stderr (usage-error path)
pub fn listing_stderr(msg: &(impl std::fmt::Display + ?Sized)) {
    eprint!("{}", msg);
}
