//! Output formatting for CLI commands.
//!
//! Separate from core logic so glossa can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::data::FormControlBinding;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a green success line to stdout.
pub fn print_success(message: &str) {
    print_success_to(message, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
}

/// Print a red failure line to stderr.
pub fn print_failure(message: &str) {
    let _ = writeln!(
        io::stderr().lock(),
        "{} {}",
        FAILURE_MARK.red(),
        message.red()
    );
}

/// Print a warning to stderr.
pub fn print_warning(message: &str) {
    let _ = writeln!(io::stderr().lock(), "{} {}", "warning:".bold().yellow(), message);
}

/// List bindings an ignore pass would rewrite.
pub fn print_ignore_preview_to<W: Write>(pending: &[FormControlBinding], writer: &mut W) {
    for binding in pending {
        let _ = writeln!(
            writer,
            "{} {} {}",
            binding.owner.bold(),
            binding.control_path,
            format!("({} -> DoNotTranslate)", binding.id_text).dimmed()
        );
    }
}
