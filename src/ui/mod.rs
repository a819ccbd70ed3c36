//! User interface module - everything written to stderr.
//!
//! Stdout carries only the computed version so the output can be captured
//! by scripts.

pub mod formatter;

pub use formatter::{format_boundary_warning, format_error, format_explanation};

use crate::cli::BumpOutcome;

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Print the breakdown behind a computed version.
pub fn display_explanation(outcome: &BumpOutcome) {
    eprintln!("{}", format_explanation(outcome));
}
