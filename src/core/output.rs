//! Unified output formatting utilities for consistent CLI presentation.
//!
//! Standardized formatting for all commit-groups output: red errors, green
//! success marks, muted detail lines, and a newline of breathing room around
//! every message.

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Prints a muted detail line, indented under the preceding message
pub fn print_detail(message: &str) {
    println!("  {}", message.bright_black());
}
