//! Terminal output helpers.
//!
//! Kept separate from the scan engine so lockey can be used as a library
//! without printing side effects.

use std::path::Path;

use colored::Colorize;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the one-line summary of a completed scan.
pub fn print_scan_success(files_scanned: usize, keys_found: usize, template_path: &Path) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Scanned {} {}, wrote {} {} to {}",
            files_scanned,
            if files_scanned == 1 { "file" } else { "files" },
            keys_found,
            if keys_found == 1 { "key" } else { "keys" },
            template_path.display()
        )
        .green()
    );
}

/// Warn about paths that were skipped because they could not be accessed.
pub fn print_skip_warning(skipped_count: usize, verbose: bool) {
    if skipped_count > 0 {
        eprintln!(
            "{} {} path(s) skipped due to access errors{}",
            "warning:".bold().yellow(),
            skipped_count,
            if verbose { "" } else { " (use -v for details)" }
        );
    }
}
