//! Human-readable printing of command results.

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary};
use crate::{config::CONFIG_FILE_NAME, reporter};

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Scan(summary) => {
            reporter::print_skip_warning(summary.skipped_count, verbose);
            reporter::print_scan_success(
                summary.files_scanned,
                summary.keys_found,
                &summary.template_path,
            );
            if verbose && !summary.config_from_file {
                eprintln!(
                    "{} No {} found, using default configuration",
                    "note:".bold(),
                    CONFIG_FILE_NAME
                );
            }
        }
        CommandSummary::Init(summary) => {
            if summary.created {
                println!(
                    "{} {}",
                    reporter::SUCCESS_MARK.green(),
                    format!("Created {}", CONFIG_FILE_NAME).green()
                );
            }
        }
    }
}
