use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, ScanSummaryReport};
use crate::{
    cli::args::ScanCommand,
    config::load_config,
    scanner::{self, ScanOptions},
};

pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let project_dir = &cmd.path;
    let verbose = cmd.common.verbose;

    let loaded = load_config(project_dir)?;
    let config = loaded.config;

    let source_root = resolve_path(
        project_dir,
        cmd.common.source_root.as_deref(),
        &config.source_root,
    );
    let output_dir = resolve_path(
        project_dir,
        cmd.common.output_dir.as_deref(),
        &config.output_dir,
    );

    let options = ScanOptions::from_config(&config, verbose);
    let summary = scanner::scan(&source_root, &output_dir, &options)
        .with_context(|| format!("Scan of {} failed", source_root.display()))?;

    Ok(CommandResult {
        summary: CommandSummary::Scan(ScanSummaryReport {
            files_scanned: summary.files_scanned,
            keys_found: summary.keys_found,
            skipped_count: summary.skipped_count,
            template_path: summary.template_path,
            config_from_file: loaded.from_file,
        }),
    })
}

/// CLI override wins over the config value; relative paths resolve against
/// the project directory.
fn resolve_path(project_dir: &Path, cli_override: Option<&Path>, config_value: &str) -> PathBuf {
    let chosen = cli_override
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(config_value));

    if chosen.is_absolute() {
        chosen
    } else {
        project_dir.join(chosen)
    }
}
