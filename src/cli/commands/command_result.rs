use std::path::PathBuf;

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanSummaryReport),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ScanSummaryReport {
    pub files_scanned: usize,
    pub keys_found: usize,
    pub skipped_count: usize,
    pub template_path: PathBuf,
    /// True when configuration came from a discovered config file rather
    /// than built-in defaults.
    pub config_from_file: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a lockey command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}
