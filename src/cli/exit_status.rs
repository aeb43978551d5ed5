use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, template written
/// - `Error` (2): Command failed due to an error (missing source directory,
///   config error, write failure)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command failed due to an error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
