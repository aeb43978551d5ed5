//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all lockey
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `scan`: Scan a source tree and write the properties template
//! - `init`: Initialize a lockey configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by scanning commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Output directory for the generated template (overrides config file)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    /// Project directory; config discovery starts here and relative
    /// source/output paths resolve against it
    #[arg(default_value = ".")]
    pub path: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan source files for localization keys and write i18n-template.properties
    Scan(ScanCommand),
    /// Initialize a new .lockeyrc.json configuration file
    Init,
}
