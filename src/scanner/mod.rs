//! Core scan engine.
//!
//! A scan run is a single-pass batch operation: enumerate candidate files
//! under the source root, extract localization keys from each file's raw
//! text, merge everything into one deduplicated key set, and write the
//! sorted `key=` template. File reading and extraction are parallelized with
//! rayon; per-worker results are merged into the single key set at the end,
//! so the final ordering never depends on file-visitation order.

mod error;
mod extract;
mod file_scanner;
mod patterns;
mod writer;

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use colored::Colorize;
use rayon::prelude::*;

use extract::extract_keys;
use file_scanner::scan_files;
use patterns::KeyPatterns;
use writer::write_template;

pub use error::ScanError;
pub use writer::TEMPLATE_FILE_NAME;

use crate::config::Config;

/// Knobs for one scan run, derived from configuration.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub extensions: Vec<String>,
    pub ignores: Vec<String>,
    pub lookup_methods: Vec<String>,
    pub tag_names: Vec<String>,
    pub key_attributes: Vec<String>,
    pub verbose: bool,
}

impl ScanOptions {
    pub fn from_config(config: &Config, verbose: bool) -> Self {
        Self {
            extensions: config.extensions.clone(),
            ignores: config.ignores.clone(),
            lookup_methods: config.lookup_methods.clone(),
            tag_names: config.tag_names.clone(),
            key_attributes: config.key_attributes.clone(),
            verbose,
        }
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::from_config(&Config::default(), false)
    }
}

/// What one completed scan run produced.
#[derive(Debug)]
pub struct ScanSummary {
    /// Candidate files successfully read and scanned; enumerated files that
    /// failed to read count toward `skipped_count` instead.
    pub files_scanned: usize,
    pub keys_found: usize,
    /// Paths skipped because they could not be accessed or read.
    pub skipped_count: usize,
    pub template_path: PathBuf,
}

/// Run one complete scan: enumerate, extract, deduplicate, write.
///
/// Fails fast with `MissingSourceDirectory` before any traversal if
/// `source_root` is not an existing directory. Unreadable subtrees and files
/// are skipped with a warning and the scan continues; only template writing
/// is fatal after that point. On failure no partial template is left behind.
pub fn scan(
    source_root: &Path,
    output_dir: &Path,
    options: &ScanOptions,
) -> Result<ScanSummary, ScanError> {
    if !source_root.is_dir() {
        return Err(ScanError::MissingSourceDirectory {
            path: source_root.to_path_buf(),
        });
    }

    let patterns = KeyPatterns::new(
        &options.lookup_methods,
        &options.tag_names,
        &options.key_attributes,
    )?;

    let scan_result = scan_files(
        source_root,
        &options.extensions,
        &options.ignores,
        options.verbose,
    );
    let mut skipped_count = scan_result.skipped_count;

    // Read and extract in parallel; each worker produces a per-file key
    // vector and the partial results are merged into the single set below.
    let per_file: Vec<(String, Option<Vec<String>>)> = scan_result
        .files
        .par_iter()
        .map(|file_path| match fs::read_to_string(file_path) {
            Ok(text) => (file_path.clone(), Some(extract_keys(&text, &patterns))),
            Err(_) => (file_path.clone(), None),
        })
        .collect();

    let mut keys: BTreeSet<String> = BTreeSet::new();
    let mut files_scanned = scan_result.files.len();
    for (file_path, extracted) in per_file {
        match extracted {
            Some(file_keys) => keys.extend(file_keys),
            None => {
                files_scanned -= 1;
                skipped_count += 1;
                if options.verbose {
                    eprintln!(
                        "{} Cannot read file: {}",
                        "warning:".bold().yellow(),
                        file_path
                    );
                }
            }
        }
    }

    let template_path = write_template(output_dir, &keys)?;

    Ok(ScanSummary {
        files_scanned,
        keys_found: keys.len(),
        skipped_count,
        template_path,
    })
}
