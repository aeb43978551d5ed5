use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of enumerating candidate files.
pub struct ScanResult {
    pub files: HashSet<String>,
    /// Paths that could not be accessed during the walk (skipped, non-fatal).
    pub skipped_count: usize,
}

/// Recursively enumerate every file under `base_dir` whose extension is in
/// `extensions`, skipping ignored paths and unreadable subtrees.
///
/// Selection is by extension only, never by content. Each matching file
/// appears exactly once even when ignore handling walks overlapping paths.
pub fn scan_files(
    base_dir: &Path,
    extensions: &[String],
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files: HashSet<String> = HashSet::new();
    let mut skipped_count = 0;

    // Separate ignore patterns into literal paths and glob patterns
    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            // Literal path mode: anchor under the base directory for prefix matching
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    for entry in WalkDir::new(base_dir) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();
        let path_str = path.to_string_lossy();

        // Check if path matches any literal ignore path (prefix match)
        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        // Check if path matches any glob pattern
        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if path.is_file() && has_recognized_extension(path, extensions) {
            files.insert(path_str.into());
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn has_recognized_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
