use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".lockeyrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// File extensions that are scanned for key usages.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Paths (relative to the source root) or glob patterns to skip during
    /// the tree walk.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Method names recognized in the call form `Namespace.method("key")`.
    #[serde(default = "default_lookup_methods")]
    pub lookup_methods: Vec<String>,
    /// Tag names recognized in the markup form `<prefix:tag .../>`.
    #[serde(default = "default_tag_names")]
    pub tag_names: Vec<String>,
    /// Attribute names that carry the key in the markup form.
    #[serde(default = "default_key_attributes")]
    pub key_attributes: Vec<String>,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_extensions() -> Vec<String> {
    ["scala", "xml", "xhtml", "htm", "html"]
        .map(String::from)
        .to_vec()
}

fn default_lookup_methods() -> Vec<String> {
    // Covers Lift's S.?("key") / S.??("key") / S.loc("key") family plus a
    // generic lookup("key") form.
    ["?", "??", "loc", "lookup"].map(String::from).to_vec()
}

fn default_tag_names() -> Vec<String> {
    vec!["loc".to_string()]
}

fn default_key_attributes() -> Vec<String> {
    ["key", "locid"].map(String::from).to_vec()
}

fn default_source_root() -> String {
    "./src".to_string()
}

fn default_output_dir() -> String {
    "./target".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignores: Vec::new(),
            lookup_methods: default_lookup_methods(),
            tag_names: default_tag_names(),
            key_attributes: default_key_attributes(),
            source_root: default_source_root(),
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid, or if a
    /// pattern atom list the recognizers depend on is empty.
    pub fn validate(&self) -> Result<()> {
        // Only patterns with wildcards go through the glob engine; the rest
        // are literal path prefixes and need no validation.
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        if self.extensions.is_empty() {
            anyhow::bail!("'extensions' must list at least one file extension");
        }
        if self.lookup_methods.is_empty() {
            anyhow::bail!("'lookupMethods' must list at least one method name");
        }
        if self.tag_names.is_empty() {
            anyhow::bail!("'tagNames' must list at least one tag name");
        }
        if self.key_attributes.is_empty() {
            anyhow::bail!("'keyAttributes' must list at least one attribute name");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
