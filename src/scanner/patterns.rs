//! Compiled key-usage recognizers.
//!
//! The scanner never parses candidate files as real source or markup; it runs
//! a small set of regexes over the raw text so that syntactically broken or
//! partial files still yield whatever keys are textually recognizable. The
//! pattern atoms (lookup method names, tag names, key attribute names) come
//! from configuration and are compiled once per run.

use regex::Regex;

use super::error::ScanError;

/// Identifier shape for the namespace in the call form and for the tag
/// prefix in the markup form.
const IDENT: &str = "[A-Za-z_][A-Za-z0-9_]*";

/// The set of recognizers applied to each candidate file.
#[derive(Debug)]
pub struct KeyPatterns {
    /// `Namespace.method("key", ...)` - first string literal is the key.
    call: Regex,
    /// `<prefix:tag ... attr="key" ...>` or `<prefix:tag ... attr='key' .../>`.
    tag_attribute: Regex,
    /// `<prefix:tag>key</prefix:tag>` with no attributes.
    tag_content: Regex,
}

impl KeyPatterns {
    pub fn new(
        lookup_methods: &[String],
        tag_names: &[String],
        key_attributes: &[String],
    ) -> Result<Self, ScanError> {
        // Longest atoms first so `??` is preferred over `?` when both are
        // configured.
        let methods = alternation(lookup_methods);
        let tags = alternation(tag_names);
        let attrs = alternation(key_attributes);

        let call = compile(&format!(
            r#"\b{IDENT}\s*\.\s*(?:{methods})\s*\(\s*"([^"]*)""#
        ))?;

        // The attribute name must be preceded by whitespace or a quote so
        // that `data-key=` does not match a configured `key` attribute.
        let tag_attribute = compile(&format!(
            r#"<{IDENT}:(?:{tags})\b[^>]*?["'\s](?:{attrs})\s*=\s*(?:"([^"]*)"|'([^']*)')"#
        ))?;

        let tag_content = compile(&format!(
            r#"<{IDENT}:(?:{tags})\s*>([^<]*)</{IDENT}:(?:{tags})\s*>"#
        ))?;

        Ok(Self {
            call,
            tag_attribute,
            tag_content,
        })
    }

    pub fn call(&self) -> &Regex {
        &self.call
    }

    pub fn tag_attribute(&self) -> &Regex {
        &self.tag_attribute
    }

    pub fn tag_content(&self) -> &Regex {
        &self.tag_content
    }
}

/// Build a regex alternation from literal atoms, longest first.
fn alternation(atoms: &[String]) -> String {
    let mut escaped: Vec<String> = atoms.iter().map(|a| regex::escape(a)).collect();
    escaped.sort_by_key(|a| std::cmp::Reverse(a.len()));
    escaped.join("|")
}

fn compile(pattern: &str) -> Result<Regex, ScanError> {
    Regex::new(pattern).map_err(|source| ScanError::InvalidPatternConfig { source })
}
