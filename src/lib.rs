//! Lockey - localization key scanner
//!
//! Lockey is a CLI tool and library that scans a source tree for
//! localization-key usages embedded in source and markup files and emits a
//! consolidated `i18n-template.properties` file listing every distinct key,
//! one `key=` line per key, for translators to populate.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `scanner`: Core scan engine (file enumeration, key extraction, template writing)
//! - `reporter`: Terminal output helpers

pub mod cli;
pub mod config;
pub mod reporter;
pub mod scanner;
