//! Template serialization.
//!
//! The template is rewritten from scratch on every run. Writing goes through
//! a temporary file in the output directory followed by a rename, so a
//! failed run never leaves a truncated `i18n-template.properties` behind.

use std::{
    collections::BTreeSet,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use super::error::ScanError;

pub const TEMPLATE_FILE_NAME: &str = "i18n-template.properties";

/// Write one `key=` line per key to `<output_dir>/i18n-template.properties`.
///
/// The output directory is created if absent. Keys arrive in a `BTreeSet`,
/// so lines come out in lexicographic order and repeated runs over unchanged
/// input produce byte-identical files.
pub fn write_template(output_dir: &Path, keys: &BTreeSet<String>) -> Result<PathBuf, ScanError> {
    let template_path = output_dir.join(TEMPLATE_FILE_NAME);

    fs::create_dir_all(output_dir).map_err(|source| ScanError::TemplateWrite {
        path: template_path.clone(),
        source,
    })?;

    let tmp_path = output_dir.join(format!("{TEMPLATE_FILE_NAME}.tmp"));

    if let Err(source) = write_lines(&tmp_path, keys).and_then(|()| fs::rename(&tmp_path, &template_path))
    {
        let _ = fs::remove_file(&tmp_path);
        return Err(ScanError::TemplateWrite {
            path: template_path,
            source,
        });
    }

    Ok(template_path)
}

fn write_lines(path: &Path, keys: &BTreeSet<String>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for key in keys {
        writeln!(writer, "{}=", key)?;
    }
    writer.flush()
}
