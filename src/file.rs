// src/file.rs

use std::{
    fs::{self, File},
    io::BufWriter,
    path::Path,
};

use crate::config::options::ExportFormat;
use crate::error::{Error, Result};
use crate::table::Table;

/// Ensure parent dir exists; create/truncate `path`; write the whole table.
pub fn write_table(path: &Path, table: &Table, format: ExportFormat) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?; // truncate/overwrite
    table.write(BufWriter::new(file), format)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
