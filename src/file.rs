// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::write_roster;
use crate::engine::Roster;
use crate::error::ScrapeError;

/// Write the roster to `export.out_path`, replacing any existing file.
/// Returns the path written to.
pub fn write_export(export: &ExportOptions, roster: &Roster) -> Result<PathBuf, ScrapeError> {
    let path = export.out_path.clone();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(&path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_roster(&mut out, roster, export.format.delim())?;
    out.flush()?;

    logf!(path = %path.display(), rows = roster.rows.len(), "wrote export");
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), ScrapeError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Io(io::Error::new(
            io::ErrorKind::NotADirectory,
            format!("output path exists but is not a directory: {}", dir.display()),
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
