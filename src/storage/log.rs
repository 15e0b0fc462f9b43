/// Append-only daily log
///
/// Each run that collects answers appends one block to the log. The same file
/// is scanned to decide whether today has already been recorded.

use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::domain::{format_date, LogEntry};
use crate::storage::StorageError;

/// Handle on the plain-text log file
#[derive(Debug, Clone)]
pub struct LogFile {
    path: PathBuf,
    separator: String,
}

impl LogFile {
    pub fn new(path: PathBuf, separator: String) -> Self {
        Self { path, separator }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true when no line of the log mentions `today`
    ///
    /// A missing log counts as not logged.
    pub fn not_yet_logged(&self, today: NaiveDate) -> Result<bool, StorageError> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(true),
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };

        let needle = format_date(today);
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| StorageError::io(&self.path, e))?;
            if line.contains(&needle) {
                tracing::debug!("Found entry for {} in {}", needle, self.path.display());
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Append one dated block; earlier content is never touched
    pub fn append(&self, entry: &LogEntry) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StorageError::io(&self.path, e))?;

        file.write_all(entry.render(&self.separator).as_bytes())
            .map_err(|e| StorageError::io(&self.path, e))?;

        tracing::info!(
            "Appended {} answers for {} to {}",
            entry.answers.len(),
            entry.date_string(),
            self.path.display()
        );
        Ok(())
    }
}
