/// Storage layer for persisting habit data
///
/// Habits live in a JSON file and daily answers are appended to a plain-text
/// log. Every operation opens, reads or writes, and closes its file within a
/// single call.

pub mod json;
pub mod log;

// Re-export the main storage types
pub use json::*;
pub use log::*;

use std::path::PathBuf;
use thiserror::Error;
use crate::domain::HabitSet;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Habit file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Habit file {} is not a JSON object of habit questions: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        StorageError::Io { path: path.to_path_buf(), source }
    }
}

/// Trait defining the storage interface for the habit set
///
/// The editor and the tracker only talk to this trait, so tests can swap the
/// JSON file for something else.
pub trait HabitStorage {
    /// Whether a habit file has been written yet
    fn exists(&self) -> bool;

    /// Load the full habit set, keeping the stored order
    fn load(&self) -> Result<HabitSet, StorageError>;

    /// Replace the stored habit set with `habits`
    fn save(&self, habits: &HabitSet) -> Result<(), StorageError>;
}
