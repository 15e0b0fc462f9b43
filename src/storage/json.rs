/// JSON-file implementation of the habit storage interface
///
/// The habit set is stored as a pretty-printed JSON object with a four-space
/// indent, one member per habit, in insertion order.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::domain::HabitSet;
use crate::storage::{HabitStorage, StorageError};

/// JSON-file based storage for the habit set
#[derive(Debug, Clone)]
pub struct JsonHabitStore {
    path: PathBuf,
}

impl JsonHabitStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn to_pretty_json(&self, habits: &HabitSet) -> Result<Vec<u8>, StorageError> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        habits.serialize(&mut ser).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })?;
        Ok(buf)
    }
}

impl HabitStorage for JsonHabitStore {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> Result<HabitSet, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound { path: self.path.clone() });
            }
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };

        let habits: HabitSet = serde_json::from_str(&content).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!("Loaded {} habits from {}", habits.len(), self.path.display());
        Ok(habits)
    }

    fn save(&self, habits: &HabitSet) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
            }
        }

        let json = self.to_pretty_json(habits)?;
        fs::write(&self.path, json).map_err(|e| StorageError::io(&self.path, e))?;

        tracing::info!("Saved {} habits to {}", habits.len(), self.path.display());
        Ok(())
    }
}
