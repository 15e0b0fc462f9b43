/// Tracker configuration: where the habit and log files live
///
/// The configuration is a plain value handed to the tracker and, through it,
/// to every component that touches the filesystem.

use std::path::{Path, PathBuf};

/// Default name of the habit definition file
pub const HABITS_FILE_NAME: &str = "habits.json";
/// Default name of the append-only log file
pub const LOG_FILE_NAME: &str = "habit_log.txt";
/// Width of the dashed line closing each log block
pub const SEPARATOR_WIDTH: usize = 75;

/// Paths and formatting used by a tracker run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// JSON file holding the habit key -> question mapping
    pub habits_path: PathBuf,
    /// Plain-text log the daily answers are appended to
    pub log_path: PathBuf,
    /// Line written after every log block and around the habit listing
    pub separator: String,
}

impl TrackerConfig {
    pub fn new(habits_path: PathBuf, log_path: PathBuf) -> Self {
        Self {
            habits_path,
            log_path,
            separator: default_separator(),
        }
    }

    /// Use the default file names inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(HABITS_FILE_NAME), dir.join(LOG_FILE_NAME))
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

fn default_separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}
