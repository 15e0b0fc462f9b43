/// Public library interface for the daily habit tracker
///
/// This module exports the tracker that sequences a run (create, edit, check
/// in, log) together with the public types used by the binary and by tests.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use thiserror::Error;

// Internal modules
mod domain;
mod storage;
mod config;
mod console;
mod flows;

// Re-export public modules and types
pub use domain::*;
pub use storage::{HabitStorage, JsonHabitStore, LogFile, StorageError};
pub use config::{TrackerConfig, HABITS_FILE_NAME, LOG_FILE_NAME, SEPARATOR_WIDTH};
pub use console::{Console, PromptError};
pub use flows::{add_habit, collect_answers, create_habits, delete_habit, edit_habits, prompt_edit_menu, EditAction};

/// Errors that can end a tracker run
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),
}

/// What a completed run did with today's log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Answers were collected and appended
    Logged(LogEntry),
    /// The log already had an entry for today; nothing was asked
    AlreadyLogged,
}

/// Main habit tracker
///
/// Holds the configuration, the habit storage and the log, and runs the
/// daily flow against a console.
pub struct HabitTracker<S = JsonHabitStore> {
    config: TrackerConfig,
    storage: S,
    log: LogFile,
}

impl HabitTracker<JsonHabitStore> {
    /// Create a tracker backed by the JSON habit file named in `config`
    pub fn new(config: TrackerConfig) -> Self {
        let storage = JsonHabitStore::new(config.habits_path.clone());
        Self::with_storage(config, storage)
    }
}

impl<S: HabitStorage> HabitTracker<S> {
    /// Create a tracker with a custom habit storage
    pub fn with_storage(config: TrackerConfig, storage: S) -> Self {
        let log = LogFile::new(config.log_path.clone(), config.separator.clone());
        Self { config, storage, log }
    }

    /// Run the daily flow for the local calendar day
    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<RunOutcome, AppError> {
        let today = Local::now().date_naive();
        self.run_for(today, console)
    }

    /// Run the daily flow as if today were `today`
    ///
    /// 1. make sure a non-empty habit file exists,
    /// 2. offer the edit menu,
    /// 3. reload the habits and, unless today is already in the log,
    ///    ask every question and append the answers.
    pub fn run_for<R: BufRead, W: Write>(
        &self,
        today: NaiveDate,
        console: &mut Console<R, W>,
    ) -> Result<RunOutcome, AppError> {
        tracing::info!("Starting habit check-in for {}", format_date(today));

        if !self.storage.exists() {
            console.say("You should write your habits!")?;
            while !self.storage.exists() {
                create_habits(&self.storage, console)?;
            }
        }

        while self.storage.load()?.is_empty() {
            console.say("Your habit list is currently empty.")?;
            create_habits(&self.storage, console)?;
        }

        edit_habits(&self.storage, console, &self.config.separator)?;

        let habits = self.storage.load()?;

        if !self.log.not_yet_logged(today)? {
            tracing::info!("Log already has an entry for {}", format_date(today));
            console.say(" ✓ You've already logged your habits for today.")?;
            return Ok(RunOutcome::AlreadyLogged);
        }

        let answers = collect_answers(&habits, console)?;
        let entry = LogEntry::new(today, answers);
        self.log.append(&entry)?;
        console.say("Today's habits have been logged.")?;

        Ok(RunOutcome::Logged(entry))
    }

    /// Get the configuration this tracker runs with
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Get a reference to the storage layer (useful for testing)
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Get a reference to the log file
    pub fn log(&self) -> &LogFile {
        &self.log
    }
}
