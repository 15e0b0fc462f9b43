/// Domain module containing core business logic and data types
///
/// This module defines the core entities (Habit, HabitSet, DailyAnswer, LogEntry)
/// and their validation rules. These types represent the fundamental concepts in
/// our habit tracking system.

pub mod habit;
pub mod entry;

// Re-export public types for easy access
pub use habit::*;
pub use entry::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid habit key '{0}': use lowercase letters and underscores only")]
    InvalidKey(String),

    #[error("Habit '{key}' needs a non-empty question")]
    EmptyQuestion { key: String },
}
