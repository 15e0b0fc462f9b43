/// Daily answers and the log entry they are written as
///
/// A DailyAnswer is the result of asking one habit question today. A LogEntry
/// groups all of today's answers under a date header, ready to be appended to
/// the log file.

use chrono::NaiveDate;

use crate::domain::Habit;

/// Marker appended to a question that was answered "y"
pub const YES_MARKER: &str = "✅";
/// Marker appended to a question that was answered "n"
pub const NO_MARKER: &str = "❌";

/// A yes/no answer to a habit question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Parse the exact literals "y" and "n"; anything else is rejected
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "y" => Some(Answer::Yes),
            "n" => Some(Answer::No),
            _ => None,
        }
    }

    /// Glyph shown after the question in the log
    pub fn marker(&self) -> &'static str {
        match self {
            Answer::Yes => YES_MARKER,
            Answer::No => NO_MARKER,
        }
    }
}

/// Today's answer to one habit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyAnswer {
    /// Key of the habit that was asked
    pub key: String,
    pub answer: Answer,
    /// Question text followed by the answer marker
    pub result: String,
}

impl DailyAnswer {
    pub fn new(habit: &Habit, answer: Answer) -> Self {
        Self {
            key: habit.key.clone(),
            answer,
            result: format!("{} {}", habit.question, answer.marker()),
        }
    }
}

/// A dated block of answers as it appears in the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub date: NaiveDate,
    pub answers: Vec<DailyAnswer>,
}

impl LogEntry {
    pub fn new(date: NaiveDate, answers: Vec<DailyAnswer>) -> Self {
        Self { date, answers }
    }

    /// ISO 8601 form of the date (YYYY-MM-DD), the token the log gate searches for
    pub fn date_string(&self) -> String {
        format_date(self.date)
    }

    /// Render the block: header, one line per answer, a blank line, then the separator
    pub fn render(&self, separator: &str) -> String {
        let mut text = format!("[{}]\n", self.date_string());
        for answer in &self.answers {
            text.push_str(&format!("{}: {}\n", answer.key, answer.result));
        }
        text.push('\n');
        text.push_str(separator);
        text.push('\n');
        text
    }
}

/// Format a date the way it is written into the log
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
