/// Interactive flows driven through the console
///
/// `editor` creates and edits the habit set, `checkin` asks today's questions.

pub mod editor;
pub mod checkin;

// Re-export flow functions for easy access
pub use editor::*;
pub use checkin::*;
