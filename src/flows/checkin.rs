/// Daily check-in: ask every habit question once

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::domain::{Answer, DailyAnswer, HabitSet};
use crate::AppError;

/// Ask each habit's question in order until it gets a "y" or "n"
///
/// Returns one DailyAnswer per habit; the habit set itself is left untouched.
pub fn collect_answers<R: BufRead, W: Write>(
    habits: &HabitSet,
    console: &mut Console<R, W>,
) -> Result<Vec<DailyAnswer>, AppError> {
    let mut answers = Vec::with_capacity(habits.len());

    for habit in habits {
        let answer = loop {
            let input = console.ask(&format!("{}(y/n): ", habit.question))?;
            match Answer::parse(&input) {
                Some(answer) => break answer,
                None => console.say("Please reenter proper value")?,
            }
        };
        answers.push(DailyAnswer::new(habit, answer));
    }

    tracing::debug!("Collected {} answers", answers.len());
    Ok(answers)
}
