/// Habit set editor
///
/// Two entry points:
/// - `create_habits` for the first run, collecting habits until "done";
/// - `edit_habits`, the add/delete menu run on every start.
///
/// The editor owns its working copy of the habit set for the whole session and
/// only writes it back at the save points below.

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::domain::{is_valid_key, Answer, HabitSet};
use crate::storage::HabitStorage;
use crate::AppError;

/// Word that ends the first-run habit entry (any case)
const DONE_SENTINEL: &str = "done";

/// Action picked from the edit sub-menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Add,
    Delete,
    Exit,
}

impl EditAction {
    fn parse(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(EditAction::Add),
            "2" => Some(EditAction::Delete),
            "3" => Some(EditAction::Exit),
            _ => None,
        }
    }
}

/// Build a brand new habit set and save it
///
/// Keys are asked until the user types "done". The result is saved even when
/// empty; the caller decides whether to ask again.
pub fn create_habits<S: HabitStorage, R: BufRead, W: Write>(
    storage: &S,
    console: &mut Console<R, W>,
) -> Result<HabitSet, AppError> {
    let mut habits = HabitSet::new();
    console.say("Enter your habit questions. Type 'done' to finish.\n")?;

    loop {
        let key = console.ask("Enter the habit name (or type 'done' to finish): ")?;
        let key = key.trim();
        if key.eq_ignore_ascii_case(DONE_SENTINEL) {
            break;
        }

        if !is_valid_key(key) {
            console.say("Invalid key! Use lowercase letters and underscores only.")?;
            continue;
        }

        if habits.contains_key(key) {
            console.say("That habit already exists. Try a different name.")?;
            continue;
        }

        let description = console.ask("Enter the description for this habit: ")?;
        let description = description.trim();
        if description.is_empty() {
            console.say("Description cannot be empty. Skipping...\n")?;
        } else {
            habits.add(key, description)?;
        }
    }

    save_habits(storage, &habits, console)?;
    Ok(habits)
}

/// Show the stored habits and let the user add or delete some
///
/// Returns the habit set as it stands when the editor is left. A completed
/// edit session never leaves the stored set empty.
pub fn edit_habits<S: HabitStorage, R: BufRead, W: Write>(
    storage: &S,
    console: &mut Console<R, W>,
    separator: &str,
) -> Result<HabitSet, AppError> {
    let mut habits = storage.load()?;

    console.say("\nYour current habits:")?;
    console.say(separator)?;
    for habit in &habits {
        console.say(&format!("{} : {}", habit.key, habit.question))?;
    }
    console.say(separator)?;

    loop {
        let modify = console.ask("Do you want to modify the habits? (y/n): ")?;
        match Answer::parse(&modify) {
            None => {
                console.say("Please reenter proper value")?;
            }
            Some(Answer::No) => return Ok(habits),
            Some(Answer::Yes) => {
                loop {
                    match prompt_edit_menu(console)? {
                        EditAction::Add => {
                            list_habits(&habits, console)?;
                            add_habit(&mut habits, console)?;
                        }
                        EditAction::Delete => {
                            list_habits(&habits, console)?;
                            delete_habit(&mut habits, console)?;
                        }
                        EditAction::Exit => break,
                    }
                }

                save_habits(storage, &habits, console)?;

                if !habits.is_empty() {
                    return Ok(habits);
                }

                console.say("All habits were deleted. You must add at least one habit.")?;
                while habits.is_empty() {
                    add_habit(&mut habits, console)?;
                }
                save_habits(storage, &habits, console)?;
                console.say("Habit file updated.\n")?;
            }
        }
    }
}

/// Show the sub-menu and read a choice until it is 1, 2 or 3
pub fn prompt_edit_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<EditAction, AppError> {
    console.say("\nEdit Habit Menu")?;
    console.say("1. Add a new habit")?;
    console.say("2. Delete an existing habit")?;
    console.say("3. Exit habit editor")?;

    loop {
        let choice = console.ask("Select an option (1/2/3): ")?;
        match EditAction::parse(choice.trim()) {
            Some(action) => return Ok(action),
            None => console.say("Invalid input. Please enter 1, 2, or 3.")?,
        }
    }
}

/// Ask for a new key and question
///
/// The key prompt repeats until the key is new, non-empty and valid. An empty
/// question cancels the add. Returns whether a habit was inserted.
pub fn add_habit<R: BufRead, W: Write>(
    habits: &mut HabitSet,
    console: &mut Console<R, W>,
) -> Result<bool, AppError> {
    console.say("\n-- Add a new habit --")?;

    let key = loop {
        let key = console.ask("Enter a unique habit key (e.g., 'exercise'): ")?;
        let key = key.trim().to_string();
        if habits.contains_key(&key) {
            console.say("That key already exists. Please choose another.")?;
        } else if key.is_empty() {
            console.say("Key cannot be empty.")?;
        } else if !is_valid_key(&key) {
            console.say("❌ Invalid key! Use lowercase letters and underscores only.")?;
        } else {
            break key;
        }
    };

    let description = console.ask("Enter the habit question: ")?;
    let description = description.trim();
    if description.is_empty() {
        console.say("Habit not added. Description cannot be empty.")?;
        return Ok(false);
    }

    habits.add(&key, description)?;
    console.say(&format!("Habit '{}' added successfully!\n", key))?;
    Ok(true)
}

/// Ask for a key and remove that habit; a missing key is reported, not retried
pub fn delete_habit<R: BufRead, W: Write>(
    habits: &mut HabitSet,
    console: &mut Console<R, W>,
) -> Result<bool, AppError> {
    console.say("\n-- Delete a habit --")?;

    let key = console.ask("Enter the key of the habit you want to delete: ")?;
    let key = key.trim();
    match habits.remove(key) {
        Some(_) => {
            console.say(&format!("Habit '{}' deleted.\n", key))?;
            Ok(true)
        }
        None => {
            console.say("Habit key not found.")?;
            Ok(false)
        }
    }
}

fn list_habits<R: BufRead, W: Write>(
    habits: &HabitSet,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    console.say("\nCurrent habits:")?;
    for habit in habits {
        console.say(&format!("- {}: {}", habit.key, habit.question))?;
    }
    Ok(())
}

fn save_habits<S: HabitStorage, R: BufRead, W: Write>(
    storage: &S,
    habits: &HabitSet,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    storage.save(habits)?;
    console.say("Habit questions have been saved.\n")?;
    Ok(())
}
