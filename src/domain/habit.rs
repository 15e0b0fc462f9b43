/// Habit entity and the ordered habit set
///
/// A habit is a short lowercase key plus the yes/no question asked every day.
/// The HabitSet keeps habits in the order they were added, which is also the
/// order used when prompting and when writing the log.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::DomainError;

/// Check whether a habit key is acceptable
///
/// Keys must be non-empty and made only of lowercase ASCII letters and
/// underscores (e.g. "drink_water").
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_lowercase() || c == '_')
}

/// A single habit: the key used in the log plus the question shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Habit {
    /// Identifier written to the log (e.g. "water")
    pub key: String,
    /// Question asked each day (e.g. "Did you drink water today?")
    pub question: String,
}

impl Habit {
    /// Create a new habit with validation
    pub fn new(key: String, question: String) -> Result<Self, DomainError> {
        Self::validate_key(&key)?;
        Self::validate_question(&key, &question)?;

        Ok(Self { key, question })
    }

    /// Create a habit from existing data (used when loading the habit file)
    ///
    /// The habit file is user-editable, so whatever it holds is taken as-is.
    pub fn from_existing(key: String, question: String) -> Self {
        Self { key, question }
    }

    fn validate_key(key: &str) -> Result<(), DomainError> {
        if !is_valid_key(key) {
            return Err(DomainError::InvalidKey(key.to_string()));
        }
        Ok(())
    }

    fn validate_question(key: &str, question: &str) -> Result<(), DomainError> {
        if question.trim().is_empty() {
            return Err(DomainError::EmptyQuestion { key: key.to_string() });
        }
        Ok(())
    }
}

/// Ordered mapping of habit key to question
///
/// Keys are unique. Serializes as a JSON object whose members appear in
/// insertion order, so a save/load round trip keeps the order intact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HabitSet {
    habits: Vec<Habit>,
}

impl HabitSet {
    /// Create an empty habit set
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Look up the question for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key).map(|i| self.habits[i].question.as_str())
    }

    /// Iterate over habits in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Habit> {
        self.habits.iter()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.habits.iter().map(|h| h.key.as_str())
    }

    /// Insert a habit, keeping its position if the key is already present
    ///
    /// Returns the previous question when an existing key was replaced.
    pub fn insert(&mut self, habit: Habit) -> Option<String> {
        match self.position(&habit.key) {
            Some(i) => Some(std::mem::replace(&mut self.habits[i].question, habit.question)),
            None => {
                self.habits.push(habit);
                None
            }
        }
    }

    /// Validate and append a new habit
    pub fn add(&mut self, key: &str, question: &str) -> Result<(), DomainError> {
        let habit = Habit::new(key.to_string(), question.to_string())?;
        self.insert(habit);
        Ok(())
    }

    /// Remove a habit by key, returning it if it existed
    pub fn remove(&mut self, key: &str) -> Option<Habit> {
        self.position(key).map(|i| self.habits.remove(i))
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.habits.iter().position(|h| h.key == key)
    }
}

impl<'a> IntoIterator for &'a HabitSet {
    type Item = &'a Habit;
    type IntoIter = std::slice::Iter<'a, Habit>;

    fn into_iter(self) -> Self::IntoIter {
        self.habits.iter()
    }
}

impl FromIterator<Habit> for HabitSet {
    fn from_iter<I: IntoIterator<Item = Habit>>(iter: I) -> Self {
        let mut set = HabitSet::new();
        for habit in iter {
            set.insert(habit);
        }
        set
    }
}

impl Serialize for HabitSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.habits.len()))?;
        for habit in &self.habits {
            map.serialize_entry(&habit.key, &habit.question)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for HabitSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(HabitSetVisitor)
    }
}

struct HabitSetVisitor;

impl<'de> Visitor<'de> for HabitSetVisitor {
    type Value = HabitSet;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object mapping habit keys to question strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut set = HabitSet::new();
        while let Some((key, question)) = access.next_entry::<String, String>()? {
            set.insert(Habit::from_existing(key, question));
        }
        Ok(set)
    }
}
