/// Basic unit tests to verify core functionality through the public API
use daily_habits::*;
use std::io::Cursor;
use tempfile::tempdir;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    #[test]
    fn test_key_validation() {
        for key in ["water", "drink_water", "a", "_"] {
            assert!(is_valid_key(key), "{key} should be valid");
        }
        for key in ["", "Water", "drink-water", "drink water", "h2o", "ünï"] {
            assert!(!is_valid_key(key), "{key} should be invalid");
        }
    }

    #[test]
    fn test_habit_store_round_trip_keeps_order() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let store = JsonHabitStore::new(temp_dir.path().join("habits.json"));

        let mut habits = HabitSet::new();
        habits.add("water", "Did you drink water today?").unwrap();
        habits.add("exercise", "Did you exercise?").unwrap();
        habits.add("bed_early", "Were you in bed by 11?").unwrap();

        store.save(&habits).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, habits);
        assert_eq!(loaded.keys().collect::<Vec<_>>(), vec!["water", "exercise", "bed_early"]);
    }

    #[test]
    fn test_collector_scenario() {
        let mut habits = HabitSet::new();
        habits.add("water", "Did you drink water today?").unwrap();
        let mut console = Console::new(Cursor::new("y\n"), Vec::new());

        let answers = collect_answers(&habits, &mut console).unwrap();

        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].key, "water");
        assert_eq!(answers[0].result, "Did you drink water today? ✅");
    }

    #[test]
    fn test_gate_is_idempotent() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("habit_log.txt");
        std::fs::write(&path, "[2024-01-01]\nwater: Did you drink water today? ✅\n\n---\n").unwrap();
        let log = LogFile::new(path, "---".to_string());
        let today = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        assert!(!log.not_yet_logged(today).unwrap());
        assert!(!log.not_yet_logged(today).unwrap());
    }

    #[test]
    fn test_error_messages_are_readable() {
        let err = AppError::from(StorageError::NotFound { path: "habits.json".into() });
        assert_eq!(err.to_string(), "Storage error: Habit file not found: habits.json");

        let err = AppError::from(PromptError::EndOfInput);
        assert_eq!(err.to_string(), "Prompt error: Input ended while waiting for an answer");
    }
}
