/// Basic integration tests: full runs of the tracker against scripted input
use chrono::NaiveDate;
use daily_habits::*;
use std::fs;
use std::io::Cursor;
use tempfile::{tempdir, TempDir};

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    fn new_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn tracker_in(dir: &TempDir) -> HabitTracker {
        HabitTracker::new(TrackerConfig::in_dir(dir.path()))
    }

    fn run(tracker: &HabitTracker, today: NaiveDate, input: &str) -> (Result<RunOutcome, AppError>, String) {
        let mut console = Console::new(Cursor::new(input.to_string()), Vec::new());
        let result = tracker.run_for(today, &mut console);
        let output = String::from_utf8(console.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn test_first_run_creates_edits_and_logs() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let tracker = tracker_in(&temp_dir);

        // create one habit, decline the edit menu, answer yes
        let (result, output) = run(&tracker, new_day(), "water\nDid you drink water today?\ndone\nn\ny\n");

        let outcome = result.expect("run should succeed");
        assert!(matches!(outcome, RunOutcome::Logged(ref entry) if entry.answers.len() == 1));
        assert!(output.contains("You should write your habits!"));
        assert!(output.contains("Do you want to modify the habits? (y/n): "));

        let habits = fs::read_to_string(&tracker.config().habits_path).unwrap();
        assert_eq!(habits, "{\n    \"water\": \"Did you drink water today?\"\n}");

        let log = fs::read_to_string(&tracker.config().log_path).unwrap();
        assert_eq!(
            log,
            format!("[2024-01-01]\nwater: Did you drink water today? ✅\n\n{}\n", "-".repeat(75))
        );
    }

    #[test]
    fn test_second_run_same_day_is_skipped() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let tracker = tracker_in(&temp_dir);

        let (first, _) = run(&tracker, new_day(), "water\nDid you drink water today?\ndone\nn\ny\n");
        first.unwrap();
        let log_before = fs::read_to_string(&tracker.config().log_path).unwrap();

        let (second, output) = run(&tracker, new_day(), "n\n");

        assert_eq!(second.unwrap(), RunOutcome::AlreadyLogged);
        assert!(output.contains("You've already logged your habits for today."));
        assert!(!output.contains("Did you drink water today?(y/n): "));
        assert_eq!(fs::read_to_string(&tracker.config().log_path).unwrap(), log_before);
    }

    #[test]
    fn test_next_day_appends_new_block() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let tracker = tracker_in(&temp_dir);

        run(&tracker, new_day(), "water\nDid you drink water today?\ndone\nn\ny\n").0.unwrap();
        let next_day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        run(&tracker, next_day, "n\nn\n").0.unwrap();

        let log = fs::read_to_string(&tracker.config().log_path).unwrap();
        assert!(log.starts_with("[2024-01-01]\n"));
        assert!(log.contains("[2024-01-02]\nwater: Did you drink water today? ❌\n"));
    }

    #[test]
    fn test_empty_creation_is_repeated_until_a_habit_exists() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let tracker = tracker_in(&temp_dir);

        let input = "done\nread\nDid you read?\ndone\nn\nn\n";
        let (result, output) = run(&tracker, new_day(), input);

        result.unwrap();
        assert!(output.contains("Your habit list is currently empty."));
        assert_eq!(tracker.storage().load().unwrap().keys().collect::<Vec<_>>(), vec!["read"]);
    }

    #[test]
    fn test_existing_empty_file_triggers_create() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let tracker = tracker_in(&temp_dir);
        fs::write(&tracker.config().habits_path, "{}").unwrap();

        let (result, output) = run(&tracker, new_day(), "sleep\nDid you sleep 8h?\ndone\nn\ny\n");

        result.unwrap();
        assert!(!output.contains("You should write your habits!"));
        assert!(output.contains("Your habit list is currently empty."));
    }

    #[test]
    fn test_edit_changes_are_used_for_the_check_in() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let tracker = tracker_in(&temp_dir);
        let mut habits = HabitSet::new();
        habits.add("water", "Did you drink water today?").unwrap();
        tracker.storage().save(&habits).unwrap();

        let input = "y\n1\nstretch\nDid you stretch?\n3\ny\nn\n";
        let (result, _) = run(&tracker, new_day(), input);

        match result.unwrap() {
            RunOutcome::Logged(entry) => {
                let keys: Vec<_> = entry.answers.iter().map(|a| a.key.as_str()).collect();
                assert_eq!(keys, vec!["water", "stretch"]);
                assert_eq!(entry.answers[1].result, "Did you stretch? ❌");
            }
            other => panic!("expected a logged run, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_habit_file_is_reported() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let tracker = tracker_in(&temp_dir);
        fs::write(&tracker.config().habits_path, "[1, 2, 3]").unwrap();

        let (result, _) = run(&tracker, new_day(), "");

        assert!(matches!(result, Err(AppError::Storage(StorageError::Parse { .. }))));
    }

    #[test]
    fn test_end_of_input_stops_the_run() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let tracker = tracker_in(&temp_dir);

        let (result, _) = run(&tracker, new_day(), "water\n");

        assert!(matches!(result, Err(AppError::Prompt(PromptError::EndOfInput))));
        assert!(!tracker.config().log_path.exists());
    }

    #[test]
    fn test_custom_separator_is_written() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = TrackerConfig::in_dir(temp_dir.path()).with_separator("=====");
        let tracker = HabitTracker::new(config);

        run(&tracker, new_day(), "water\nDrank water?\ndone\nn\ny\n").0.unwrap();

        let log = fs::read_to_string(&tracker.config().log_path).unwrap();
        assert!(log.ends_with("\n\n=====\n"));
    }

    #[test]
    fn test_unwritable_log_location_ends_the_run() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let config = TrackerConfig::new(temp_dir.path().join("habits.json"), blocker.join("habit_log.txt"));
        let tracker = HabitTracker::new(config);
        let habits: HabitSet = vec![Habit::new("water".to_string(), "Did you drink water today?".to_string()).unwrap()]
            .into_iter()
            .collect();
        tracker.storage().save(&habits).unwrap();

        let (result, output) = run(&tracker, new_day(), "n\ny\n");

        assert!(matches!(result, Err(AppError::Storage(StorageError::Io { .. }))));
        assert!(!output.contains("Today's habits have been logged."));
        assert!(!tracker.log().path().exists());
        assert_eq!(fs::read_to_string(&blocker).unwrap(), "not a directory");
    }
}
