/// Main entry point for the daily habit tracker
///
/// This file sets up logging, parses command line arguments, resolves the habit
/// and log file locations, and runs one interactive check-in over stdin/stdout.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use daily_habits::{Console, HabitTracker, RunOutcome, TrackerConfig, HABITS_FILE_NAME, LOG_FILE_NAME};

/// Pick the first writable directory for habit data
///
/// Order: `~/.habit_tracker`, the platform data dir, the platform config dir,
/// `./.habit_tracker`, and finally the system temp dir.
fn get_default_data_dir() -> std::io::Result<PathBuf> {
    let candidates = [
        dirs::home_dir().map(|p| p.join(".habit_tracker")),
        dirs::data_dir().map(|p| p.join("habit_tracker")),
        dirs::config_dir().map(|p| p.join("habit_tracker")),
        std::env::current_dir().ok().map(|p| p.join(".habit_tracker")),
    ];

    if let Some(dir) = candidates.into_iter().flatten().find(|dir| is_writable_dir(dir)) {
        return Ok(dir);
    }

    let temp_path = std::env::temp_dir().join("habit_tracker");
    std::fs::create_dir_all(&temp_path)?;

    tracing::warn!("Using temporary directory for habit data: {}", temp_path.display());
    Ok(temp_path)
}

/// Create `dir` if needed and check that a file can be written inside it
fn is_writable_dir(dir: &Path) -> bool {
    if std::fs::create_dir_all(dir).is_err() {
        return false;
    }
    let test_file = dir.join(".test_write");
    let writable = std::fs::write(&test_file, "test").is_ok();
    let _ = std::fs::remove_file(&test_file);
    writable
}

/// Command line arguments for the daily habit tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON file holding your habit questions
    #[arg(long)]
    habits_file: Option<PathBuf>,

    /// Path to the text file the daily answers are appended to
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Directory used for whichever of the two files is not given explicitly
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> std::io::Result<TrackerConfig> {
        if let (Some(habits), Some(log)) = (&self.habits_file, &self.log_file) {
            return Ok(TrackerConfig::new(habits.clone(), log.clone()));
        }

        let dir = match self.data_dir {
            Some(dir) => {
                std::fs::create_dir_all(&dir)?;
                dir
            }
            None => get_default_data_dir()?,
        };

        Ok(TrackerConfig::new(
            self.habits_file.unwrap_or_else(|| dir.join(HABITS_FILE_NAME)),
            self.log_file.unwrap_or_else(|| dir.join(LOG_FILE_NAME)),
        ))
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("daily_habits={}", log_level))
        .with_writer(std::io::stderr) // Keep logs off stdout, where the prompts go
        .init();

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Could not prepare the data directory: {}", e);
            eprintln!("Error: could not prepare the data directory: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Habits file: {}", config.habits_path.display());
    info!("Log file: {}", config.log_path.display());

    let tracker = HabitTracker::new(config);
    let mut console = Console::stdio();

    match tracker.run(&mut console) {
        Ok(RunOutcome::Logged(entry)) => {
            info!("Logged {} habits for {}", entry.answers.len(), entry.date_string());
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::AlreadyLogged) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Habit check-in failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
