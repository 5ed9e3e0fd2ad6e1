//! Process configuration for the attendance binary.
//!
//! # Responsibility
//! - Resolve data file locations and logging settings from `.env` and the environment.
//!
//! # Invariants
//! - Unset or blank variables fall back to defaults; loading never fails.
//! - `log_dir` is always absolute.

use attendance_core::default_log_level;
use std::env;
use std::path::{Path, PathBuf};

pub const EMPLOYEES_FILE_VAR: &str = "ATTENDANCE_EMPLOYEES_FILE";
pub const RECORDS_FILE_VAR: &str = "ATTENDANCE_RECORDS_FILE";
pub const LOG_LEVEL_VAR: &str = "ATTENDANCE_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "ATTENDANCE_LOG_DIR";

const DEFAULT_EMPLOYEES_FILE: &str = "employees.csv";
const DEFAULT_RECORDS_FILE: &str = "attendance.csv";
const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub employees_file: PathBuf,
    pub attendance_file: PathBuf,
    pub log_level: String,
    /// Always absolute; relative values are resolved against the working directory.
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Reads `.env` (if any) and the process environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::from_lookup(|key| env::var(key).ok(), &cwd)
    }

    /// Builds a config from `lookup`, falling back to defaults for unset or blank values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, cwd: &Path) -> Self {
        let value = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let log_dir = value(LOG_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR));
        let log_dir = if log_dir.is_absolute() {
            log_dir
        } else {
            cwd.join(log_dir)
        };

        Self {
            employees_file: value(EMPLOYEES_FILE_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_EMPLOYEES_FILE)),
            attendance_file: value(RECORDS_FILE_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RECORDS_FILE)),
            log_level: value(LOG_LEVEL_VAR).unwrap_or_else(|| default_log_level().to_string()),
            log_dir,
        }
    }
}
