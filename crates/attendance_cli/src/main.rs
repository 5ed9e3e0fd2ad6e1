//! Employee attendance tracker entry point.
//!
//! # Responsibility
//! - Load configuration, start logging, open the CSV-backed manager.
//! - Hand the manager to the interactive shell on stdin/stdout.

mod config;
mod shell;

use attendance_core::{
    core_version, init_logging, AttendanceManager, CsvAttendanceRepository, CsvRosterRepository,
};
use config::AppConfig;
use log::{error, info};
use shell::{run_shell, CliError};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = AppConfig::from_env();

    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("logging disabled: {err}");
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=app_exit module=cli status=error error={}", err);
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig) -> Result<(), CliError> {
    info!(
        "event=cli_start module=cli status=ok version={} employees_file={} attendance_file={}",
        core_version(),
        config.employees_file.display(),
        config.attendance_file.display()
    );

    let mut manager = AttendanceManager::open(
        CsvRosterRepository::new(&config.employees_file),
        CsvAttendanceRepository::new(&config.attendance_file),
    )?;

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    run_shell(&mut manager, &mut input, &mut output)
}
