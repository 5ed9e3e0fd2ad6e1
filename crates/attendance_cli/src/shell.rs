//! Interactive numbered-menu shell.
//!
//! # Responsibility
//! - Prompt for each operation's parameters and validate them.
//! - Render manager results as plain text lines.
//!
//! # Invariants
//! - Malformed input skips the current iteration; it never reaches the manager.
//! - End of input behaves like choosing Exit.
//! - Store failures end the loop and are returned to the caller.

use attendance_core::{
    AttendanceEntry, AttendanceManager, AttendanceRepository, AttendanceStatus, EmployeeId,
    RosterRepository, StoreError, NO_RECORDS_IN_RANGE_MESSAGE, NO_RECORDS_MESSAGE,
};
use chrono::NaiveDate;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};

const MENU: &str = "\nEmployee Attendance System
1. Add Employee
2. Mark Attendance
3. View Attendance
4. Generate Attendance Report
5. Exit";

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug)]
pub enum CliError {
    Io(io::Error),
    Store(StoreError),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "terminal i/o failed: {err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<StoreError> for CliError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Runs the menu loop until Exit or end of input.
///
/// Load notices collected by `manager` are printed first.
pub fn run_shell<R, A, I, O>(
    manager: &mut AttendanceManager<R, A>,
    input: &mut I,
    output: &mut O,
) -> Result<(), CliError>
where
    R: RosterRepository,
    A: AttendanceRepository,
    I: BufRead,
    O: Write,
{
    for notice in manager.notices() {
        writeln!(output, "{notice}")?;
    }

    loop {
        writeln!(output, "{MENU}")?;
        let Some(choice) = prompt(input, output, "Enter your choice: ")? else {
            return Ok(());
        };

        let flow = match choice.trim() {
            "1" => add_employee(manager, input, output)?,
            "2" => mark_attendance(manager, input, output)?,
            "3" => view_attendance(manager, input, output)?,
            "4" => generate_report(manager, input, output)?,
            "5" => {
                writeln!(output, "Exiting Employee Attendance System.")?;
                info!("event=shell_exit module=cli status=ok");
                return Ok(());
            }
            other => {
                warn!("event=shell_choice module=cli status=rejected choice_len={}", other.len());
                writeln!(output, "Invalid choice. Please try again.")?;
                Flow::Continue
            }
        };

        if flow == Flow::EndOfInput {
            return Ok(());
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    EndOfInput,
}

fn add_employee<R, A, I, O>(
    manager: &mut AttendanceManager<R, A>,
    input: &mut I,
    output: &mut O,
) -> Result<Flow, CliError>
where
    R: RosterRepository,
    A: AttendanceRepository,
    I: BufRead,
    O: Write,
{
    let Some(name) = prompt(input, output, "Enter employee name: ")? else {
        return Ok(Flow::EndOfInput);
    };
    let employee = manager.add_employee(name)?;
    writeln!(output, "Employee {} added successfully.", employee.name)?;
    Ok(Flow::Continue)
}

fn mark_attendance<R, A, I, O>(
    manager: &mut AttendanceManager<R, A>,
    input: &mut I,
    output: &mut O,
) -> Result<Flow, CliError>
where
    R: RosterRepository,
    A: AttendanceRepository,
    I: BufRead,
    O: Write,
{
    let Some(raw_id) = prompt(input, output, "Enter employee ID: ")? else {
        return Ok(Flow::EndOfInput);
    };
    let Some(emp_id) = parse_employee_id(&raw_id) else {
        writeln!(output, "Invalid employee ID.")?;
        return Ok(Flow::Continue);
    };

    let Some(raw_status) = prompt(input, output, "Enter status (Present/Absent): ")? else {
        return Ok(Flow::EndOfInput);
    };
    let status = match raw_status.parse::<AttendanceStatus>() {
        Ok(status) => status,
        Err(err) => {
            warn!("event=shell_status module=cli status=rejected error={}", err);
            writeln!(output, "Invalid status. Please enter 'Present' or 'Absent'.")?;
            return Ok(Flow::Continue);
        }
    };

    let record = manager.mark_attendance(emp_id, status)?;
    writeln!(
        output,
        "Attendance for Employee ID {} on {} marked as {}.",
        record.emp_id, record.date, record.status
    )?;
    Ok(Flow::Continue)
}

fn view_attendance<R, A, I, O>(
    manager: &AttendanceManager<R, A>,
    input: &mut I,
    output: &mut O,
) -> Result<Flow, CliError>
where
    R: RosterRepository,
    A: AttendanceRepository,
    I: BufRead,
    O: Write,
{
    let Some(raw_id) = prompt(
        input,
        output,
        "Enter employee ID to view attendance (leave blank to view all): ",
    )?
    else {
        return Ok(Flow::EndOfInput);
    };

    let emp_id = if raw_id.trim().is_empty() {
        None
    } else {
        match parse_employee_id(&raw_id) {
            Some(emp_id) => Some(emp_id),
            None => {
                writeln!(output, "Invalid employee ID.")?;
                return Ok(Flow::Continue);
            }
        }
    };

    let entries = manager.view_attendance(emp_id);
    if entries.is_empty() {
        writeln!(output, "{NO_RECORDS_MESSAGE}")?;
    } else {
        write_entries(output, &entries)?;
    }
    Ok(Flow::Continue)
}

fn generate_report<R, A, I, O>(
    manager: &AttendanceManager<R, A>,
    input: &mut I,
    output: &mut O,
) -> Result<Flow, CliError>
where
    R: RosterRepository,
    A: AttendanceRepository,
    I: BufRead,
    O: Write,
{
    let Some(raw_start) = prompt(input, output, "Enter start date (YYYY-MM-DD): ")? else {
        return Ok(Flow::EndOfInput);
    };
    let Some(raw_end) = prompt(input, output, "Enter end date (YYYY-MM-DD): ")? else {
        return Ok(Flow::EndOfInput);
    };

    let (Some(start), Some(end)) = (parse_date(&raw_start), parse_date(&raw_end)) else {
        writeln!(output, "Invalid date. Please use YYYY-MM-DD.")?;
        return Ok(Flow::Continue);
    };

    let report = manager.generate_report(start, end);
    if report.is_empty() {
        writeln!(output, "{NO_RECORDS_IN_RANGE_MESSAGE}")?;
    } else {
        writeln!(output, "{}", report.title())?;
        write_entries(output, &report.entries)?;
    }
    Ok(Flow::Continue)
}

fn write_entries<O: Write>(output: &mut O, entries: &[AttendanceEntry]) -> io::Result<()> {
    for entry in entries {
        writeln!(output, "{entry}")?;
    }
    Ok(())
}

/// Writes `text`, then reads one line without its line ending.
///
/// Returns `None` at end of input.
fn prompt<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    text: &str,
) -> io::Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

fn parse_employee_id(value: &str) -> Option<EmployeeId> {
    value.trim().parse().ok()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}
