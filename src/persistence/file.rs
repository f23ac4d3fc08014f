use super::{PersistenceError, PersistenceResult};
use crate::calendar::AbsenceCalendar;
use crate::task::{PlanEntry, Task};
use chrono::NaiveDate;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Load tasks from a headerless CSV of `name, effort, owner` rows.
/// Extra trailing columns are ignored; every field is trimmed.
pub fn load_tasks_from_csv<P: AsRef<Path>>(path: P) -> PersistenceResult<Vec<Task>> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut tasks = Vec::new();
    for record in reader.records() {
        let record = record?;
        tasks.push(task_from_record(&record)?);
    }
    super::validate_tasks(&tasks)?;
    Ok(tasks)
}

fn task_from_record(record: &csv::StringRecord) -> PersistenceResult<Task> {
    if record.len() < 3 {
        return Err(PersistenceError::MalformedRow(
            "each row must have at least three columns: task name, effort in days, and owner"
                .to_string(),
        ));
    }
    let name = record[0].trim().to_string();
    let effort_days = record[1].trim().parse::<i64>().map_err(|err| {
        PersistenceError::InvalidEffort(format!("'{}' is not an integer: {err}", &record[1]))
    })?;
    let owner = record[2].trim().to_string();
    Ok(Task::new(name, effort_days, owner))
}

/// Load per-owner days off from a headerless CSV of `owner, period`
/// rows, where a period is a single MM/DD/YYYY date or an inclusive
/// `start-end` range. Rows for the same owner accumulate.
pub fn load_days_off_from_csv<P: AsRef<Path>>(path: P) -> PersistenceResult<AbsenceCalendar> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut calendar = AbsenceCalendar::new();
    for record in reader.records() {
        let record = record?;
        if record.len() < 2 {
            return Err(PersistenceError::MalformedRow(
                "each days-off row must have two columns: owner and date or date range"
                    .to_string(),
            ));
        }
        let owner = record[0].trim();
        let period = record[1].trim();
        if period.contains('-') {
            let (start, end) = split_range(period)?;
            calendar.add_range(owner, parse_date(start)?, parse_date(end)?);
        } else {
            calendar.add_day_off(owner, parse_date(period)?);
        }
    }
    Ok(calendar)
}

fn split_range(period: &str) -> PersistenceResult<(&str, &str)> {
    let mut parts = period.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(start), Some(end), None) => Ok((start, end)),
        _ => Err(PersistenceError::InvalidRange(format!(
            "'{period}' must be a single 'start-end' pair"
        ))),
    }
}

fn parse_date(input: &str) -> PersistenceResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|err| PersistenceError::InvalidDate(format!("'{input}': {err}")))
}

#[derive(Serialize)]
struct PlanRecord<'a> {
    name: &'a str,
    effort_days: i64,
    owner: &'a str,
    start_date: String,
    end_date: String,
    days_off: String,
}

impl<'a> From<&'a PlanEntry> for PlanRecord<'a> {
    fn from(entry: &'a PlanEntry) -> Self {
        Self {
            name: &entry.name,
            effort_days: entry.effort_days,
            owner: &entry.owner,
            start_date: entry.start_date.format(DATE_FORMAT).to_string(),
            end_date: entry.end_date.format(DATE_FORMAT).to_string(),
            days_off: entry.days_off_comment(),
        }
    }
}

const PLAN_CSV_HEADER: [&str; 6] = [
    "Task",
    "Effort in Days",
    "Owner",
    "Start Date",
    "End Date",
    "Days Off",
];

/// Write the plan as CSV with a fixed header row. The header is
/// written even when the plan is empty.
pub fn save_plan_to_csv<P: AsRef<Path>>(plan: &[PlanEntry], path: P) -> PersistenceResult<()> {
    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record(PLAN_CSV_HEADER)?;
    for entry in plan {
        writer.serialize(PlanRecord::from(entry))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the plan as pretty JSON, same fields and date format as the
/// CSV output.
pub fn save_plan_to_json<P: AsRef<Path>>(plan: &[PlanEntry], path: P) -> PersistenceResult<()> {
    let records: Vec<PlanRecord<'_>> = plan.iter().map(PlanRecord::from).collect();
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &records)?;
    Ok(())
}
