use chrono::NaiveDate;
use plan_tool::PlanEntry;
use plan_tool::persistence::{
    PersistenceError, load_days_off_from_csv, load_tasks_from_csv, save_plan_to_csv,
    save_plan_to_json,
};
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

fn entry(
    name: &str,
    effort_days: i64,
    owner: &str,
    start: NaiveDate,
    end: NaiveDate,
    days_off: i64,
) -> PlanEntry {
    PlanEntry {
        name: name.to_string(),
        effort_days,
        owner: owner.to_string(),
        start_date: start,
        end_date: end,
        days_off,
    }
}

#[test]
fn loads_tasks_and_trims_fields() {
    let file = write_temp("Design,5,Alice\n Build , 3 , bob \nTest,2,Bob,extra note\n");
    let tasks = load_tasks_from_csv(file.path()).unwrap();

    assert_eq!(tasks.len(), 3);
    assert_eq!(tasks[0].name, "Design");
    assert_eq!(tasks[0].effort_days, 5);
    assert_eq!(tasks[0].owner, "Alice");
    assert_eq!(tasks[1].name, "Build");
    assert_eq!(tasks[1].owner, "bob");
    // Columns past the third are ignored.
    assert_eq!(tasks[2].name, "Test");
}

#[test]
fn task_row_with_missing_columns_is_rejected() {
    let file = write_temp("Design,5\n");
    let err = load_tasks_from_csv(file.path()).unwrap_err();
    assert!(matches!(err, PersistenceError::MalformedRow(_)));
}

#[test]
fn non_integer_effort_is_rejected() {
    let file = write_temp("Design,five,alice\n");
    let err = load_tasks_from_csv(file.path()).unwrap_err();
    assert!(matches!(err, PersistenceError::InvalidEffort(_)));
}

#[test]
fn negative_effort_is_rejected() {
    let file = write_temp("Design,-2,alice\n");
    let err = load_tasks_from_csv(file.path()).unwrap_err();
    assert!(matches!(err, PersistenceError::InvalidEffort(_)));
}

#[test]
fn empty_task_name_is_rejected() {
    let file = write_temp("  ,3,alice\n");
    let err = load_tasks_from_csv(file.path()).unwrap_err();
    assert!(matches!(err, PersistenceError::MalformedRow(_)));
}

#[test]
fn loads_days_off_singles_and_ranges() {
    let file = write_temp("alice,01/06/2025\nBob,01/08/2025-01/10/2025\nbob,01/20/2025\n");
    let calendar = load_days_off_from_csv(file.path()).unwrap();

    assert!(calendar.is_day_off("alice", d(2025, 1, 6)));
    assert!(calendar.is_day_off("bob", d(2025, 1, 8)));
    assert!(calendar.is_day_off("bob", d(2025, 1, 9)));
    assert!(calendar.is_day_off("BOB", d(2025, 1, 10)));
    assert!(!calendar.is_day_off("bob", d(2025, 1, 11)));
    // Rows for the same owner union their dates.
    assert!(calendar.is_day_off("bob", d(2025, 1, 20)));
}

#[test]
fn days_off_row_with_missing_period_is_rejected() {
    let file = write_temp("alice\n");
    let err = load_days_off_from_csv(file.path()).unwrap_err();
    assert!(matches!(err, PersistenceError::MalformedRow(_)));
}

#[test]
fn unparseable_single_date_is_rejected() {
    let file = write_temp("alice,13/45/2025\n");
    let err = load_days_off_from_csv(file.path()).unwrap_err();
    assert!(matches!(err, PersistenceError::InvalidDate(_)));
}

#[test]
fn dashed_period_with_too_many_parts_is_rejected() {
    // ISO-style dates hit the range path and fail its shape check.
    let file = write_temp("alice,2025-01-06\n");
    let err = load_days_off_from_csv(file.path()).unwrap_err();
    assert!(matches!(err, PersistenceError::InvalidRange(_)));
}

#[test]
fn range_with_unparseable_end_is_rejected() {
    let file = write_temp("alice,01/06/2025-13/45/2025\n");
    let err = load_days_off_from_csv(file.path()).unwrap_err();
    assert!(matches!(err, PersistenceError::InvalidDate(_)));
}

#[test]
fn empty_days_off_file_yields_empty_calendar() {
    let file = write_temp("");
    let calendar = load_days_off_from_csv(file.path()).unwrap();
    assert!(calendar.days_off("anyone").is_none());
}

#[test]
fn plan_csv_has_header_and_formatted_rows() {
    let plan = vec![
        entry("Design", 5, "alice", d(2025, 1, 6), d(2025, 1, 13), 1),
        entry("Build", 3, "bob", d(2025, 1, 13), d(2025, 1, 16), 0),
    ];
    let out = NamedTempFile::new().expect("create temp file");
    save_plan_to_csv(&plan, out.path()).unwrap();

    let contents = fs::read_to_string(out.path()).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next(),
        Some("Task,Effort in Days,Owner,Start Date,End Date,Days Off")
    );
    assert_eq!(
        lines.next(),
        Some("Design,5,alice,01/06/2025,01/13/2025,1 total days off")
    );
    assert_eq!(lines.next(), Some("Build,3,bob,01/13/2025,01/16/2025,"));
    assert_eq!(lines.next(), None);
}

#[test]
fn empty_plan_still_writes_header() {
    let out = NamedTempFile::new().expect("create temp file");
    save_plan_to_csv(&[], out.path()).unwrap();

    let contents = fs::read_to_string(out.path()).unwrap();
    assert_eq!(
        contents.trim_end(),
        "Task,Effort in Days,Owner,Start Date,End Date,Days Off"
    );
}

#[test]
fn plan_json_matches_csv_fields() {
    let plan = vec![entry("Design", 5, "alice", d(2025, 1, 6), d(2025, 1, 10), 0)];
    let out = NamedTempFile::new().expect("create temp file");
    save_plan_to_json(&plan, out.path()).unwrap();

    let contents = fs::read_to_string(out.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Design");
    assert_eq!(rows[0]["effort_days"], 5);
    assert_eq!(rows[0]["owner"], "alice");
    assert_eq!(rows[0]["start_date"], "01/06/2025");
    assert_eq!(rows[0]["end_date"], "01/10/2025");
    assert_eq!(rows[0]["days_off"], "");
}
