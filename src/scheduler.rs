use crate::calendar::AbsenceCalendar;
use crate::task::{PlanEntry, Task};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Assigns start and end dates to an ordered task list by advancing a
/// single date cursor shared across all tasks. Tasks never overlap:
/// each task's search for a start day begins at the previous task's
/// end date, regardless of owner.
pub struct Scheduler<'a> {
    calendar: &'a AbsenceCalendar,
}

impl<'a> Scheduler<'a> {
    pub fn new(calendar: &'a AbsenceCalendar) -> Self {
        Self { calendar }
    }

    /// Schedule every task in input order, one plan entry per task.
    pub fn execute(&self, tasks: &[Task], project_start: NaiveDate) -> Vec<PlanEntry> {
        let mut plan = Vec::with_capacity(tasks.len());
        let mut cursor = project_start;
        for task in tasks {
            let (next_cursor, entry) = self.schedule_task(task, cursor);
            cursor = next_cursor;
            plan.push(entry);
        }
        plan
    }

    fn schedule_task(&self, task: &Task, mut cursor: NaiveDate) -> (NaiveDate, PlanEntry) {
        let days_off = self.calendar.days_off(&task.owner);
        let absent = |date: NaiveDate| days_off.is_some_and(|set| set.contains(&date));
        let mut total_days_off: i64 = 0;

        // Find the first day the owner can start. An absence here counts
        // toward the task's days off even when it falls on a weekend.
        while is_weekend(cursor) || absent(cursor) {
            if absent(cursor) {
                total_days_off += 1;
            }
            cursor = cursor + Duration::days(1);
        }
        let start_date = cursor;

        // Consume workdays. Weekday absences count toward days off;
        // weekend days advance the cursor without counting anywhere,
        // absent or not. With zero effort the cursor does not move and
        // the task ends the day it starts.
        let mut worked: i64 = 0;
        while worked < task.effort_days {
            cursor = cursor + Duration::days(1);
            if !is_weekend(cursor) {
                if absent(cursor) {
                    total_days_off += 1;
                } else {
                    worked += 1;
                }
            }
        }

        let entry = PlanEntry {
            name: task.name.clone(),
            effort_days: task.effort_days,
            owner: task.owner.clone(),
            start_date,
            end_date: cursor,
            days_off: total_days_off,
        };
        (cursor, entry)
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
