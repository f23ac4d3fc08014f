use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub effort_days: i64,
    pub owner: String,
}

impl Task {
    pub fn new(name: impl Into<String>, effort_days: i64, owner: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            effort_days,
            owner: owner.into(),
        }
    }
}

/// One scheduled row of the generated plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub name: String,
    pub effort_days: i64,
    pub owner: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days_off: i64,
}

impl PlanEntry {
    /// Human-readable days-off note: "N total days off", or empty when
    /// the task lost no days to absences.
    pub fn days_off_comment(&self) -> String {
        if self.days_off > 0 {
            format!("{} total days off", self.days_off)
        } else {
            String::new()
        }
    }
}
