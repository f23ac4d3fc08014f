use chrono::{Duration, NaiveDate};
use std::collections::{HashMap, HashSet};

/// Per-owner days off, keyed by lowercased owner name.
///
/// Built once before scheduling and read-only afterwards. Owners with
/// no recorded absences behave as an empty set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbsenceCalendar {
    days_off: HashMap<String, HashSet<NaiveDate>>,
}

impl AbsenceCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a single day off for an owner.
    pub fn add_day_off(&mut self, owner: &str, date: NaiveDate) {
        self.owner_entry(owner).insert(date);
    }

    /// Record every calendar date from `start` to `end` inclusive.
    /// A reversed range (end before start) records nothing.
    pub fn add_range(&mut self, owner: &str, start: NaiveDate, end: NaiveDate) {
        let set = self.owner_entry(owner);
        let mut current = start;
        while current <= end {
            set.insert(current);
            current = current + Duration::days(1);
        }
    }

    /// Days off recorded for an owner. Lookup is case-insensitive.
    pub fn days_off(&self, owner: &str) -> Option<&HashSet<NaiveDate>> {
        self.days_off.get(&owner.to_lowercase())
    }

    pub fn is_day_off(&self, owner: &str, date: NaiveDate) -> bool {
        self.days_off(owner).is_some_and(|set| set.contains(&date))
    }

    fn owner_entry(&mut self, owner: &str) -> &mut HashSet<NaiveDate> {
        self.days_off.entry(owner.to_lowercase()).or_default()
    }
}
