pub mod calendar;
pub mod persistence;
pub mod scheduler;
pub mod task;

pub use calendar::AbsenceCalendar;
pub use scheduler::Scheduler;
pub use task::{PlanEntry, Task};
