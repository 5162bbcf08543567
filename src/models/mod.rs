pub mod breakdown;
pub mod display_entry;
pub mod employee;
pub mod job;
pub mod payroll;
pub mod status;
pub mod summary;
pub mod time_entry;

pub use breakdown::{DailyBreakdown, EmployeeBreakdown};
pub use display_entry::DisplayTimeEntry;
pub use employee::{Employee, EmployeeStatus};
pub use job::Job;
pub use payroll::{JobBreakdown, PayrollEntry};
pub use status::TimeEntryStatus;
pub use summary::TimesheetSummary;
pub use time_entry::TimeEntry;
