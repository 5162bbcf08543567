//! Providers for employees, jobs and time entries, and the mutation layer
//! that applies review decisions.

pub mod dataset;
pub mod store;

pub use dataset::Dataset;
pub use store::{DatasetStore, ReviewAction, TimesheetMutations, TimesheetSource};
