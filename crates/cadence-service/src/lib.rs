//! Recurrence engine and task-date policy for the Cadence task service.
//!
//! Everything here is a pure function of its arguments: the caller always
//! supplies "today", nothing reads the clock or touches storage.

pub mod error;
pub mod recurrence;
pub mod task;

pub use recurrence::{advance, next_date, next_occurrence};
