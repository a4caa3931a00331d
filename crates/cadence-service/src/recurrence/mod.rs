//! Next-occurrence computation for recurring tasks.

mod advance;
mod engine;

pub use advance::advance;
pub use engine::{next_date, next_occurrence};
