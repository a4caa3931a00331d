//! Shared configuration, route constants and error types for the Cadence
//! task service.

pub mod config;
pub mod constants;
pub mod error;
