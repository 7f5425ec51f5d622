//! Core curriculum logic shared by every front end

pub mod deriver;
pub mod error;
pub mod exchange;
pub mod models;
pub mod report;
pub mod state;
pub mod template;

pub use error::{ImportError, PlannerError, Result, ValidationError};

/// Returns the current version of the `curriculum-planner` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
