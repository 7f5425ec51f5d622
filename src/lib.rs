//! Library for the `curriculum-planner` CLI
//! Contains the curriculum model, derivation, state controller, and the ambient
//! config and logging used by the `cplan` binary.

pub mod config;
pub mod core;
pub mod logger;

pub use crate::core::get_version;
