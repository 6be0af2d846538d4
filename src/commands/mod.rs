//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `exercises.rs` — stats/convert/wordcount runs: read, compute, save, print.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate exercise logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod exercises;

pub use exercises::handle_exercise_commands;
