//! Planner operations, grouped by feature.
//!
//! Each module adds methods to `Planner` via `impl Planner` blocks.

pub mod backup;
pub mod dashboard;
pub mod schedule;
pub mod settings;
pub mod subject;
pub mod task;
