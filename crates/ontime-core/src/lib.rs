//! # ontime-core
//!
//! Core types, commands, and derived views for OnTime.
//!
//! This crate provides the foundational pieces shared across all OnTime crates:
//! - Entity structs for subjects, tasks, schedule sessions, and settings
//! - Status and priority enums
//! - ID prefix constants and generation
//! - Validation and cross-cutting error types
//! - `PlannerState` with the pure command functions that mutate it
//! - Derived views (dashboard, analytics, reminders) and due-date classification
//! - Serializable view/response types

pub mod due;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod hours;
pub mod ids;
pub mod palette;
pub mod planner;
pub mod responses;
pub mod state;
pub mod views;

mod serde_compat;
