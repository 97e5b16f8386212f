//! # ontime-schema
//!
//! JSON Schema generation, validation, and registry for OnTime.
//!
//! This crate provides:
//! - `SchemaRegistry`: central store of all JSON Schemas in the system
//! - Validation of stored documents, backup files, and command inputs
//! - Schema export for external tooling (`ontime schema` command, IPC clients)
//!
//! ## Architecture
//!
//! Entity and response types are defined in `ontime-core` with
//! `#[derive(JsonSchema)]`. This crate imports those types and provides the
//! registry and validation layer. `ontime-store` validates documents and
//! imports through it; `ontime-cli` exports schemas from it.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
