//! Entity structs for all OnTime domain objects.
//!
//! Each entity maps to one element of a persisted JSON document (see
//! `ontime-store` for the document keys). Field names serialize in camelCase
//! so documents written by the browser version load unchanged. All structs
//! derive `Serialize`, `Deserialize`, and `JsonSchema`.

mod session;
mod settings;
mod subject;
mod task;

pub use session::Session;
pub use settings::Settings;
pub use subject::Subject;
pub use task::Task;
