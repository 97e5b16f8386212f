pub mod analytics;
pub mod dashboard;
pub mod dispatch;
pub mod export;
pub mod import;
pub mod ipc;
pub mod reset;
pub mod schema;
pub mod session;
pub mod settings;
pub mod shared;
pub mod subject;
pub mod task;
