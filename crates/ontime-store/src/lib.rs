//! # ontime-store
//!
//! Document persistence and the `Planner` controller for OnTime.
//!
//! The planner owns the in-memory `PlannerState`, loads it from a
//! [`KeyValueStore`] once at startup, and writes the affected JSON document
//! after every successful command. Each feature adds its operations to
//! `Planner` from a module under [`repos`]; [`dispatch`] turns method names
//! into [`Command`] values and [`ipc`] serves them line by line.

pub mod clock;
pub mod dispatch;
pub mod error;
pub mod ipc;
pub mod keys;
pub mod kv;
pub mod notify;
pub mod repos;
pub mod service;

mod test_support;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dispatch::{Command, DispatchError, Outcome};
pub use error::StoreError;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use notify::{BufferedNotifier, Notification, Notifier, NullNotifier};
pub use repos::backup::{read_backup, write_backup};
pub use service::{Planner, PlannerOptions};
