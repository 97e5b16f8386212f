//! Fire-and-forget user notifications.

use std::cell::RefCell;
use std::rc::Rc;

use ontime_core::enums::Severity;
use serde::Serialize;

pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

/// Drops every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _message: &str, _severity: Severity) {}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

/// Collects notifications so a caller can hand them on later.
///
/// Clones share one buffer, so a clone can be boxed into a `Planner` while
/// the caller keeps another to drain.
#[derive(Debug, Clone, Default)]
pub struct BufferedNotifier {
    buffer: Rc<RefCell<Vec<Notification>>>,
}

impl BufferedNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take everything collected so far.
    #[must_use]
    pub fn drain(&self) -> Vec<Notification> {
        self.buffer.borrow_mut().drain(..).collect()
    }
}

impl Notifier for BufferedNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.buffer.borrow_mut().push(Notification {
            message: message.to_string(),
            severity,
        });
    }
}
