//! Subject registry: create, update, delete.

use ontime_core::entities::Subject;
use ontime_core::errors::CoreError;
use ontime_core::planner::{self, NewSubject, SubjectUpdate};
use ontime_core::state::Change;

use crate::service::Planner;

impl Planner {
    /// Subjects in insertion order.
    #[must_use]
    pub fn subjects(&self) -> &[Subject] {
        &self.state().subjects
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` when the name is blank.
    pub fn create_subject(&mut self, input: NewSubject) -> Result<Change, CoreError> {
        let now = self.clock().now();
        let result = planner::create_subject(self.state_mut(), input, now);
        self.commit(result)
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown id and
    /// `CoreError::Validation` when the name is blank.
    pub fn update_subject(&mut self, input: SubjectUpdate) -> Result<Change, CoreError> {
        let result = planner::update_subject(self.state_mut(), input);
        self.commit(result)
    }

    /// Remove a subject. Tasks and sessions that reference it are kept.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown id.
    pub fn delete_subject(&mut self, id: &str) -> Result<Change, CoreError> {
        let result = planner::delete_subject(self.state_mut(), id);
        self.commit(result)
    }
}
