//! Task tracker: create, delete, status transitions.

use ontime_core::enums::TaskStatus;
use ontime_core::errors::CoreError;
use ontime_core::planner::{self, NewTask, TaskFilter};
use ontime_core::responses::TaskListItem;
use ontime_core::state::Change;
use ontime_core::views;

use crate::service::Planner;

impl Planner {
    /// Tasks in display order, filtered, with due labels for today.
    #[must_use]
    pub fn tasks(&self, filter: &TaskFilter) -> Vec<TaskListItem> {
        views::task_items(self.state(), filter, self.clock().today())
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` when the title is blank.
    pub fn create_task(&mut self, input: NewTask) -> Result<Change, CoreError> {
        let now = self.clock().now();
        let result = planner::create_task(self.state_mut(), input, now);
        self.commit(result)
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown id.
    pub fn delete_task(&mut self, id: &str) -> Result<Change, CoreError> {
        let result = planner::delete_task(self.state_mut(), id);
        self.commit(result)
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown id.
    pub fn set_task_status(&mut self, id: &str, status: TaskStatus) -> Result<Change, CoreError> {
        let result = planner::set_task_status(self.state_mut(), id, status);
        self.commit(result)
    }

    /// Completed goes back to pending; anything else becomes completed.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown id.
    pub fn toggle_task(&mut self, id: &str) -> Result<Change, CoreError> {
        let result = planner::toggle_task(self.state_mut(), id);
        self.commit(result)
    }
}
