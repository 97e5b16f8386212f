//! Schedule planner: today's study blocks.

use chrono::NaiveDate;

use ontime_core::errors::CoreError;
use ontime_core::planner::{self, NewSession};
use ontime_core::responses::DaySchedule;
use ontime_core::state::Change;
use ontime_core::views;

use crate::service::Planner;

impl Planner {
    /// Sessions on `date` (default today) joined to their subjects, by start hour.
    #[must_use]
    pub fn day_schedule(&self, date: Option<NaiveDate>) -> DaySchedule {
        let date = date.unwrap_or_else(|| self.clock().today());
        DaySchedule {
            date,
            sessions: views::day_schedule(self.state(), date),
        }
    }

    /// Book a block on today's date.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when no subject exists, an hour is out
    /// of range, the block is empty or inverted, or it overlaps another
    /// session today. Returns `CoreError::NotFound` for an unknown subject.
    pub fn create_session(&mut self, input: NewSession) -> Result<Change, CoreError> {
        let today = self.clock().today();
        let result = planner::create_session(self.state_mut(), input, today);
        self.commit(result)
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown id.
    pub fn delete_session(&mut self, id: &str) -> Result<Change, CoreError> {
        let result = planner::delete_session(self.state_mut(), id);
        self.commit(result)
    }
}
