//! Dashboard and analytics, recomputed on demand.

use ontime_core::responses::{AnalyticsReport, DashboardSummary};
use ontime_core::views;

use crate::service::Planner;

impl Planner {
    /// Refresh the dashboard for today.
    ///
    /// Also runs the reminder sweep: reminders that have not fired today are
    /// notified, recorded in the reminder log, and returned in the summary.
    pub fn dashboard(&mut self) -> DashboardSummary {
        let today = self.clock().today();
        let mut summary = views::dashboard(self.state(), today, self.options().upcoming_limit);
        summary.reminders = self.sweep_reminders(today);
        summary
    }

    #[must_use]
    pub fn analytics(&self) -> AnalyticsReport {
        views::analytics(self.state())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use ontime_core::due::DueStatus;
    use ontime_core::enums::{Severity, TaskStatus};
    use ontime_core::planner::{NewTask, SettingsUpdateBuilder};
    use pretty_assertions::assert_eq;

    use crate::kv::MemoryStore;
    use crate::test_support::helpers::{observed_planner, planner_with, seed_subject, today};

    #[test]
    fn biology_lab_report_scenario() {
        let mut planner = planner_with(MemoryStore::new());
        seed_subject(&mut planner, "Biology");
        planner
            .create_task(NewTask {
                title: "Lab Report".into(),
                due_date: Some(today()),
                ..Default::default()
            })
            .unwrap();

        let summary = planner.dashboard();
        assert_eq!(summary.subject_count, 1);
        assert_eq!(summary.pending_count, 1);
        assert_eq!(summary.completion_rate, 0);
        assert_eq!(summary.upcoming.len(), 1);
        assert_eq!(summary.upcoming[0].title, "Lab Report");
        assert_eq!(summary.upcoming[0].due, DueStatus::DueToday);
        assert_eq!(summary.upcoming[0].subject, "Unknown");
    }

    #[test]
    fn reminders_fire_once_per_day() {
        let (mut planner, notifier) = observed_planner();
        planner
            .create_task(NewTask {
                title: "Essay".into(),
                due_date: Some(today() + Duration::days(2)),
                ..Default::default()
            })
            .unwrap();
        notifier.drain();

        let first = planner.dashboard();
        assert_eq!(first.reminders.len(), 1);
        assert_eq!(first.reminders[0].message, "Reminder: Essay - Due in 2 days");

        let notes = notifier.drain();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].severity, Severity::Warning);

        let second = planner.dashboard();
        assert!(second.reminders.is_empty());
        assert!(notifier.drain().is_empty());
        assert_eq!(planner.reminder_log().len(), 1);
    }

    #[test]
    fn reminders_respect_the_switch_and_window() {
        let mut planner = planner_with(MemoryStore::new());
        planner
            .create_task(NewTask {
                title: "Far".into(),
                due_date: Some(today() + Duration::days(5)),
                ..Default::default()
            })
            .unwrap();
        assert!(planner.dashboard().reminders.is_empty());

        planner
            .update_settings(SettingsUpdateBuilder::new().reminder_days(5).build())
            .unwrap();
        assert_eq!(planner.dashboard().reminders.len(), 1);

        planner
            .create_task(NewTask {
                title: "Near".into(),
                due_date: Some(today()),
                ..Default::default()
            })
            .unwrap();
        planner
            .update_settings(SettingsUpdateBuilder::new().reminders(false).build())
            .unwrap();
        assert!(planner.dashboard().reminders.is_empty());
    }

    #[test]
    fn analytics_counts_statuses() {
        let mut planner = planner_with(MemoryStore::new());
        let a = planner
            .create_task(NewTask {
                title: "A".into(),
                ..Default::default()
            })
            .unwrap()
            .id
            .unwrap();
        planner
            .create_task(NewTask {
                title: "B".into(),
                ..Default::default()
            })
            .unwrap();
        planner.set_task_status(&a, TaskStatus::Completed).unwrap();

        let report = planner.analytics();
        assert_eq!(report.status.total, 2);
        assert!(!report.status.empty);
        assert!(report.subjects.empty);
        assert_eq!(planner.dashboard().completion_rate, 50);
    }
}
