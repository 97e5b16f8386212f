//! Dashboard aggregates, the day schedule, and decorated task listings.

use chrono::NaiveDate;

use crate::due::classify;
use crate::entities::Task;
use crate::hours::format_range;
use crate::planner::schedule::sessions_for_date;
use crate::planner::tasks::{TaskFilter, list_tasks};
use crate::responses::{DashboardSummary, ScheduledSlot, TaskListItem, UpcomingDeadline};
use crate::state::PlannerState;

/// Share of completed tasks as a whole percentage, halves rounded up.
///
/// Zero when there are no tasks.
#[must_use]
pub fn completion_rate(tasks: &[Task]) -> u8 {
    let total = tasks.len();
    if total == 0 {
        return 0;
    }
    let completed = tasks.iter().filter(|t| t.status.is_completed()).count();
    let rate = (200 * completed + total) / (2 * total);
    u8::try_from(rate).unwrap_or(100)
}

/// Dated, not-completed tasks, soonest first, at most `limit`.
#[must_use]
pub fn upcoming_deadlines(
    state: &PlannerState,
    today: NaiveDate,
    limit: usize,
) -> Vec<UpcomingDeadline> {
    let mut dated: Vec<(&Task, NaiveDate)> = state
        .tasks
        .iter()
        .filter(|t| !t.status.is_completed())
        .filter_map(|t| t.due_date.map(|d| (t, d)))
        .collect();
    dated.sort_by_key(|(_, due)| *due);

    dated
        .into_iter()
        .take(limit)
        .map(|(task, due_date)| {
            let due = classify(Some(due_date), today);
            UpcomingDeadline {
                task_id: task.id.clone(),
                title: task.title.clone(),
                subject: state.subject_name(task.subject_id.as_deref()).to_string(),
                due_date,
                label: due.label(),
                urgency: due.urgency(),
                due,
            }
        })
        .collect()
}

/// Sessions on `date` by start hour, joined to their subject.
#[must_use]
pub fn day_schedule(state: &PlannerState, date: NaiveDate) -> Vec<ScheduledSlot> {
    sessions_for_date(state, date)
        .into_iter()
        .map(|session| {
            let subject = state.subject(&session.subject_id);
            ScheduledSlot {
                session_id: session.id.clone(),
                subject_id: session.subject_id.clone(),
                subject: state.subject_name(Some(&session.subject_id)).to_string(),
                color: subject.map(|s| s.color.clone()),
                date: session.date,
                start_hour: session.start_hour,
                end_hour: session.end_hour,
                label: format_range(session.start_hour, session.end_hour),
            }
        })
        .collect()
}

/// Tasks in display order with subject names and due labels resolved.
#[must_use]
pub fn task_items(state: &PlannerState, filter: &TaskFilter, today: NaiveDate) -> Vec<TaskListItem> {
    list_tasks(state, filter)
        .into_iter()
        .map(|task| {
            let due = classify(task.due_date, today);
            TaskListItem {
                task: task.clone(),
                subject: state.subject_name(task.subject_id.as_deref()).to_string(),
                due_label: due.label(),
                due,
            }
        })
        .collect()
}

/// Recompute every dashboard card. Reminders are left empty; the caller
/// fills them from a [`ReminderLog`](crate::views::ReminderLog) sweep.
#[must_use]
pub fn dashboard(state: &PlannerState, today: NaiveDate, upcoming_limit: usize) -> DashboardSummary {
    let today_schedule = day_schedule(state, today);
    DashboardSummary {
        today,
        subject_count: state.subjects.len(),
        pending_count: state
            .tasks
            .iter()
            .filter(|t| !t.status.is_completed())
            .count(),
        today_session_count: today_schedule.len(),
        completion_rate: completion_rate(&state.tasks),
        upcoming: upcoming_deadlines(state, today, upcoming_limit),
        today_schedule,
        reminders: Vec::new(),
    }
}
