//! Status and per-subject breakdowns behind the analytics charts.

use crate::enums::TaskStatus;
use crate::palette::{STATUS_COMPLETED_COLOR, STATUS_IN_PROGRESS_COLOR, STATUS_PENDING_COLOR};
use crate::responses::{
    AnalyticsReport, StatusBreakdown, StatusSlice, SubjectDistribution, SubjectShare,
};
use crate::state::PlannerState;

#[allow(clippy::cast_precision_loss)]
fn share(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Completed, in-progress and pending counts with fixed slice colors.
#[must_use]
pub fn status_breakdown(state: &PlannerState) -> StatusBreakdown {
    let total = state.tasks.len();
    let count = |status: TaskStatus| state.tasks.iter().filter(|t| t.status == status).count();

    let slices = [
        (TaskStatus::Completed, STATUS_COMPLETED_COLOR),
        (TaskStatus::InProgress, STATUS_IN_PROGRESS_COLOR),
        (TaskStatus::Pending, STATUS_PENDING_COLOR),
    ]
    .into_iter()
    .map(|(status, color)| {
        let n = count(status);
        StatusSlice {
            status,
            count: n,
            color: color.to_string(),
            share: share(n, total),
        }
    })
    .collect();

    StatusBreakdown {
        total,
        empty: total == 0,
        slices,
    }
}

/// Tasks per subject in subject order.
///
/// Tasks with no subject, or a dangling one, are not counted. When no task
/// references any subject, every subject gets an equal placeholder share.
#[must_use]
pub fn subject_distribution(state: &PlannerState) -> SubjectDistribution {
    if state.subjects.is_empty() {
        return SubjectDistribution {
            empty: true,
            placeholder: false,
            shares: Vec::new(),
        };
    }

    let counts: Vec<usize> = state
        .subjects
        .iter()
        .map(|s| {
            state
                .tasks
                .iter()
                .filter(|t| t.subject_id.as_deref() == Some(s.id.as_str()))
                .count()
        })
        .collect();
    let total: usize = counts.iter().sum();
    let placeholder = total == 0;

    let shares = state
        .subjects
        .iter()
        .zip(counts)
        .map(|(subject, count)| SubjectShare {
            subject_id: subject.id.clone(),
            name: subject.name.clone(),
            color: subject.color.clone(),
            count,
            share: if placeholder {
                share(1, state.subjects.len())
            } else {
                share(count, total)
            },
        })
        .collect();

    SubjectDistribution {
        empty: false,
        placeholder,
        shares,
    }
}

#[must_use]
pub fn analytics(state: &PlannerState) -> AnalyticsReport {
    AnalyticsReport {
        status: status_breakdown(state),
        subjects: subject_distribution(state),
    }
}
