//! Shared test utilities for ontime-store unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use chrono::NaiveDate;

    use crate::clock::FixedClock;
    use crate::kv::MemoryStore;
    use crate::notify::{BufferedNotifier, NullNotifier};
    use crate::service::{Planner, PlannerOptions};

    /// The pinned calendar date every unit test runs on.
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    /// A planner over `store` with a fixed clock and silent notifications.
    pub fn planner_with(store: MemoryStore) -> Planner {
        Planner::load(
            Box::new(store),
            Box::new(FixedClock::on(today())),
            Box::new(NullNotifier),
            PlannerOptions::default(),
        )
    }

    /// An empty planner whose notifications can be inspected.
    pub fn observed_planner() -> (Planner, BufferedNotifier) {
        let notifier = BufferedNotifier::new();
        let planner = Planner::load(
            Box::new(MemoryStore::new()),
            Box::new(FixedClock::on(today())),
            Box::new(notifier.clone()),
            PlannerOptions::default(),
        );
        (planner, notifier)
    }

    /// Create a subject and return its id.
    pub fn seed_subject(planner: &mut Planner, name: &str) -> String {
        planner
            .create_subject(ontime_core::planner::NewSubject {
                name: name.into(),
                ..Default::default()
            })
            .unwrap()
            .id
            .unwrap()
    }
}
