//! Source of "today" and "now".

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

pub trait Clock {
    /// Local calendar date.
    fn today(&self) -> NaiveDate;

    /// Current instant, used for `createdAt` and `exportedAt`.
    fn now(&self) -> DateTime<Utc>;
}

/// The system clock, in the machine's local time zone.
///
/// "Today" is the local calendar date, not the UTC one: a session planned
/// late in the evening stays on the day the user sees on their wall clock,
/// and reminders and overdue labels roll over at local midnight.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        calendar_date(Utc::now(), &Local)
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Calendar date of `instant` as seen in `zone`.
fn calendar_date<Tz: TimeZone>(instant: DateTime<Utc>, zone: &Tz) -> NaiveDate {
    instant.with_timezone(zone).date_naive()
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
    now: DateTime<Utc>,
}

impl FixedClock {
    #[must_use]
    pub const fn new(today: NaiveDate, now: DateTime<Utc>) -> Self {
        Self { today, now }
    }

    /// Pinned to midday UTC on `today`.
    #[must_use]
    pub fn on(today: NaiveDate) -> Self {
        let now = today
            .and_hms_opt(12, 0, 0)
            .map_or_else(Utc::now, |dt| dt.and_utc());
        Self { today, now }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
