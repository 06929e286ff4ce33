//! Unit tests for the to-do domain, validation and service layers.


use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock that advances by one second on every reading.
#[derive(Debug)]
pub(super) struct SteppingClock {
    next: AtomicI64,
}

impl SteppingClock {
    pub(super) const fn starting_at(epoch_seconds: i64) -> Self {
        Self {
            next: AtomicI64::new(epoch_seconds),
        }
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::starting_at(1_767_225_600)
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let seconds = self.next.fetch_add(1, Ordering::SeqCst);
        Utc.timestamp_opt(seconds, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub(super) struct FixedClock(pub(super) DateTime<Utc>);

impl FixedClock {
    pub(super) fn plus_days(self, days: i64) -> DateTime<Utc> {
        self.0 + Duration::days(days)
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self(
            Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0)
                .single()
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        )
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}
