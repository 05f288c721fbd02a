//! Slot matching and the fire-once-per-minute guarantee.

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use gazette_core::ScheduleSlot;

/// Decides when a publish cycle fires.
///
/// The decision is a function of the current time and the last fired
/// minute: a slot is due when the wall clock sits inside its minute and
/// that minute has not fired yet. Nothing persists across restarts, so a
/// slot missed while the process was down stays missed, and a restart
/// inside a matching minute may refire; both are acceptable here.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use gazette_bot::SlotClock;
///
/// let mut clock = SlotClock::new(vec!["10:00".parse().unwrap()]);
/// let t0 = Utc.with_ymd_and_hms(2026, 8, 6, 10, 0, 5).unwrap();
/// let t1 = Utc.with_ymd_and_hms(2026, 8, 6, 10, 0, 35).unwrap();
///
/// assert!(clock.due(t0).is_some());
/// assert!(clock.due(t1).is_none()); // same minute, already fired
/// ```
#[derive(Debug)]
pub struct SlotClock {
    slots: Vec<ScheduleSlot>,
    last_fired: Option<NaiveDateTime>,
}

impl SlotClock {
    /// Create a clock over the configured slots.
    pub fn new(slots: Vec<ScheduleSlot>) -> Self {
        Self {
            slots,
            last_fired: None,
        }
    }

    /// The slot matching `now`, independent of firing history.
    pub fn matching_slot(&self, now: DateTime<Utc>) -> Option<ScheduleSlot> {
        let time = now.time();
        self.slots.iter().copied().find(|slot| slot.matches(time))
    }

    /// Return the slot due at `now` and record the fire, or `None` when no
    /// slot matches or the matching minute already fired.
    pub fn due(&mut self, now: DateTime<Utc>) -> Option<ScheduleSlot> {
        let slot = self.matching_slot(now)?;
        let minute = Self::truncate_to_minute(now);

        if self.last_fired == Some(minute) {
            return None;
        }

        self.last_fired = Some(minute);
        Some(slot)
    }

    fn truncate_to_minute(now: DateTime<Utc>) -> NaiveDateTime {
        now.naive_utc()
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or_else(|| now.naive_utc())
    }
}
