//! Time-of-day schedule slots.

use chrono::{NaiveTime, Timelike};
use gazette_error::{ConfigError, GazetteError};
use std::str::FromStr;

/// A time-of-day at which a publish cycle should fire.
///
/// Slot matching is exact-minute equality, not a range: the scheduler loop is
/// responsible for polling often enough to land inside the target minute.
///
/// # Examples
///
/// ```
/// use gazette_core::ScheduleSlot;
///
/// let slot: ScheduleSlot = "10:00".parse().unwrap();
/// assert_eq!(slot.hour(), 10);
/// assert_eq!(slot.minute(), 0);
/// assert_eq!(slot.to_string(), "10:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("{:02}:{:02}", hour, minute)]
pub struct ScheduleSlot {
    hour: u8,
    minute: u8,
}

impl ScheduleSlot {
    /// Create a slot, validating the hour and minute ranges.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an hour ≥ 24 or a minute ≥ 60.
    pub fn new(hour: u8, minute: u8) -> Result<Self, GazetteError> {
        if hour >= 24 || minute >= 60 {
            return Err(
                ConfigError::new(format!("invalid schedule slot {:02}:{:02}", hour, minute))
                    .into(),
            );
        }
        Ok(Self { hour, minute })
    }

    /// Hour component (0–23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute component (0–59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Whether a wall-clock time falls inside this slot's minute.
    pub fn matches(&self, time: NaiveTime) -> bool {
        time.hour() == u32::from(self.hour) && time.minute() == u32::from(self.minute)
    }
}

impl FromStr for ScheduleSlot {
    type Err = GazetteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s
            .split_once(':')
            .ok_or_else(|| ConfigError::new(format!("schedule slot not HH:MM: {:?}", s)))?;

        let hour: u8 = hour
            .parse()
            .map_err(|_| ConfigError::new(format!("invalid hour in schedule slot {:?}", s)))?;
        let minute: u8 = minute
            .parse()
            .map_err(|_| ConfigError::new(format!("invalid minute in schedule slot {:?}", s)))?;

        Self::new(hour, minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_slots() {
        let slot: ScheduleSlot = "16:30".parse().unwrap();
        assert_eq!(slot.hour(), 16);
        assert_eq!(slot.minute(), 30);
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert!("24:00".parse::<ScheduleSlot>().is_err());
        assert!("10:60".parse::<ScheduleSlot>().is_err());
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!("1000".parse::<ScheduleSlot>().is_err());
        assert!("ten:00".parse::<ScheduleSlot>().is_err());
        assert!("".parse::<ScheduleSlot>().is_err());
    }

    #[test]
    fn matches_exact_minute_only() {
        let slot: ScheduleSlot = "10:00".parse().unwrap();
        assert!(slot.matches(NaiveTime::from_hms_opt(10, 0, 59).unwrap()));
        assert!(!slot.matches(NaiveTime::from_hms_opt(10, 1, 0).unwrap()));
        assert!(!slot.matches(NaiveTime::from_hms_opt(9, 59, 59).unwrap()));
    }
}
