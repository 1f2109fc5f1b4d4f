/***************************************/
/*        3rd party libraries          */
/***************************************/
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/***************************************/
/*             Public API              */
/***************************************/

/// Source of the local wall-clock time. The controller only reads the hour.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    /// Hour of day in local time, 0-23.
    fn hour(&self) -> u32 {
        self.now().hour()
    }
}

/// Reads the real local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    time: NaiveDateTime,
}

impl FixedClock {
    pub fn new(time: NaiveDateTime) -> Self {
        Self { time }
    }

    /// A clock stuck at `hour`:00 on 2026-01-01. `None` if `hour` is not 0-23.
    pub fn at_hour(hour: u32) -> Option<Self> {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1)?;
        let time = NaiveTime::from_hms_opt(hour, 0, 0)?;
        Some(Self::new(NaiveDateTime::new(date, time)))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.time
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod clock_tests {
    use super::{Clock, FixedClock, SystemClock};

    #[test]
    fn test_fixed_clock_reports_hour() {
        let clock = FixedClock::at_hour(9).unwrap();

        assert_eq!(clock.hour(), 9);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_fixed_clock_rejects_invalid_hour() {
        assert!(FixedClock::at_hour(24).is_none());
    }

    #[test]
    fn test_system_clock_hour_in_range() {
        assert!(SystemClock::new().hour() < 24);
    }
}
