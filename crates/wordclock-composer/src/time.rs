//! Validated wall-clock input
//!
//! The composer never reads a clock itself. Hosts decompose their RTC or
//! network time into an hour/minute pair and hand it over as [`TimeOfDay`].

use core::fmt;

/// Width of a minute bucket in minutes
pub const BUCKET_MINUTES: u8 = 5;

/// Error returned for out-of-range time input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeError {
    /// Hour outside 0..=23
    HourOutOfRange(u8),
    /// Minute outside 0..=59
    MinuteOutOfRange(u8),
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeError::HourOutOfRange(hour) => write!(f, "hour {} is outside 0..=23", hour),
            TimeError::MinuteOutOfRange(minute) => {
                write!(f, "minute {} is outside 0..=59", minute)
            }
        }
    }
}

impl core::error::Error for TimeError {}

/// Hour and minute of the local time, 24h format
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Midnight
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Create a validated time of day
    pub const fn new(hour: u8, minute: u8) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TimeError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    /// Hour, 0..=23
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Minute, 0..=59
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Five-minute bucket, 0..=11
    pub const fn bucket(self) -> u8 {
        self.minute / BUCKET_MINUTES
    }

    /// Minutes past the start of the current bucket, shown as dots
    pub const fn minute_remainder(self) -> u8 {
        self.minute % BUCKET_MINUTES
    }

    /// Iterate over every minute of a day, starting at midnight
    pub fn all() -> impl Iterator<Item = TimeOfDay> {
        (0..24u8).flat_map(|hour| (0..60u8).map(move |minute| TimeOfDay { hour, minute }))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
