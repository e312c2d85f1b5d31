//! Time-of-day value object
//!
//! Lesson logs record wall-clock times as `HH:MM` text. The parsed minute
//! value anchors a lesson onto its calendar day; the original text is kept
//! verbatim because back-to-back detection compares it literally.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::error::KidariError;

const MINUTES_PER_HOUR: u16 = 60;
const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

/// Wall-clock time of day, 24-hour, minute precision.
///
/// `24:00` is accepted and anchors to the following midnight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    raw: String,
    minutes: u16,
}

impl TimeOfDay {
    /// Text exactly as it appeared in the input
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Minutes since midnight (0..=1440)
    pub fn minutes_since_midnight(&self) -> u16 {
        self.minutes
    }

    /// Combine with a calendar day into a new instant.
    pub fn on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(NaiveTime::MIN) + TimeDelta::minutes(i64::from(self.minutes))
    }
}

impl FromStr for TimeOfDay {
    type Err = KidariError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || KidariError::InvalidTimeOfDay {
            value: s.to_string(),
        };

        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        if !(1..=2).contains(&hour.len()) || minute.len() != 2 {
            return Err(invalid());
        }
        if !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let hour: u16 = hour.parse().map_err(|_| invalid())?;
        let minute: u16 = minute.parse().map_err(|_| invalid())?;
        if minute >= MINUTES_PER_HOUR {
            return Err(invalid());
        }

        let minutes = hour * MINUTES_PER_HOUR + minute;
        if minutes > MINUTES_PER_DAY {
            return Err(invalid());
        }

        Ok(Self {
            raw: s.to_string(),
            minutes,
        })
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = KidariError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.raw
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
