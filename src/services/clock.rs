//! Clock boundary
//!
//! Supplies the civil date and display time stamped onto new records. The
//! ledger never reads the clock itself.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

use crate::config::Settings;
use crate::error::ExpenseResult;

/// A civil date plus a pre-formatted time of day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    pub date: NaiveDate,
    pub time: String,
}

impl Timestamp {
    pub fn new(date: NaiveDate, time: impl Into<String>) -> Self {
        Self {
            date,
            time: time.into(),
        }
    }

    /// "YYYY-MM-DD <time>", as written to the login log
    pub fn date_time(&self) -> String {
        format!("{} {}", self.date.format("%Y-%m-%d"), self.time)
    }
}

pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// System clock read in a fixed civil UTC offset
#[derive(Debug, Clone)]
pub struct OffsetClock {
    offset: FixedOffset,
    time_format: String,
}

impl OffsetClock {
    pub fn new(offset: FixedOffset, time_format: impl Into<String>) -> Self {
        Self {
            offset,
            time_format: time_format.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> ExpenseResult<Self> {
        settings.validate()?;
        Ok(Self::new(settings.utc_offset()?, settings.time_format.clone()))
    }

    /// Convert an instant to this clock's civil time
    pub fn at(&self, instant: DateTime<Utc>) -> Timestamp {
        let local = instant.with_timezone(&self.offset);
        Timestamp {
            date: local.date_naive(),
            time: local.format(&self.time_format).to_string(),
        }
    }
}

impl Clock for OffsetClock {
    fn now(&self) -> Timestamp {
        self.at(Utc::now())
    }
}

/// A clock that always reports the same timestamp
#[derive(Debug, Clone)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0.clone()
    }
}
