//! Completion dates, and the clocks that tell which day "today" is

use std::fmt::{Display, Formatter};

use chrono::{Datelike, Local, NaiveDate};

use crate::traits::Clock;

/// The calendar day a task has been completed on.
///
/// It is displayed (and sent to the server) as `YEAR-MONTH-DAY` where month and day are *not* zero-padded,
/// e.g. `2024-3-5` for March 5th, 2024.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompletionDate {
    date: NaiveDate,
}

impl CompletionDate {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl From<NaiveDate> for CompletionDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

impl Display for CompletionDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}-{}-{}", self.date.year(), self.date.month(), self.date.day())
    }
}


/// A clock that reads the local time zone of this machine
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock that is stuck on a given day
#[derive(Clone, Copy, Debug)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
