use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::UNKNOWN;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A possibly partial calendar date (year only, year and month, or full).
///
/// Missing parts hold [`UNKNOWN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FuzzyDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl Default for FuzzyDate {
    fn default() -> Self {
        Self::unknown()
    }
}

impl FuzzyDate {
    pub const fn unknown() -> Self {
        Self {
            year: UNKNOWN,
            month: UNKNOWN,
            day: UNKNOWN,
        }
    }

    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    pub fn is_unknown(&self) -> bool {
        self.year == UNKNOWN && self.month == UNKNOWN && self.day == UNKNOWN
    }

    /// Full date, when all three parts are known and form a valid day.
    pub fn to_date(&self) -> Option<NaiveDate> {
        if self.year == UNKNOWN || self.month == UNKNOWN || self.day == UNKNOWN {
            return None;
        }
        NaiveDate::from_ymd_opt(self.year, self.month as u32, self.day as u32)
    }

    /// Long form such as "March 3", "March 3, 1999" or "March".
    pub fn to_long_string(&self) -> String {
        let month = (1..=12)
            .contains(&self.month)
            .then(|| MONTHS[(self.month - 1) as usize]);

        match (month, self.day != UNKNOWN, self.year != UNKNOWN) {
            (Some(month), true, true) => format!("{} {}, {}", month, self.day, self.year),
            (Some(month), true, false) => format!("{} {}", month, self.day),
            (Some(month), false, true) => format!("{} {}", month, self.year),
            (Some(month), false, false) => month.to_string(),
            (None, _, true) => self.year.to_string(),
            (None, _, false) => String::new(),
        }
    }
}

impl From<NaiveDate> for FuzzyDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month() as i32,
            day: date.day() as i32,
        }
    }
}

impl fmt::Display for FuzzyDate {
    /// ISO-like form: `2024-03-05`, `2024-03`, `2024`, or empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year == UNKNOWN {
            return Ok(());
        }
        write!(f, "{:04}", self.year)?;
        if self.month != UNKNOWN {
            write!(f, "-{:02}", self.month)?;
            if self.day != UNKNOWN {
                write!(f, "-{:02}", self.day)?;
            }
        }
        Ok(())
    }
}
