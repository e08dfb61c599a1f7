//! Broadcast-season arithmetic.
//!
//! Seasons follow the catalog's convention: Winter is December to February,
//! Spring March to May, Summer June to August, Fall September to November.
//! December already belongs to the *next* year's Winter.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use shiori::model::MediaSeason;
//! use shiori::season::SeasonYear;
//!
//! let december = NaiveDate::from_ymd_opt(2023, 12, 20).unwrap();
//! let current = SeasonYear::containing(december);
//! assert_eq!(current, SeasonYear::new(MediaSeason::Winter, 2024));
//! assert_eq!(current.next(), SeasonYear::new(MediaSeason::Spring, 2024));
//! ```

use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::model::MediaSeason;

/// A season in a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeasonYear {
    pub season: MediaSeason,
    pub year: i32,
}

impl SeasonYear {
    pub const fn new(season: MediaSeason, year: i32) -> Self {
        Self { season, year }
    }

    /// The season that `date` falls in.
    pub fn containing(date: NaiveDate) -> Self {
        let season = from_month(date.month());
        let year = if date.month() == 12 {
            date.year() + 1
        } else {
            date.year()
        };
        Self { season, year }
    }

    pub fn next(self) -> Self {
        match self.season {
            MediaSeason::Winter => Self::new(MediaSeason::Spring, self.year),
            MediaSeason::Spring => Self::new(MediaSeason::Summer, self.year),
            MediaSeason::Summer => Self::new(MediaSeason::Fall, self.year),
            MediaSeason::Fall => Self::new(MediaSeason::Winter, self.year + 1),
            MediaSeason::Unknown => self,
        }
    }

    pub fn previous(self) -> Self {
        match self.season {
            MediaSeason::Winter => Self::new(MediaSeason::Fall, self.year - 1),
            MediaSeason::Spring => Self::new(MediaSeason::Winter, self.year),
            MediaSeason::Summer => Self::new(MediaSeason::Spring, self.year),
            MediaSeason::Fall => Self::new(MediaSeason::Summer, self.year),
            MediaSeason::Unknown => self,
        }
    }
}

impl fmt::Display for SeasonYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.season, self.year)
    }
}

/// Season of a calendar month (1-12); `Unknown` outside that range.
pub fn from_month(month: u32) -> MediaSeason {
    match month {
        12 | 1 | 2 => MediaSeason::Winter,
        3..=5 => MediaSeason::Spring,
        6..=8 => MediaSeason::Summer,
        9..=11 => MediaSeason::Fall,
        _ => MediaSeason::Unknown,
    }
}

/// The season airing on `today`.
pub fn current(today: NaiveDate) -> SeasonYear {
    SeasonYear::containing(today)
}

/// The season after the one airing on `today`.
pub fn upcoming(today: NaiveDate) -> SeasonYear {
    current(today).next()
}

/// Fills whichever of `season` and `year` is missing from the season airing
/// on `today`. A season without a year means its next or current run, so
/// `Winter` asked in December is the winter that has just begun.
pub fn resolve(season: Option<MediaSeason>, year: Option<i32>, today: NaiveDate) -> SeasonYear {
    let now = current(today);
    SeasonYear::new(season.unwrap_or(now.season), year.unwrap_or(now.year))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn every_month_has_a_season() {
        for month in 1..=12 {
            assert_ne!(from_month(month), MediaSeason::Unknown, "month {month}");
        }
        assert_eq!(from_month(0), MediaSeason::Unknown);
        assert_eq!(from_month(13), MediaSeason::Unknown);
    }

    #[test]
    fn january_and_december_share_a_winter() {
        assert_eq!(current(date(2024, 1, 5)), current(date(2023, 12, 5)));
    }

    #[test]
    fn fall_rolls_into_next_year() {
        let fall = current(date(2024, 10, 1));
        assert_eq!(fall, SeasonYear::new(MediaSeason::Fall, 2024));
        assert_eq!(upcoming(date(2024, 10, 1)), SeasonYear::new(MediaSeason::Winter, 2025));
    }

    #[test]
    fn resolve_fills_missing_parts() {
        let december = date(2023, 12, 20);
        assert_eq!(
            resolve(Some(MediaSeason::Winter), None, december),
            SeasonYear::new(MediaSeason::Winter, 2024)
        );
        assert_eq!(
            resolve(None, Some(2019), december),
            SeasonYear::new(MediaSeason::Winter, 2019)
        );
        assert_eq!(
            resolve(Some(MediaSeason::Summer), Some(2010), december),
            SeasonYear::new(MediaSeason::Summer, 2010)
        );
        assert_eq!(resolve(None, None, december), current(december));
    }

    #[test]
    fn next_and_previous_are_inverse() {
        for season in MediaSeason::ALL {
            let start = SeasonYear::new(season, 2020);
            assert_eq!(start.next().previous(), start);
            assert_eq!(start.previous().next(), start);
        }
    }

    #[test]
    fn display_reads_naturally() {
        assert_eq!(SeasonYear::new(MediaSeason::Summer, 2022).to_string(), "Summer 2022");
    }
}
