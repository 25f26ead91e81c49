//! National holiday calendar.
//!
//! This module resolves the national holiday set for any calendar year:
//! fixed-date holidays plus the Easter-relative moveable holidays. Holidays
//! are computed per-year on demand rather than hard-coded per date, so the
//! calendar extends indefinitely without maintenance.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calculation::easter_sunday;
use crate::config::{FixedHoliday, HolidayConfig, MoveableHoliday};

/// A dated, named holiday resolved for a specific year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g. "Good Friday").
    pub name: String,
}

/// Resolves national holidays for any calendar year.
///
/// Built from a [`HolidayConfig`]; the default configuration carries the
/// statutory Bolivian national set: six fixed dates plus Carnival Monday
/// and Tuesday, Good Friday, and Corpus Christi relative to Easter Sunday.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::default();
///
/// // Good Friday 2024 (Easter Sunday is 2024-03-31)
/// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2024, 3, 29).unwrap()));
/// // Independence Day, fixed every year
/// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2024, 8, 6).unwrap()));
/// // An ordinary working day
/// assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2024, 6, 5).unwrap()));
/// ```
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    fixed: Vec<FixedHoliday>,
    moveable: Vec<MoveableHoliday>,
}

impl HolidayCalendar {
    /// Creates a calendar from a holiday configuration.
    pub fn new(config: &HolidayConfig) -> Self {
        Self {
            fixed: config.fixed.clone(),
            moveable: config.moveable.clone(),
        }
    }

    /// Checks whether a date is a national holiday.
    ///
    /// Fixed holidays match on month and day in every year; moveable
    /// holidays are resolved from Easter Sunday of the date's year.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        if self
            .fixed
            .iter()
            .any(|f| f.month == date.month() && f.day == date.day())
        {
            return true;
        }

        let easter = easter_sunday(date.year());
        self.moveable
            .iter()
            .any(|m| easter + Duration::days(m.easter_offset) == date)
    }

    /// Resolves the full holiday set for a calendar year, sorted by date.
    ///
    /// Fixed entries that do not exist in the given year (e.g. a configured
    /// February 29 in a non-leap year) are skipped.
    pub fn holidays_for_year(&self, year: i32) -> Vec<Holiday> {
        let mut holidays: Vec<Holiday> = self
            .fixed
            .iter()
            .filter_map(|f| {
                NaiveDate::from_ymd_opt(year, f.month, f.day).map(|date| Holiday {
                    date,
                    name: f.name.clone(),
                })
            })
            .collect();

        let easter = easter_sunday(year);
        holidays.extend(self.moveable.iter().map(|m| Holiday {
            date: easter + Duration::days(m.easter_offset),
            name: m.name.clone(),
        }));

        holidays.sort_by_key(|h| h.date);
        holidays
    }

    /// Resolves the holidays falling inside an inclusive date range.
    ///
    /// Returns an empty list when `from > to`.
    pub fn holidays_in_range(&self, from: NaiveDate, to: NaiveDate) -> Vec<Holiday> {
        if from > to {
            return Vec::new();
        }
        let mut holidays = Vec::new();
        for year in from.year()..=to.year() {
            holidays.extend(
                self.holidays_for_year(year)
                    .into_iter()
                    .filter(|h| h.date >= from && h.date <= to),
            );
        }
        holidays
    }
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self::new(&HolidayConfig::default())
    }
}
