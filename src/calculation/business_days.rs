//! Business-day counting.
//!
//! This module provides day-type detection and the business-day counter
//! used to price vacation requests: Sundays and holidays contribute
//! nothing, Saturdays contribute half a day, every other day contributes a
//! full day.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::HolidayCalendar;

/// Represents the type of day for business-day counting.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday - counts as a full business day.
    Weekday,
    /// Saturday - counts as half a business day.
    Saturday,
    /// Sunday - never counts.
    Sunday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::{DayType, day_type};
/// use chrono::NaiveDate;
///
/// // 2024-06-08 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap();
/// assert_eq!(day_type(saturday), DayType::Saturday);
///
/// // 2024-06-03 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
/// assert_eq!(day_type(monday), DayType::Weekday);
/// ```
pub fn day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Counts the business days in an inclusive date range.
///
/// Iterates every calendar day in `[from, to]`; for each day:
/// - Sunday contributes 0
/// - a holiday contributes 0, including a holiday falling on a Saturday
/// - a non-holiday Saturday contributes 0.5
/// - any other day contributes 1
///
/// The result may be fractional in multiples of 0.5.
///
/// # Arguments
///
/// * `from` - The first day of the range (inclusive)
/// * `to` - The last day of the range (inclusive)
/// * `calendar` - The holiday calendar to consult
///
/// # Returns
///
/// The business-day count, or zero when `from > to` (fails closed; callers
/// wanting a distinct error must validate range ordering themselves).
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::{HolidayCalendar, business_days};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let calendar = HolidayCalendar::default();
/// // Monday 2024-06-03 through Sunday 2024-06-09: five weekdays plus a
/// // half-day Saturday.
/// let from = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
/// let to = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
/// assert_eq!(business_days(from, to, &calendar), Decimal::new(55, 1));
/// ```
pub fn business_days(from: NaiveDate, to: NaiveDate, calendar: &HolidayCalendar) -> Decimal {
    if from > to {
        return Decimal::ZERO;
    }

    let mut total = Decimal::ZERO;
    let mut day = from;
    while day <= to {
        total += match day_type(day) {
            DayType::Sunday => Decimal::ZERO,
            DayType::Saturday if calendar.is_holiday(day) => Decimal::ZERO,
            DayType::Saturday => Decimal::new(5, 1),
            DayType::Weekday if calendar.is_holiday(day) => Decimal::ZERO,
            DayType::Weekday => Decimal::ONE,
        };
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    total
}
