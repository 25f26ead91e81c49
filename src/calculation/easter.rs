//! Gregorian Easter computation.
//!
//! The moveable national holidays (Carnival, Good Friday, Corpus Christi)
//! are all defined relative to Easter Sunday, so the calendar extends to
//! any year without maintenance.

use chrono::NaiveDate;

/// Computes the date of Easter Sunday for a given year.
///
/// Uses the anonymous Gregorian algorithm (Meeus/Jones/Butcher) in pure
/// integer arithmetic. Valid for all Gregorian calendar years.
///
/// # Arguments
///
/// * `year` - The calendar year
///
/// # Returns
///
/// The date of Easter Sunday, always in March or April.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::easter_sunday;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     easter_sunday(2024),
///     NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
/// );
/// assert_eq!(
///     easter_sunday(2025),
///     NaiveDate::from_ymd_opt(2025, 4, 20).unwrap()
/// );
/// ```
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .expect("Easter algorithm yields a valid March or April date")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};
    use proptest::prelude::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    /// ES-001: reference year 2024
    #[test]
    fn test_easter_2024() {
        assert_eq!(easter_sunday(2024), make_date("2024-03-31"));
    }

    /// ES-002: reference year 2025
    #[test]
    fn test_easter_2025() {
        assert_eq!(easter_sunday(2025), make_date("2025-04-20"));
    }

    /// ES-003: known historical and future dates
    #[test]
    fn test_easter_known_years() {
        assert_eq!(easter_sunday(2016), make_date("2016-03-27"));
        assert_eq!(easter_sunday(2018), make_date("2018-04-01"));
        assert_eq!(easter_sunday(2020), make_date("2020-04-12"));
        assert_eq!(easter_sunday(2021), make_date("2021-04-04"));
        assert_eq!(easter_sunday(2022), make_date("2022-04-17"));
        assert_eq!(easter_sunday(2023), make_date("2023-04-09"));
        assert_eq!(easter_sunday(2026), make_date("2026-04-05"));
        assert_eq!(easter_sunday(2030), make_date("2030-04-21"));
    }

    /// ES-004: earliest and latest possible Easter
    #[test]
    fn test_easter_extremes() {
        // March 22 is the earliest possible date (last occurred 1818)
        assert_eq!(easter_sunday(1818), make_date("1818-03-22"));
        // April 25 is the latest possible date (last occurred 1943)
        assert_eq!(easter_sunday(1943), make_date("1943-04-25"));
    }

    proptest! {
        /// ES-PROP-001: Easter always falls on a Sunday in March or April
        #[test]
        fn prop_easter_is_a_spring_sunday(year in 1900i32..2200) {
            let easter = easter_sunday(year);
            prop_assert_eq!(easter.weekday(), Weekday::Sun);
            prop_assert!(easter.month() == 3 || easter.month() == 4);
        }
    }
}
