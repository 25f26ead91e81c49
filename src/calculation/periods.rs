//! Accrual period generation.
//!
//! This module produces the sequence of one-year accrual periods from an
//! employee's hire date up to a reference date. Each period carries the
//! entitlement tier for its ordinal year of service, so historical periods
//! keep the entitlement they were earned under.

use chrono::{Datelike, NaiveDate};

use crate::config::ScaleConfig;
use crate::models::{AccrualPeriod, NOMINAL_DAYS_WORKED};

/// Adds whole years to a date, clamping February 29 to February 28 when the
/// target year is not a leap year.
fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    date.with_year(date.year() + years).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(date.year() + years, 2, 28)
            .expect("February 28 exists in every year")
    })
}

/// Generates the accrual periods completed between a hire date and a
/// reference date.
///
/// Walks a cursor forward from the hire date in one-year steps. Each
/// completed year emits a period spanning `[cursor, cursor + 1 year - 1 day]`
/// with the nominal 360 days worked and the entitlement tier for its
/// ordinal year number. The walk stops as soon as the next period would end
/// after `as_of`: the current partial year produces no period until it
/// completes.
///
/// The result is contiguous, non-overlapping, and idempotent for a fixed
/// `(hire_date, as_of)` pair. Termination is guaranteed because the cursor
/// strictly advances one year per iteration.
///
/// # Arguments
///
/// * `hire_date` - The canonical hire date (period 1 starts here)
/// * `as_of` - The reference date periods may not extend past
/// * `scale` - The entitlement scale used to price each ordinal year
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::generate_periods;
/// use vacation_engine::config::ScaleConfig;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2022, 6, 30).unwrap();
///
/// let periods = generate_periods(hire, as_of, &ScaleConfig::default());
/// assert_eq!(periods.len(), 2);
/// assert_eq!(periods[0].label, "Year 1");
/// assert_eq!(periods[0].end, NaiveDate::from_ymd_opt(2020, 12, 31).unwrap());
/// assert_eq!(periods[1].start, NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
/// ```
pub fn generate_periods(
    hire_date: NaiveDate,
    as_of: NaiveDate,
    scale: &ScaleConfig,
) -> Vec<AccrualPeriod> {
    let mut periods = Vec::new();
    let mut cursor = hire_date;
    let mut ordinal: u32 = 1;

    loop {
        let next_start = add_years(cursor, 1);
        if next_start > as_of {
            break;
        }
        let end = next_start
            .pred_opt()
            .expect("the day before a generated period boundary is representable");

        periods.push(AccrualPeriod {
            ordinal,
            label: format!("Year {}", ordinal),
            start: cursor,
            end,
            days_worked: NOMINAL_DAYS_WORKED,
            entitlement_days: scale.days_for_year(ordinal as i32),
        });

        cursor = next_start;
        ordinal += 1;
    }

    periods
}
