//! Period reconciliation.
//!
//! This module keeps an employee's stored accrual periods in line with the
//! current canonical hire date. Stored periods go stale when the hire date
//! is edited after they were generated; reconciliation detects this and
//! rebuilds the sequence.
//!
//! Reconciliation is keyed by the immutable period ordinal rather than
//! delete-all/reinsert-all: date ranges are always owned by the generator
//! and rebased in place, while manual overrides (label, days worked,
//! entitlement days) survive on matching ordinals. Only a forced pass
//! resets overrides, and that loss is irreversible, so it is reported
//! explicitly.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::generate_periods;
use crate::config::ScaleConfig;
use crate::models::AccrualPeriod;

/// What a reconciliation pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileReport {
    /// Whether the stored periods no longer matched the hire date (the
    /// ordinal-1 period existed with a different start).
    pub stale: bool,
    /// Whether the pass was a forced recalculation, discarding manual
    /// overrides.
    pub forced: bool,
    /// Periods whose date range was moved to the generated range, or reset
    /// entirely on a forced pass.
    pub rebased: usize,
    /// Periods newly generated because no stored period had their ordinal.
    pub appended: usize,
    /// Stored periods dropped: ordinals past the completed tenure,
    /// duplicates, or everything when no hire date is known.
    pub dropped: usize,
}

impl ReconcileReport {
    /// Returns true when the pass changed nothing.
    pub fn is_noop(&self) -> bool {
        self.rebased == 0 && self.appended == 0 && self.dropped == 0
    }
}

/// The outcome of a reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconciliation {
    /// The reconciled period sequence, ordered by ordinal.
    pub periods: Vec<AccrualPeriod>,
    /// What the pass changed.
    pub report: ReconcileReport,
}

/// Reconciles stored accrual periods against the current hire date.
///
/// The target sequence is what [`generate_periods`] produces for
/// `(hire_date, as_of)`. Each target ordinal is then resolved:
/// - a stored period with the same ordinal keeps its `label`,
///   `days_worked`, and `entitlement_days`, and its date range is rebased
///   to the generated range when they differ
/// - on a forced pass the stored period is replaced outright
/// - ordinals with no stored period are appended from the generator
///
/// Stored ordinals past the target (or duplicated) are dropped. When
/// `hire_date` is `None` the result is an empty sequence: missing hire
/// data is a valid insufficient-data state, not an error.
///
/// The pass is idempotent: feeding its output back in with the same
/// arguments reports no changes.
///
/// # Example
///
/// ```
/// use vacation_engine::calculation::{generate_periods, reconcile};
/// use vacation_engine::config::ScaleConfig;
/// use chrono::NaiveDate;
///
/// let scale = ScaleConfig::default();
/// let as_of = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
///
/// // Periods generated for a 2020-01-01 hire date...
/// let old_hire = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let stored = generate_periods(old_hire, as_of, &scale);
///
/// // ...go stale when the hire date is edited to 2020-03-01.
/// let new_hire = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
/// let result = reconcile(Some(new_hire), as_of, &stored, false, &scale);
///
/// assert!(result.report.stale);
/// assert_eq!(result.periods[0].start, new_hire);
/// ```
pub fn reconcile(
    hire_date: Option<NaiveDate>,
    as_of: NaiveDate,
    existing: &[AccrualPeriod],
    force: bool,
    scale: &ScaleConfig,
) -> Reconciliation {
    let Some(hire) = hire_date else {
        return Reconciliation {
            periods: Vec::new(),
            report: ReconcileReport {
                stale: false,
                forced: force,
                rebased: 0,
                appended: 0,
                dropped: existing.len(),
            },
        };
    };

    // First occurrence wins for duplicated ordinals.
    let mut by_ordinal: HashMap<u32, &AccrualPeriod> = HashMap::new();
    for period in existing {
        by_ordinal.entry(period.ordinal).or_insert(period);
    }

    let stale = by_ordinal
        .get(&1)
        .is_some_and(|first| first.start != hire);

    let target = generate_periods(hire, as_of, scale);
    let mut report = ReconcileReport {
        stale,
        forced: force,
        ..ReconcileReport::default()
    };
    let mut periods = Vec::with_capacity(target.len());
    let mut kept = 0usize;

    for generated in target {
        match by_ordinal.remove(&generated.ordinal) {
            Some(stored) if !force => {
                kept += 1;
                if stored.start != generated.start || stored.end != generated.end {
                    report.rebased += 1;
                }
                periods.push(AccrualPeriod {
                    ordinal: generated.ordinal,
                    label: stored.label.clone(),
                    start: generated.start,
                    end: generated.end,
                    days_worked: stored.days_worked,
                    entitlement_days: stored.entitlement_days,
                });
            }
            Some(_) => {
                kept += 1;
                report.rebased += 1;
                periods.push(generated);
            }
            None => {
                report.appended += 1;
                periods.push(generated);
            }
        }
    }

    report.dropped = existing.len() - kept;

    Reconciliation { periods, report }
}
