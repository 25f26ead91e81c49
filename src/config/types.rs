//! Configuration types for the statutory vacation rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. The `Default`
//! implementations carry the statutory Bolivian values so calculations
//! work without loading files.

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about the statute the engine implements.
#[derive(Debug, Clone, Deserialize)]
pub struct StatuteMetadata {
    /// Short statute code (e.g. "LGT").
    pub code: String,
    /// The human-readable name of the statute.
    pub name: String,
    /// The version or revision date of the configuration.
    pub version: String,
    /// URL to the statute text.
    pub source_url: String,
}

/// One tier of the entitlement scale.
#[derive(Debug, Clone, Deserialize)]
pub struct ScaleTier {
    /// First year of service the tier applies to (inclusive).
    pub min_years: u32,
    /// Last year of service the tier applies to (inclusive); open-ended
    /// when absent.
    #[serde(default)]
    pub max_years: Option<u32>,
    /// Vacation days granted per year in this tier.
    pub days: u32,
}

/// The entitlement scale: vacation days per year, by years of service.
///
/// The statutory default grants 15 days for years 1-5, 20 days for years
/// 6-10, and 30 days from year 11 on; under one year of service there is
/// no entitlement.
#[derive(Debug, Clone, Deserialize)]
pub struct ScaleConfig {
    /// Reference to the statute article defining the scale.
    pub clause: String,
    /// The scale tiers, ordered by years of service.
    pub tiers: Vec<ScaleTier>,
}

impl ScaleConfig {
    /// Looks up the entitlement tier covering a given year of service.
    fn tier_for_year(&self, years_of_service: u32) -> Option<&ScaleTier> {
        self.tiers.iter().find(|t| {
            years_of_service >= t.min_years
                && t.max_years.map_or(true, |max| years_of_service <= max)
        })
    }

    /// Returns the vacation days granted for a given year of service.
    ///
    /// Years below the first tier (including zero) grant no entitlement;
    /// negative input is clamped to zero rather than raising, since tenure
    /// computation already floors at zero.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_engine::config::ScaleConfig;
    ///
    /// let scale = ScaleConfig::default();
    /// assert_eq!(scale.days_for_year(0), 0);
    /// assert_eq!(scale.days_for_year(1), 15);
    /// assert_eq!(scale.days_for_year(5), 15);
    /// assert_eq!(scale.days_for_year(6), 20);
    /// assert_eq!(scale.days_for_year(10), 20);
    /// assert_eq!(scale.days_for_year(11), 30);
    /// ```
    pub fn days_for_year(&self, years_of_service: i32) -> u32 {
        let years = years_of_service.max(0) as u32;
        self.tier_for_year(years).map_or(0, |t| t.days)
    }

    /// Returns display text for the tier covering a given year of service.
    pub fn description_for(&self, years_of_service: i32) -> String {
        let years = years_of_service.max(0) as u32;
        match self.tier_for_year(years) {
            None => "No entitlement yet (under 1 year of service)".to_string(),
            Some(tier) => match tier.max_years {
                Some(max) => format!(
                    "{} days/year (years {}-{})",
                    tier.days, tier.min_years, max
                ),
                None => format!("{} days/year (years {}+)", tier.days, tier.min_years),
            },
        }
    }

    /// Validates the scale's internal consistency.
    ///
    /// # Returns
    ///
    /// `Ok(())` when the tiers form an ascending, contiguous,
    /// non-overlapping ladder whose last tier is open-ended, or an
    /// [`EngineError::InvalidScale`] otherwise.
    pub fn validate(&self) -> EngineResult<()> {
        if self.tiers.is_empty() {
            return Err(EngineError::InvalidScale {
                message: "scale has no tiers".to_string(),
            });
        }
        for (i, tier) in self.tiers.iter().enumerate() {
            if let Some(max) = tier.max_years {
                if max < tier.min_years {
                    return Err(EngineError::InvalidScale {
                        message: format!(
                            "tier {} has max_years {} below min_years {}",
                            i + 1,
                            max,
                            tier.min_years
                        ),
                    });
                }
            } else if i + 1 != self.tiers.len() {
                return Err(EngineError::InvalidScale {
                    message: format!("tier {} is open-ended but not last", i + 1),
                });
            }
        }
        for pair in self.tiers.windows(2) {
            let prev_max = pair[0].max_years.expect("checked above: only the last tier is open-ended");
            if pair[1].min_years != prev_max + 1 {
                return Err(EngineError::InvalidScale {
                    message: format!(
                        "tiers are not contiguous: {} follows a tier ending at {}",
                        pair[1].min_years, prev_max
                    ),
                });
            }
        }
        if self.tiers.last().map_or(false, |t| t.max_years.is_some()) {
            return Err(EngineError::InvalidScale {
                message: "last tier must be open-ended".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            clause: "LGT Art. 33".to_string(),
            tiers: vec![
                ScaleTier {
                    min_years: 1,
                    max_years: Some(5),
                    days: 15,
                },
                ScaleTier {
                    min_years: 6,
                    max_years: Some(10),
                    days: 20,
                },
                ScaleTier {
                    min_years: 11,
                    max_years: None,
                    days: 30,
                },
            ],
        }
    }
}

/// A holiday falling on the same month and day every year.
#[derive(Debug, Clone, Deserialize)]
pub struct FixedHoliday {
    /// Calendar month (1-12).
    pub month: u32,
    /// Day of month.
    pub day: u32,
    /// The name of the holiday.
    pub name: String,
}

/// A holiday defined as a signed day offset from Easter Sunday.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveableHoliday {
    /// Days relative to Easter Sunday (negative is before).
    pub easter_offset: i64,
    /// The name of the holiday.
    pub name: String,
}

/// The national holiday set: fixed dates plus Easter-relative entries.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayConfig {
    /// Holidays on the same date every year.
    pub fixed: Vec<FixedHoliday>,
    /// Holidays computed from Easter Sunday.
    pub moveable: Vec<MoveableHoliday>,
}

impl Default for HolidayConfig {
    fn default() -> Self {
        Self {
            fixed: vec![
                FixedHoliday {
                    month: 1,
                    day: 1,
                    name: "New Year's Day".to_string(),
                },
                FixedHoliday {
                    month: 1,
                    day: 22,
                    name: "Plurinational State Foundation Day".to_string(),
                },
                FixedHoliday {
                    month: 5,
                    day: 1,
                    name: "Labour Day".to_string(),
                },
                FixedHoliday {
                    month: 8,
                    day: 6,
                    name: "Independence Day".to_string(),
                },
                FixedHoliday {
                    month: 11,
                    day: 2,
                    name: "All Souls' Day".to_string(),
                },
                FixedHoliday {
                    month: 12,
                    day: 25,
                    name: "Christmas Day".to_string(),
                },
            ],
            moveable: vec![
                MoveableHoliday {
                    easter_offset: -48,
                    name: "Carnival Monday".to_string(),
                },
                MoveableHoliday {
                    easter_offset: -47,
                    name: "Carnival Tuesday".to_string(),
                },
                MoveableHoliday {
                    easter_offset: -2,
                    name: "Good Friday".to_string(),
                },
                MoveableHoliday {
                    easter_offset: 60,
                    name: "Corpus Christi".to_string(),
                },
            ],
        }
    }
}
