//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the statute
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::calculation::HolidayCalendar;
use crate::error::{EngineError, EngineResult};

use super::types::{HolidayConfig, ScaleConfig, StatuteMetadata};

/// Loads and provides access to the statute configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides the entitlement scale and holiday calendar used by the engine.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/lgt/
/// ├── statute.yaml   # Statute metadata
/// ├── scale.yaml     # Entitlement scale tiers
/// └── holidays.yaml  # Fixed and Easter-relative holidays
/// ```
///
/// # Example
///
/// ```no_run
/// use vacation_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/lgt").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 29).unwrap();
/// assert!(loader.calendar().is_holiday(date)); // Good Friday 2024
/// assert_eq!(loader.scale().days_for_year(3), 15);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    statute: StatuteMetadata,
    scale: ScaleConfig,
    calendar: HolidayCalendar,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g. "./config/lgt")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The entitlement scale fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let statute = Self::load_yaml::<StatuteMetadata>(&path.join("statute.yaml"))?;
        let scale = Self::load_yaml::<ScaleConfig>(&path.join("scale.yaml"))?;
        scale.validate()?;
        let holidays = Self::load_yaml::<HolidayConfig>(&path.join("holidays.yaml"))?;

        Ok(Self {
            statute,
            scale,
            calendar: HolidayCalendar::new(&holidays),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the statute metadata.
    pub fn statute(&self) -> &StatuteMetadata {
        &self.statute
    }

    /// Returns the entitlement scale.
    pub fn scale(&self) -> &ScaleConfig {
        &self.scale
    }

    /// Returns the holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }
}
