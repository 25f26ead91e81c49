//! Error types for the Vacation Accrual Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during accrual calculation.

use thiserror::Error;

/// The main error type for the Vacation Accrual Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use vacation_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The entitlement scale configuration was inconsistent.
    #[error("Invalid entitlement scale: {message}")]
    InvalidScale {
        /// A description of what made the scale invalid.
        message: String,
    },

    /// An accrual period contained inconsistent data.
    #[error("Invalid accrual period '{label}': {message}")]
    InvalidPeriod {
        /// The label of the invalid period.
        label: String,
        /// A description of what made the period invalid.
        message: String,
    },

    /// A vacation record contained inconsistent data.
    #[error("Invalid vacation record: {message}")]
    InvalidVacation {
        /// A description of what made the record invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_scale_displays_message() {
        let error = EngineError::InvalidScale {
            message: "tiers overlap at 5 years".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid entitlement scale: tiers overlap at 5 years"
        );
    }

    #[test]
    fn test_invalid_period_displays_label_and_message() {
        let error = EngineError::InvalidPeriod {
            label: "Year 3".to_string(),
            message: "end date before start date".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid accrual period 'Year 3': end date before start date"
        );
    }

    #[test]
    fn test_invalid_vacation_displays_message() {
        let error = EngineError::InvalidVacation {
            message: "negative business days".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid vacation record: negative business days"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
