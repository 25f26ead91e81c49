//! Configuration for the statutory vacation rules.
//!
//! The entitlement scale and holiday set are statutory values; they ship as
//! YAML files and as `Default` implementations so the pure calculation
//! functions are testable without fixtures.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    FixedHoliday, HolidayConfig, MoveableHoliday, ScaleConfig, ScaleTier, StatuteMetadata,
};
