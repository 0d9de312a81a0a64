//! Validation trait and helpers for settings types

use crate::error::{ConfigError, Result};

/// Trait for validating settings values
///
/// Checks that the type system cannot express (numeric bounds, positivity)
/// live here. Implementations stop at the first violated rule.
pub trait Validate {
    /// Returns `Ok(())` if validation passes, or a `ConfigError` naming the
    /// field and the violated constraint.
    fn validate(&self) -> Result<()>;
}

/// Check that a float lies within `min..=max`
///
/// NaN is always out of range.
pub fn validate_range(field: impl Into<String>, value: f64, min: f64, max: f64) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(ConfigError::OutOfRange {
            field: field.into(),
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Check that an integer is strictly above `min`
pub fn validate_positive(field: impl Into<String>, value: u64, min: u64) -> Result<()> {
    if value <= min {
        return Err(ConfigError::InvalidInteger {
            field: field.into(),
            value,
            min,
        });
    }
    Ok(())
}
