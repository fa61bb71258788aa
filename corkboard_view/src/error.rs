// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Error returned when a configuration value is out of range.
///
/// Every `*Config::default()` in the Corkboard crates is valid; this error is
/// only produced by the validating constructors.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// A field that must be zero or positive was negative.
    #[error("`{field}` must not be negative (got {value})")]
    NegativeValue {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A field was NaN or infinite.
    #[error("`{field}` must be finite")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A `[min, max]` range had `min > max` or a non-positive lower bound.
    #[error("invalid range [{min}, {max}]")]
    InvertedRange {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
}

/// Checks that `value` is finite and not negative.
///
/// Shared by the config constructors of the sibling crates.
pub fn non_negative(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(ConfigError::NegativeValue { field, value });
    }
    Ok(value)
}
