//! Error Types for Configuration and Evaluation Failures
//!
//! ## Design Philosophy
//!
//! Condition errors fall on two sides of a boundary:
//!
//! 1. **Configuration errors** ([`ConfigError`]) are produced while an
//!    administrator edits a condition. They are expected, user-facing, and
//!    carry the name of the configuration field they belong to so a form
//!    layer can show them next to the right input.
//!
//! 2. **Evaluation errors** ([`EvalError`]) should not happen in normal flow.
//!    A validated configuration cannot produce them; they only surface when a
//!    configuration was restored from storage without going through
//!    [`RangeCondition::configure`](crate::RangeCondition::configure). Treat
//!    them as integrity faults: log them, don't show them to shoppers.
//!
//! A shipment whose weight is not known yet is *not* an error. Evaluation
//! simply returns `false` until the weight is available.
//!
//! All errors are `Copy`, carry only `&'static str` context, and work without
//! an allocator.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use parcelrule_core::{ComparisonOperator, ConfigError, RangeCondition, Weight, WeightUnit};
//!
//! let min = Weight::from_int(5, WeightUnit::Kilogram).unwrap();
//! let max = Weight::from_int(3, WeightUnit::Kilogram).unwrap();
//!
//! match RangeCondition::configure(ComparisonOperator::BetweenExclusive, min, Some(max)) {
//!     Ok(_config) => {
//!         // persist the config
//!     }
//!     Err(err @ ConfigError::InvalidRangeBound { .. }) => {
//!         assert_eq!(err.field(), "max_weight");
//!         // show err next to the "Max weight" input
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Message used when an exclusive range has max <= min
pub const MAX_NOT_ABOVE_MIN: &str = "\"Max weight\" cannot be less or equal to \"Weight\"";

/// Message used when an inclusive range has max < min
pub const MAX_BELOW_MIN: &str = "\"Max weight\" cannot be less than \"Weight\"";

/// Problems building or converting a single measurement
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementError {
    /// Physical quantities like weight cannot be negative
    #[error("Measurement cannot be negative")]
    Negative,

    /// Unit tag is not part of the unit family
    #[error("Unknown unit of measurement")]
    UnknownUnit,

    /// Magnitude is not a decimal number
    #[error("Invalid number")]
    InvalidNumber,

    /// Conversion left the representable decimal range
    #[error("Arithmetic overflow while converting measurement")]
    Overflow,
}

/// Configuration rejected by [`RangeCondition::configure`](crate::RangeCondition::configure)
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A between operator was chosen without a usable max threshold
    #[error("\"Max weight\" cannot be empty")]
    MissingRangeBound,

    /// Max threshold does not clear the min threshold
    #[error("{reason}")]
    InvalidRangeBound {
        /// Human-readable description of the violated bound
        reason: &'static str,
    },

    /// Operator tag outside the recognized set
    #[error("Invalid operator")]
    UnknownOperator,

    /// Threshold could not be converted to the condition unit
    #[error("Invalid measurement: {0}")]
    Measurement(MeasurementError),
}

impl ConfigError {
    /// Configuration field the error should be displayed against
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingRangeBound
            | Self::InvalidRangeBound { .. }
            | Self::Measurement(_) => "max_weight",
            Self::UnknownOperator => "operator",
        }
    }
}

impl From<MeasurementError> for ConfigError {
    fn from(err: MeasurementError) -> Self {
        Self::Measurement(err)
    }
}

/// Integrity faults raised by [`RangeCondition::evaluate`](crate::RangeCondition::evaluate)
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// Between operator stored without a max threshold
    #[error("Max weight is not defined")]
    MissingRangeBound,

    /// Stored operator tag is not recognized
    #[error("Invalid operator")]
    UnknownOperator,

    /// Subject or threshold could not be converted
    #[error("Invalid measurement: {0}")]
    Measurement(MeasurementError),
}

impl From<MeasurementError> for EvalError {
    fn from(err: MeasurementError) -> Self {
        Self::Measurement(err)
    }
}
