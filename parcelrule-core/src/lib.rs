//! Core condition engine for ParcelRule
//!
//! Decides whether a shipment satisfies a configured weight comparison.
//! Everything here is a pure function of a validated configuration and one
//! measured weight, so the crate builds without `std` and never allocates.
//!
//! Key constraints:
//! - Exact decimal arithmetic (no float drift when comparing `1000 g` to `1 kg`)
//! - Range invariants checked once, at configuration time
//! - Unknown weights are "not yet satisfiable", never an error
//!
//! ```
//! use parcelrule_core::{ComparisonOperator, RangeCondition, Weight, WeightUnit};
//!
//! let config = RangeCondition::configure(
//!     ComparisonOperator::GreaterThan,
//!     Weight::from_int(5, WeightUnit::Kilogram)?,
//!     None,
//! )?;
//!
//! let parcel = Weight::from_int(6, WeightUnit::Kilogram)?;
//! assert!(RangeCondition::evaluate(&config, Some(&parcel))?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod condition;
pub mod conditions;
pub mod errors;
pub mod measurement;
pub mod operator;
pub mod traits;
pub mod units;

// Public API
pub use condition::{RangeCondition, RangeConditionConfig};
pub use conditions::ShipmentWeight;
pub use errors::{ConfigError, ConfigResult, EvalError, EvalResult, MeasurementError};
pub use measurement::{Measurement, Weight};
pub use operator::ComparisonOperator;
pub use traits::{Condition, ConditionDefinition, Shipment};
pub use units::{Unit, WeightUnit};

/// Re-exported so callers can build magnitudes without naming the decimal crate
pub use rust_decimal::Decimal;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
