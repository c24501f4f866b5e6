//! Stored Condition Configuration, Schemas and Registry
//!
//! ## Overview
//!
//! `parcelrule-core` only knows validated, typed configurations. Everything
//! that crosses a storage or user boundary lives here:
//!
//! - [`config`]: the configuration map as it is persisted (tags and decimal
//!   strings), with JSON import/export
//! - [`schemas`]: an Avro record schema for the same map and binary encoding
//! - [`validation`]: raw submitted values turned into a configuration or a
//!   report of field-level issues
//! - [`registry`]: condition kinds keyed by id, building live conditions from
//!   stored configuration
//!
//! ## Stored Configuration Shape
//!
//! ```json
//! {
//!   "operator": "> <",
//!   "weight": { "number": "2", "unit": "kg" },
//!   "max_weight": { "number": "10", "unit": "kg" }
//! }
//! ```
//!
//! Numbers are kept as strings so the exact decimal an administrator typed
//! survives a round trip through storage.
//!
//! ## Usage Example
//!
//! ```rust
//! use parcelrule_core::{Condition, Shipment, Weight, WeightUnit};
//! use parcelrule_schemas::ConditionRegistry;
//! use serde_json::json;
//!
//! struct Parcel(Weight);
//!
//! impl Shipment for Parcel {
//!     fn weight(&self) -> Option<Weight> {
//!         Some(self.0)
//!     }
//! }
//!
//! let registry = ConditionRegistry::new();
//! registry.load_defaults()?;
//!
//! let condition = registry.create(
//!     "shipment_weight",
//!     &json!({
//!         "operator": ">= <=",
//!         "weight": { "number": "1", "unit": "kg" },
//!         "max_weight": { "number": "5", "unit": "kg" }
//!     }),
//! )?;
//!
//! let parcel = Parcel(Weight::from_int(3, WeightUnit::Pound)?);
//! assert!(condition.evaluate(&parcel)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use parcelrule_core::EvalError;

pub mod config;
pub mod registry;
pub mod schemas;
pub mod validation;

pub use config::{StoredMeasurement, StoredWeightConfig};
pub use registry::{ConditionRegistry, ShipmentCondition, GLOBAL_REGISTRY};
pub use validation::{validate_submission, SubmittedValues, ValidationIssue, ValidationReport};

/// Schema-related errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum SchemaError {
    #[error("Failed to parse schema: {0}")]
    ParseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Serialization failed: {0}")]
    SerializationError(String),

    #[error("Condition is not configured")]
    Unconfigured,

    #[error("Condition error: {0}")]
    Condition(EvalError),
}

impl From<EvalError> for SchemaError {
    fn from(err: EvalError) -> Self {
        Self::Condition(err)
    }
}
