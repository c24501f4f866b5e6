//! Stored Condition Configuration
//!
//! The persisted form of a shipment weight condition. Values are kept exactly
//! as they are stored: operator tags and unit tags as strings, magnitudes as
//! decimal strings. Turning them back into a typed configuration restores it
//! as-is; the range invariants were checked when it was first configured and
//! are not checked again here.

use parcelrule_core::{
    ComparisonOperator, EvalError, RangeCondition, RangeConditionConfig, Unit, Weight,
};
use serde::{Deserialize, Serialize};

use crate::SchemaError;

/// `{number, unit}` pair as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMeasurement {
    /// Decimal magnitude, e.g. `"2.5"`
    pub number: String,

    /// Unit tag, e.g. `"kg"`
    pub unit: String,
}

impl StoredMeasurement {
    /// Build from raw strings
    pub fn new(number: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            unit: unit.into(),
        }
    }

    /// Store a typed weight
    pub fn from_weight(weight: &Weight) -> Self {
        Self::new(weight.number().to_string(), weight.unit().tag())
    }

    /// True when no magnitude was entered
    pub fn is_blank(&self) -> bool {
        self.number.trim().is_empty()
    }

    /// Parse into a typed weight
    pub fn to_weight(&self) -> Result<Weight, EvalError> {
        Weight::parse(&self.number, &self.unit).map_err(EvalError::from)
    }
}

/// Configuration map of the shipment weight condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredWeightConfig {
    /// Operator tag, e.g. `">="` or `"> <"`
    pub operator: String,

    /// Threshold, `None` until the condition has been configured
    #[serde(default)]
    pub weight: Option<StoredMeasurement>,

    /// Max threshold for between operators
    #[serde(default)]
    pub max_weight: Option<StoredMeasurement>,
}

impl Default for StoredWeightConfig {
    fn default() -> Self {
        Self {
            operator: ComparisonOperator::default().tag().to_string(),
            weight: None,
            max_weight: None,
        }
    }
}

impl StoredWeightConfig {
    /// Store a typed configuration
    pub fn from_config(config: &RangeConditionConfig) -> Self {
        Self {
            operator: config.operator().tag().to_string(),
            weight: Some(StoredMeasurement::from_weight(config.threshold())),
            max_weight: config.max_threshold().map(StoredMeasurement::from_weight),
        }
    }

    /// Restore the typed configuration without re-running range checks
    pub fn to_config(&self) -> Result<RangeConditionConfig, SchemaError> {
        let operator = ComparisonOperator::from_tag(&self.operator).ok_or_else(|| {
            log::warn!("stored condition uses unknown operator {:?}", self.operator);
            SchemaError::Condition(EvalError::UnknownOperator)
        })?;

        let weight = match &self.weight {
            Some(weight) if !weight.is_blank() => weight.to_weight()?,
            _ => return Err(SchemaError::Unconfigured),
        };

        let max_weight = match &self.max_weight {
            Some(max) if !max.is_blank() => Some(max.to_weight()?),
            _ => None,
        };

        Ok(RangeConditionConfig::restore(operator, weight, max_weight))
    }

    /// Restore and evaluate against a subject weight
    ///
    /// An unknown subject weight never matches, so the stored configuration
    /// isn't read at all in that case.
    pub fn evaluate(&self, subject: Option<&Weight>) -> Result<bool, SchemaError> {
        let Some(subject) = subject else {
            log::debug!("subject weight unknown, stored condition not yet satisfiable");
            return Ok(false);
        };

        let config = self.to_config()?;
        RangeCondition::evaluate(&config, Some(subject)).map_err(|err| {
            log::warn!("stored weight condition failed to evaluate: {}", err);
            SchemaError::Condition(err)
        })
    }

    /// Parse from the JSON configuration map
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(json).map_err(|e| SchemaError::SerializationError(e.to_string()))
    }

    /// Parse from an already decoded JSON value
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self, SchemaError> {
        Self::deserialize(value).map_err(|e| SchemaError::SerializationError(e.to_string()))
    }

    /// Render as the JSON configuration map
    pub fn to_json(&self) -> Result<String, SchemaError> {
        serde_json::to_string(self).map_err(|e| SchemaError::SerializationError(e.to_string()))
    }
}
