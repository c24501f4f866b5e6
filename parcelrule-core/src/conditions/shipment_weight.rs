//! Shipment weight condition
//!
//! Compares a shipment's total weight against a configured threshold or
//! range. Shipments that haven't been weighed yet never match, so a shipping
//! method gated on weight stays hidden until the weight is known.

use crate::{
    condition::{RangeCondition, RangeConditionConfig},
    errors::{ConfigResult, EvalResult},
    measurement::Weight,
    operator::ComparisonOperator,
    traits::{Condition, ConditionDefinition, Shipment},
};

/// Definition of the shipment weight condition
pub static SHIPMENT_WEIGHT: ConditionDefinition = ConditionDefinition {
    id: "shipment_weight",
    label: "Shipment weight",
    category: "Shipment",
    entity_type: "commerce_shipment",
};

/// Weight condition for shipments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentWeight {
    config: RangeConditionConfig,
}

impl ShipmentWeight {
    /// Wrap an existing configuration
    pub fn new(config: RangeConditionConfig) -> Self {
        Self { config }
    }

    /// Validate settings and build the condition
    pub fn configure(
        operator: ComparisonOperator,
        weight: Weight,
        max_weight: Option<Weight>,
    ) -> ConfigResult<Self> {
        RangeCondition::configure(operator, weight, max_weight).map(Self::new)
    }

    /// Current configuration
    pub fn config(&self) -> &RangeConditionConfig {
        &self.config
    }
}

impl Condition for ShipmentWeight {
    type Subject = dyn Shipment;

    fn definition(&self) -> &'static ConditionDefinition {
        &SHIPMENT_WEIGHT
    }

    fn evaluate(&self, shipment: &Self::Subject) -> EvalResult<bool> {
        let weight = shipment.weight();
        RangeCondition::evaluate(&self.config, weight.as_ref())
    }
}
