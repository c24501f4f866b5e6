//! Condition Registry
//!
//! Condition kinds are looked up by id. Each entry pairs the kind's
//! definition with a factory that builds a live condition from the kind's
//! stored JSON configuration.

use std::collections::HashMap;
use std::sync::RwLock;

use parcelrule_core::{Condition, ConditionDefinition, Shipment, ShipmentWeight};

use crate::{config::StoredWeightConfig, SchemaError};

/// Boxed condition evaluated against shipments
pub type ShipmentCondition = Box<dyn Condition<Subject = dyn Shipment> + Send + Sync>;

/// Builds a condition from its stored configuration
pub type ConditionFactory = fn(&serde_json::Value) -> Result<ShipmentCondition, SchemaError>;

/// Thread-safe registry of condition kinds
pub struct ConditionRegistry {
    /// Definitions and factories indexed by condition id
    conditions: RwLock<HashMap<String, (ConditionDefinition, ConditionFactory)>>,
}

impl ConditionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            conditions: RwLock::new(HashMap::new()),
        }
    }

    /// Register a condition kind
    pub fn register(
        &self,
        definition: ConditionDefinition,
        factory: ConditionFactory,
    ) -> Result<(), SchemaError> {
        let mut conditions = self.conditions.write()
            .map_err(|_| SchemaError::ParseError("Lock poisoned".to_string()))?;

        if conditions.contains_key(definition.id) {
            return Err(SchemaError::ValidationError(
                format!("Condition {} already registered", definition.id)
            ));
        }

        log::debug!("registering condition {} for {}", definition.id, definition.entity_type);
        conditions.insert(definition.id.to_string(), (definition, factory));

        Ok(())
    }

    /// Get a condition definition by id
    pub fn definition(&self, id: &str) -> Result<ConditionDefinition, SchemaError> {
        let conditions = self.conditions.read()
            .map_err(|_| SchemaError::ParseError("Lock poisoned".to_string()))?;

        conditions.get(id)
            .map(|(definition, _)| *definition)
            .ok_or_else(|| SchemaError::NotFound(id.to_string()))
    }

    /// All registered definitions, sorted by id
    pub fn definitions(&self) -> Result<Vec<ConditionDefinition>, SchemaError> {
        let conditions = self.conditions.read()
            .map_err(|_| SchemaError::ParseError("Lock poisoned".to_string()))?;

        let mut definitions: Vec<_> = conditions.values()
            .map(|(definition, _)| *definition)
            .collect();
        definitions.sort_by_key(|definition| definition.id);

        Ok(definitions)
    }

    /// Build a condition of the given kind from its stored configuration
    pub fn create(
        &self,
        id: &str,
        configuration: &serde_json::Value,
    ) -> Result<ShipmentCondition, SchemaError> {
        let factory = {
            let conditions = self.conditions.read()
                .map_err(|_| SchemaError::ParseError("Lock poisoned".to_string()))?;

            conditions.get(id)
                .map(|(_, factory)| *factory)
                .ok_or_else(|| SchemaError::NotFound(id.to_string()))?
        };

        factory(configuration)
    }

    /// Load all built-in condition kinds
    pub fn load_defaults(&self) -> Result<(), SchemaError> {
        self.register(parcelrule_core::conditions::SHIPMENT_WEIGHT, shipment_weight)
    }
}

impl Default for ConditionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn shipment_weight(configuration: &serde_json::Value) -> Result<ShipmentCondition, SchemaError> {
    let config = StoredWeightConfig::from_json_value(configuration)?.to_config()?;
    Ok(Box::new(ShipmentWeight::new(config)))
}

lazy_static::lazy_static! {
    /// Global condition registry with built-in conditions loaded
    pub static ref GLOBAL_REGISTRY: ConditionRegistry = {
        let registry = ConditionRegistry::new();
        if let Err(err) = registry.load_defaults() {
            log::warn!("failed to load built-in conditions: {}", err);
        }
        registry
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use parcelrule_core::{Weight, WeightUnit};
    use serde_json::json;

    struct Parcel(Option<Weight>);

    impl Shipment for Parcel {
        fn weight(&self) -> Option<Weight> {
            self.0
        }
    }

    fn loaded() -> ConditionRegistry {
        let registry = ConditionRegistry::new();
        registry.load_defaults().unwrap();
        registry
    }

    #[test]
    fn defaults_include_shipment_weight() {
        let registry = loaded();
        let definition = registry.definition("shipment_weight").unwrap();
        assert_eq!(definition.label, "Shipment weight");
        assert_eq!(registry.definitions().unwrap().len(), 1);
    }

    #[test]
    fn duplicate_registration_fails() {
        let registry = loaded();
        assert!(matches!(
            registry.load_defaults(),
            Err(SchemaError::ValidationError(_))
        ));
    }

    #[test]
    fn unknown_condition_not_found() {
        let registry = loaded();
        assert!(matches!(registry.definition("order_total"), Err(SchemaError::NotFound(_))));
        assert!(matches!(
            registry.create("order_total", &json!({})),
            Err(SchemaError::NotFound(_))
        ));
    }

    #[test]
    fn creates_condition_from_stored_configuration() {
        let condition = loaded()
            .create(
                "shipment_weight",
                &json!({ "operator": ">", "weight": { "number": "500", "unit": "g" } }),
            )
            .unwrap();

        let heavy = Parcel(Some(Weight::from_int(1, WeightUnit::Kilogram).unwrap()));
        assert_eq!(condition.definition().id, "shipment_weight");
        assert!(condition.evaluate(&heavy).unwrap());
        assert!(!condition.evaluate(&Parcel(None)).unwrap());
    }

    #[test]
    fn unconfigured_condition_cannot_be_built() {
        let result = loaded().create("shipment_weight", &json!({ "operator": ">" }));
        assert!(matches!(result, Err(SchemaError::Unconfigured)));
    }

    #[test]
    fn malformed_configuration_rejected() {
        let result = loaded().create("shipment_weight", &json!({ "operator": 5 }));
        assert!(matches!(result, Err(SchemaError::SerializationError(_))));
    }

    #[test]
    fn global_registry_has_defaults() {
        assert!(GLOBAL_REGISTRY.definition("shipment_weight").is_ok());
    }
}
