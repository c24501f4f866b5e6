//! ParcelRule Avro schemas
//!
//! Binary storage for condition configuration. The record mirrors the JSON
//! configuration map field for field, so either format can be converted to
//! the other without loss.

use apache_avro::{from_value, Reader, Schema, Writer};
use serde_json::json;

use crate::{config::StoredWeightConfig, SchemaError};

/// Shipment weight condition configuration schema v1
pub fn shipment_weight_condition_v1() -> Result<Schema, SchemaError> {
    let schema_json = json!({
        "namespace": "io.parcelrule.conditions.v1",
        "type": "record",
        "name": "ShipmentWeightCondition",
        "doc": "Configuration of the shipment weight condition",
        "fields": [
            {
                "name": "operator",
                "type": "string",
                "doc": "Comparison operator tag: >, >=, <=, <, ==, '> <' or '>= <='"
            },
            {
                "name": "weight",
                "type": ["null", {
                    "type": "record",
                    "name": "Measurement",
                    "fields": [
                        {
                            "name": "number",
                            "type": "string",
                            "doc": "Decimal magnitude, kept as entered"
                        },
                        {
                            "name": "unit",
                            "type": "string",
                            "doc": "Weight unit tag: mg, g, kg, oz or lb"
                        }
                    ]
                }],
                "default": null,
                "doc": "Threshold, or min for between operators"
            },
            {
                "name": "max_weight",
                "type": ["null", "Measurement"],
                "default": null,
                "doc": "Max threshold, only set for between operators"
            }
        ]
    });

    Schema::parse(&schema_json)
        .map_err(|e| SchemaError::ParseError(e.to_string()))
}

/// Encode configurations into an Avro object container
pub fn encode_configs(configs: &[StoredWeightConfig]) -> Result<Vec<u8>, SchemaError> {
    let schema = shipment_weight_condition_v1()?;
    let mut writer = Writer::new(&schema, Vec::new());

    for config in configs {
        writer
            .append_ser(config)
            .map_err(|e| SchemaError::SerializationError(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| SchemaError::SerializationError(e.to_string()))
}

/// Decode every configuration from an Avro object container
///
/// The writer only emits a container header once a record is appended, so an
/// empty input is an empty container.
pub fn decode_configs(bytes: &[u8]) -> Result<Vec<StoredWeightConfig>, SchemaError> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }

    let schema = shipment_weight_condition_v1()?;
    let reader = Reader::with_schema(&schema, bytes)
        .map_err(|e| SchemaError::SerializationError(e.to_string()))?;

    reader
        .map(|value| {
            let value = value.map_err(|e| SchemaError::SerializationError(e.to_string()))?;
            from_value::<StoredWeightConfig>(&value)
                .map_err(|e| SchemaError::SerializationError(e.to_string()))
        })
        .collect()
}

/// Encode a single configuration
pub fn encode_config(config: &StoredWeightConfig) -> Result<Vec<u8>, SchemaError> {
    encode_configs(std::slice::from_ref(config))
}

/// Decode the first configuration in a container
pub fn decode_config(bytes: &[u8]) -> Result<StoredWeightConfig, SchemaError> {
    decode_configs(bytes)?
        .into_iter()
        .next()
        .ok_or_else(|| SchemaError::NotFound("no configuration in container".to_string()))
}
