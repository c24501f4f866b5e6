//! Condition implementations
//!
//! One module per condition kind. Each exposes a `static` definition that a
//! registry can list before any instance is configured.

mod shipment_weight;

pub use shipment_weight::{ShipmentWeight, SHIPMENT_WEIGHT};
