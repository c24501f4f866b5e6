//! Core traits for conditions
//!
//! A condition is a named, configurable predicate over one kind of subject.
//! Each condition kind gets its own type implementing [`Condition`]; a
//! registry keyed by [`ConditionDefinition::id`] picks the right one for a
//! stored configuration.

use crate::errors::EvalResult;
use crate::measurement::Weight;

/// Static metadata describing a condition kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionDefinition {
    /// Machine id used as the registry key, e.g. `"shipment_weight"`
    pub id: &'static str,

    /// Human-readable name
    pub label: &'static str,

    /// Grouping shown to administrators
    pub category: &'static str,

    /// Entity type the condition is evaluated against
    pub entity_type: &'static str,
}

/// A configured predicate - implement this for each condition kind
pub trait Condition {
    /// What the condition is evaluated against
    type Subject: ?Sized;

    /// Metadata for this condition kind
    fn definition(&self) -> &'static ConditionDefinition;

    /// Evaluate against a subject
    fn evaluate(&self, subject: &Self::Subject) -> EvalResult<bool>;
}

/// Shipments as seen by shipment conditions
pub trait Shipment {
    /// Total weight, `None` until it has been determined
    fn weight(&self) -> Option<Weight>;
}
