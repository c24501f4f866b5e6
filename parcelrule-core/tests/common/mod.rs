//! Common test utilities for integration tests
//!
//! This module provides:
//! - Shorthand weight constructors
//! - A minimal shipment fixture
//! - proptest strategies for weights, units and operators

#![allow(dead_code)]

use parcelrule_core::{ComparisonOperator, Decimal, Shipment, Unit, Weight, WeightUnit};
use proptest::prelude::*;

pub fn kg(n: i64) -> Weight {
    Weight::from_int(n, WeightUnit::Kilogram).unwrap()
}

pub fn g(n: i64) -> Weight {
    Weight::from_int(n, WeightUnit::Gram).unwrap()
}

pub fn lb(n: i64) -> Weight {
    Weight::from_int(n, WeightUnit::Pound).unwrap()
}

pub fn oz(n: i64) -> Weight {
    Weight::from_int(n, WeightUnit::Ounce).unwrap()
}

/// Shipment with a fixed, possibly unknown, weight
#[derive(Debug, Clone, Copy)]
pub struct TestShipment {
    pub weight: Option<Weight>,
}

impl TestShipment {
    pub fn weighing(weight: Weight) -> Self {
        Self { weight: Some(weight) }
    }

    pub fn unweighed() -> Self {
        Self { weight: None }
    }
}

impl Shipment for TestShipment {
    fn weight(&self) -> Option<Weight> {
        self.weight
    }
}

/// Magnitude in milligrams, the unit every other weight unit converts to exactly
pub fn in_milligrams(weight: &Weight) -> Decimal {
    weight.convert(WeightUnit::Milligram).unwrap().number()
}

pub fn any_unit() -> impl Strategy<Value = WeightUnit> {
    proptest::sample::select(WeightUnit::ALL.to_vec())
}

/// Weights up to 5000 whole units with at most three decimals
pub fn any_weight() -> impl Strategy<Value = Weight> {
    (0i64..5_000_000, 0u32..=3, any_unit())
        .prop_map(|(mantissa, scale, unit)| Weight::new(Decimal::new(mantissa, scale), unit).unwrap())
}

pub fn nonzero_weight() -> impl Strategy<Value = Weight> {
    any_weight().prop_filter("max bound must be non-empty", |w| !w.is_zero())
}

pub fn single_bound_operator() -> impl Strategy<Value = ComparisonOperator> {
    proptest::sample::select(
        ComparisonOperator::ALL
            .iter()
            .copied()
            .filter(|op| !op.requires_max())
            .collect::<Vec<_>>(),
    )
}
