//! Range Conditions: configure once, evaluate many times
//!
//! ## Overview
//!
//! A range condition answers one question: does a measured quantity satisfy
//! a configured comparison? The comparison is one of seven operators against
//! a threshold, two of which ("between") also need a max threshold.
//!
//! ## Two Phases
//!
//! ### 1. Configuration
//! [`RangeCondition::configure`] checks the range invariants and produces an
//! immutable [`RangeConditionConfig`]. Checks run in a fixed order and the
//! first failure wins:
//!
//! ```text
//! between operator, max missing or zero      -> MissingRangeBound
//! max converted to the threshold unit
//! "> <"    and max <= threshold              -> InvalidRangeBound
//! ">= <="  and max <  threshold              -> InvalidRangeBound
//! otherwise                                  -> config (max in threshold unit)
//! ```
//!
//! Non-between operators never keep a max threshold.
//!
//! ### 2. Evaluation
//! [`RangeCondition::evaluate`] is a pure read of the config and one input.
//! The subject is converted into the threshold's unit before comparing:
//!
//! ```text
//! >=     subject >= threshold
//! >      subject >  threshold
//! <=     subject <= threshold
//! <      subject <  threshold
//! ==     subject == threshold
//! > <    threshold <  subject <  max
//! >= <=  threshold <= subject <= max
//! ```
//!
//! An unknown subject (weight not determined yet) evaluates to `false`.
//!
//! ## Restored Configurations
//!
//! Configurations read back from storage are rebuilt with
//! [`RangeConditionConfig::restore`], which does not re-run the range checks.
//! Evaluation therefore still reports a between operator without a max as
//! [`EvalError::MissingRangeBound`] instead of assuming it cannot happen.

use rust_decimal::Decimal;

use crate::errors::{ConfigError, ConfigResult, EvalError, EvalResult, MAX_BELOW_MIN, MAX_NOT_ABOVE_MIN};
use crate::measurement::Measurement;
use crate::operator::ComparisonOperator;
use crate::units::{Unit, WeightUnit};

/// Validated, immutable comparison settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "U: serde::Serialize",
        deserialize = "U: Unit + serde::Deserialize<'de>"
    ))
)]
pub struct RangeConditionConfig<U: Unit = WeightUnit> {
    operator: ComparisonOperator,
    threshold: Measurement<U>,
    max_threshold: Option<Measurement<U>>,
}

impl<U: Unit> RangeConditionConfig<U> {
    /// Rebuild a stored configuration without re-validating it
    pub fn restore(
        operator: ComparisonOperator,
        threshold: Measurement<U>,
        max_threshold: Option<Measurement<U>>,
    ) -> Self {
        Self {
            operator,
            threshold,
            max_threshold,
        }
    }

    /// Comparison operator
    pub fn operator(&self) -> ComparisonOperator {
        self.operator
    }

    /// Primary threshold (the min for between operators)
    pub fn threshold(&self) -> &Measurement<U> {
        &self.threshold
    }

    /// Max threshold, only kept for between operators
    pub fn max_threshold(&self) -> Option<&Measurement<U>> {
        self.max_threshold.as_ref()
    }
}

/// Stateless configure/evaluate entry points for range conditions
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeCondition;

impl RangeCondition {
    /// Validate a comparison and produce its configuration
    pub fn configure<U: Unit>(
        operator: ComparisonOperator,
        threshold: Measurement<U>,
        max_threshold: Option<Measurement<U>>,
    ) -> ConfigResult<RangeConditionConfig<U>> {
        if !operator.requires_max() {
            return Ok(RangeConditionConfig::restore(operator, threshold, None));
        }

        // A zero max counts as empty, same as leaving the field blank
        let max = match max_threshold {
            Some(max) if !max.is_zero() => max,
            _ => return Err(ConfigError::MissingRangeBound),
        };
        let max = max.convert(threshold.unit())?;

        if operator == ComparisonOperator::BetweenExclusive && max.number() <= threshold.number() {
            return Err(ConfigError::InvalidRangeBound {
                reason: MAX_NOT_ABOVE_MIN,
            });
        }
        if max.number() < threshold.number() {
            return Err(ConfigError::InvalidRangeBound {
                reason: MAX_BELOW_MIN,
            });
        }

        Ok(RangeConditionConfig::restore(operator, threshold, Some(max)))
    }

    /// Decide whether `subject` satisfies the configured comparison
    pub fn evaluate<U: Unit>(
        config: &RangeConditionConfig<U>,
        subject: Option<&Measurement<U>>,
    ) -> EvalResult<bool> {
        let Some(subject) = subject else {
            log_debug!("subject measurement unknown, condition not yet satisfiable");
            return Ok(false);
        };

        let unit = config.threshold.unit();
        let value = subject.convert(unit)?.number();
        let threshold = config.threshold.number();

        let satisfied = match config.operator {
            ComparisonOperator::GreaterThanOrEqual => value >= threshold,
            ComparisonOperator::GreaterThan => value > threshold,
            ComparisonOperator::LessThanOrEqual => value <= threshold,
            ComparisonOperator::LessThan => value < threshold,
            ComparisonOperator::Equal => value == threshold,
            ComparisonOperator::BetweenExclusive => {
                let max = Self::max_in(config, unit)?;
                value > threshold && value < max
            }
            ComparisonOperator::BetweenInclusive => {
                let max = Self::max_in(config, unit)?;
                value >= threshold && value <= max
            }
        };

        Ok(satisfied)
    }

    fn max_in<U: Unit>(config: &RangeConditionConfig<U>, unit: U) -> EvalResult<Decimal> {
        match config.max_threshold {
            Some(max) if !max.is_zero() => Ok(max.convert(unit)?.number()),
            _ => {
                log_warn!(
                    "operator {} stored without a max threshold",
                    config.operator.tag()
                );
                Err(EvalError::MissingRangeBound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::Weight;
    use crate::units::WeightUnit::{Gram, Kilogram, Pound};

    fn kg(n: i64) -> Weight {
        Weight::from_int(n, Kilogram).unwrap()
    }

    #[test]
    fn greater_than_scenario() {
        let config = RangeCondition::configure(ComparisonOperator::GreaterThan, kg(5), None).unwrap();
        assert!(RangeCondition::evaluate(&config, Some(&kg(6))).unwrap());
        assert!(!RangeCondition::evaluate(&config, Some(&kg(5))).unwrap());
    }

    #[test]
    fn exclusive_range_rejects_light_pound() {
        let config =
            RangeCondition::configure(ComparisonOperator::BetweenExclusive, kg(2), Some(kg(10))).unwrap();
        let pound = Weight::from_int(1, Pound).unwrap();
        assert!(!RangeCondition::evaluate(&config, Some(&pound)).unwrap());
    }

    #[test]
    fn inclusive_range_accepts_both_boundaries() {
        let config =
            RangeCondition::configure(ComparisonOperator::BetweenInclusive, kg(1), Some(kg(1))).unwrap();
        let grams = Weight::from_int(1000, Gram).unwrap();
        assert!(RangeCondition::evaluate(&config, Some(&grams)).unwrap());
    }

    #[test]
    fn inverted_exclusive_range_rejected() {
        let result = RangeCondition::configure(ComparisonOperator::BetweenExclusive, kg(5), Some(kg(3)));
        assert_eq!(
            result,
            Err(ConfigError::InvalidRangeBound {
                reason: MAX_NOT_ABOVE_MIN
            })
        );
    }

    #[test]
    fn equal_bounds_rejected_only_when_exclusive() {
        let exclusive = RangeCondition::configure(ComparisonOperator::BetweenExclusive, kg(4), Some(kg(4)));
        assert!(matches!(exclusive, Err(ConfigError::InvalidRangeBound { .. })));

        let inclusive = RangeCondition::configure(ComparisonOperator::BetweenInclusive, kg(4), Some(kg(4)));
        assert!(inclusive.is_ok());
    }

    #[test]
    fn inclusive_range_below_min_rejected() {
        let result = RangeCondition::configure(ComparisonOperator::BetweenInclusive, kg(4), Some(kg(3)));
        assert_eq!(
            result,
            Err(ConfigError::InvalidRangeBound {
                reason: MAX_BELOW_MIN
            })
        );
    }

    #[test]
    fn unknown_subject_is_not_satisfied() {
        let config = RangeCondition::configure(ComparisonOperator::LessThan, kg(5), None).unwrap();
        assert_eq!(RangeCondition::evaluate(&config, None), Ok(false));
    }

    #[test]
    fn missing_max_checked_before_anything_else() {
        let result = RangeCondition::configure(ComparisonOperator::BetweenInclusive, kg(5), None);
        assert_eq!(result, Err(ConfigError::MissingRangeBound));

        let zero = Weight::zero(Gram);
        let result = RangeCondition::configure(ComparisonOperator::BetweenExclusive, kg(5), Some(zero));
        assert_eq!(result, Err(ConfigError::MissingRangeBound));
    }

    #[test]
    fn max_normalized_to_threshold_unit() {
        let max = Weight::from_int(2500, Gram).unwrap();
        let config =
            RangeCondition::configure(ComparisonOperator::BetweenExclusive, kg(1), Some(max)).unwrap();
        let stored = config.max_threshold().unwrap();
        assert_eq!(stored.unit(), Kilogram);
        assert_eq!(stored.number(), Decimal::new(25, 1));
    }

    #[test]
    fn max_dropped_for_single_bound_operators() {
        let config = RangeCondition::configure(ComparisonOperator::Equal, kg(1), Some(kg(9))).unwrap();
        assert_eq!(config.max_threshold(), None);
    }

    #[test]
    fn restored_range_without_max_fails_evaluation() {
        let config = RangeConditionConfig::restore(ComparisonOperator::BetweenInclusive, kg(1), None);
        assert_eq!(
            RangeCondition::evaluate(&config, Some(&kg(2))),
            Err(EvalError::MissingRangeBound)
        );
        // Unknown subject still short-circuits to false
        assert_eq!(RangeCondition::evaluate(&config, None), Ok(false));
    }

    #[test]
    fn restored_max_in_other_unit_is_converted() {
        let max = Weight::from_int(3000, Gram).unwrap();
        let config = RangeConditionConfig::restore(ComparisonOperator::BetweenExclusive, kg(1), Some(max));
        assert!(RangeCondition::evaluate(&config, Some(&kg(2))).unwrap());
        assert!(!RangeCondition::evaluate(&config, Some(&kg(3))).unwrap());
    }

    #[test]
    fn exclusive_range_excludes_its_min() {
        let config =
            RangeCondition::configure(ComparisonOperator::BetweenExclusive, kg(2), Some(kg(10))).unwrap();
        let min_in_grams = Weight::from_int(2000, Gram).unwrap();
        assert!(!RangeCondition::evaluate(&config, Some(&kg(2))).unwrap());
        assert!(!RangeCondition::evaluate(&config, Some(&min_in_grams)).unwrap());
        assert!(!RangeCondition::evaluate(&config, Some(&kg(10))).unwrap());
        assert!(RangeCondition::evaluate(&config, Some(&Weight::from_int(2001, Gram).unwrap())).unwrap());
    }

    #[test]
    fn every_single_bound_operator() {
        let cases = [
            (ComparisonOperator::GreaterThanOrEqual, [false, true, true]),
            (ComparisonOperator::GreaterThan, [false, false, true]),
            (ComparisonOperator::LessThanOrEqual, [true, true, false]),
            (ComparisonOperator::LessThan, [true, false, false]),
            (ComparisonOperator::Equal, [false, true, false]),
        ];
        for (operator, expected) in cases {
            let config = RangeCondition::configure(operator, kg(5), None).unwrap();
            for (subject, want) in [4, 5, 6].into_iter().zip(expected) {
                assert_eq!(
                    RangeCondition::evaluate(&config, Some(&kg(subject))),
                    Ok(want),
                    "{} against {} kg",
                    operator,
                    subject
                );
            }
        }
    }
}
