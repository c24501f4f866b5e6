//! Units of Measure and Their Conversion Tables
//!
//! Each measurement dimension has a closed family of units. Every unit in a
//! family knows its factor relative to the family's base unit, which is all
//! that is needed to convert between any two members:
//!
//! ```text
//! value_in_b = value_in_a × factor(a) ÷ factor(b)
//! ```
//!
//! Factors are exact decimals. The pound is defined exactly in kilograms by
//! the 1959 international yard and pound agreement, and the avoirdupois ounce
//! is exactly 1/16 of that pound, so none of the table entries are rounded.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;

use crate::errors::MeasurementError;

/// A unit belonging to one measurement dimension
pub trait Unit: Copy + Eq + fmt::Debug + 'static {
    /// Every unit in the family, in display order
    const ALL: &'static [Self];

    /// Short machine tag, e.g. `"kg"`
    fn tag(self) -> &'static str;

    /// Human-readable name
    fn label(self) -> &'static str;

    /// Size of one of this unit expressed in the family's base unit
    fn base_factor(self) -> Decimal;

    /// Look a unit up by its tag
    fn from_tag(tag: &str) -> Result<Self, MeasurementError> {
        Self::ALL
            .iter()
            .copied()
            .find(|unit| unit.tag() == tag)
            .ok_or(MeasurementError::UnknownUnit)
    }
}

/// Weight units. The base unit is the kilogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeightUnit {
    /// `mg`
    #[cfg_attr(feature = "serde", serde(rename = "mg"))]
    Milligram,
    /// `g`
    #[cfg_attr(feature = "serde", serde(rename = "g"))]
    Gram,
    /// `kg`
    #[cfg_attr(feature = "serde", serde(rename = "kg"))]
    Kilogram,
    /// `oz`, avoirdupois ounce
    #[cfg_attr(feature = "serde", serde(rename = "oz"))]
    Ounce,
    /// `lb`, international avoirdupois pound
    #[cfg_attr(feature = "serde", serde(rename = "lb"))]
    Pound,
}

impl Unit for WeightUnit {
    const ALL: &'static [Self] = &[
        Self::Milligram,
        Self::Gram,
        Self::Kilogram,
        Self::Ounce,
        Self::Pound,
    ];

    fn tag(self) -> &'static str {
        match self {
            Self::Milligram => "mg",
            Self::Gram => "g",
            Self::Kilogram => "kg",
            Self::Ounce => "oz",
            Self::Pound => "lb",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Milligram => "Milligram",
            Self::Gram => "Gram",
            Self::Kilogram => "Kilogram",
            Self::Ounce => "Ounce",
            Self::Pound => "Pound",
        }
    }

    fn base_factor(self) -> Decimal {
        match self {
            Self::Milligram => Decimal::new(1, 6),
            Self::Gram => Decimal::new(1, 3),
            Self::Kilogram => Decimal::ONE,
            // 0.45359237 kg / 16
            Self::Ounce => Decimal::new(28_349_523_125, 12),
            // Exact by definition (1959)
            Self::Pound => Decimal::new(45_359_237, 8),
        }
    }
}

impl Default for WeightUnit {
    fn default() -> Self {
        Self::Kilogram
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for WeightUnit {
    type Err = MeasurementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for unit in WeightUnit::ALL {
            assert_eq!(WeightUnit::from_tag(unit.tag()), Ok(*unit));
        }
    }

    #[test]
    fn unknown_tag_rejected() {
        assert_eq!(WeightUnit::from_tag("stone"), Err(MeasurementError::UnknownUnit));
        assert_eq!("".parse::<WeightUnit>(), Err(MeasurementError::UnknownUnit));
    }

    #[test]
    fn parse_ignores_surrounding_whitespace() {
        assert_eq!(" lb ".parse::<WeightUnit>(), Ok(WeightUnit::Pound));
    }

    #[test]
    fn sixteen_ounces_make_a_pound() {
        let sixteen = Decimal::from(16);
        assert_eq!(
            WeightUnit::Ounce.base_factor() * sixteen,
            WeightUnit::Pound.base_factor()
        );
    }

    #[test]
    fn metric_factors_are_powers_of_ten() {
        assert_eq!(
            WeightUnit::Gram.base_factor() * Decimal::from(1000),
            WeightUnit::Kilogram.base_factor()
        );
        assert_eq!(
            WeightUnit::Milligram.base_factor() * Decimal::from(1000),
            WeightUnit::Gram.base_factor()
        );
    }
}
