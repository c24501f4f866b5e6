//! Measurements: an exact magnitude paired with a unit
//!
//! A [`Measurement`] is immutable. Conversion returns a new value, and
//! comparisons always bring the other operand into `self`'s unit first, so
//! `1000 g` and `1 kg` compare equal.
//!
//! Magnitudes are decimals rather than floats. Shipping thresholds are typed
//! by people (`0.1 kg`, `2.2 lb`) and must compare exactly the way they were
//! entered.
//!
//! ## Precision
//!
//! Conversions into `mg`, `g` or `kg` are exact, and so is `lb` to `oz`.
//! Other conversions into `oz` or `lb` usually don't terminate in decimal,
//! such as `kg` to `lb`, and the result is rounded to the 28 significant
//! digits a [`Decimal`] holds. `1 kg` therefore compares equal to
//! `2.2046226218487758072297380135 lb` even though the true quotient has
//! more digits.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;

use crate::errors::MeasurementError;
use crate::units::{Unit, WeightUnit};

/// Non-negative magnitude in a unit of family `U`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "MeasurementRepr<U>",
        bound(
            serialize = "U: serde::Serialize",
            deserialize = "U: Unit + serde::Deserialize<'de>"
        )
    )
)]
pub struct Measurement<U: Unit> {
    number: Decimal,
    unit: U,
}

/// A weight, the only dimension shipment conditions look at
pub type Weight = Measurement<WeightUnit>;

impl<U: Unit> Measurement<U> {
    /// Create a measurement, rejecting negative magnitudes
    pub fn new(number: Decimal, unit: U) -> Result<Self, MeasurementError> {
        if number < Decimal::ZERO {
            return Err(MeasurementError::Negative);
        }
        Ok(Self { number, unit })
    }

    /// Create a measurement from a whole number
    pub fn from_int(number: i64, unit: U) -> Result<Self, MeasurementError> {
        Self::new(Decimal::from(number), unit)
    }

    /// Zero in the given unit
    pub fn zero(unit: U) -> Self {
        Self {
            number: Decimal::ZERO,
            unit,
        }
    }

    /// Parse the `(number, unit)` pair a configuration surface submits
    pub fn parse(number: &str, unit: &str) -> Result<Self, MeasurementError> {
        let number = Decimal::from_str(number.trim()).map_err(|_| MeasurementError::InvalidNumber)?;
        let unit = U::from_tag(unit.trim())?;
        Self::new(number, unit)
    }

    /// Magnitude in [`Self::unit`]
    pub fn number(&self) -> Decimal {
        self.number
    }

    /// Unit of the magnitude
    pub fn unit(&self) -> U {
        self.unit
    }

    /// True for a zero magnitude in any unit
    pub fn is_zero(&self) -> bool {
        self.number.is_zero()
    }

    /// Express this measurement in another unit of the same family
    pub fn convert(self, to: U) -> Result<Self, MeasurementError> {
        if to == self.unit {
            return Ok(self);
        }

        let number = self
            .number
            .checked_mul(self.unit.base_factor())
            .and_then(|base| base.checked_div(to.base_factor()))
            .ok_or(MeasurementError::Overflow)?;

        Ok(Self {
            number: number.normalize(),
            unit: to,
        })
    }

    /// Order against another measurement, converting it to this unit first
    pub fn compare(&self, other: &Self) -> Result<Ordering, MeasurementError> {
        let other = other.convert(self.unit)?;
        Ok(self.number.cmp(&other.number))
    }

    /// `self > other`
    pub fn greater_than(&self, other: &Self) -> Result<bool, MeasurementError> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// `self >= other`
    pub fn greater_than_or_equal(&self, other: &Self) -> Result<bool, MeasurementError> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    /// `self < other`
    pub fn less_than(&self, other: &Self) -> Result<bool, MeasurementError> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// `self <= other`
    pub fn less_than_or_equal(&self, other: &Self) -> Result<bool, MeasurementError> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    /// Numeric equality after unit conversion
    pub fn equals(&self, other: &Self) -> Result<bool, MeasurementError> {
        Ok(self.compare(other)? == Ordering::Equal)
    }
}

impl<U: Unit + fmt::Display> fmt::Display for Measurement<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.unit)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MeasurementRepr<U> {
    number: Decimal,
    unit: U,
}

#[cfg(feature = "serde")]
impl<U: Unit> TryFrom<MeasurementRepr<U>> for Measurement<U> {
    type Error = MeasurementError;

    fn try_from(repr: MeasurementRepr<U>) -> Result<Self, Self::Error> {
        Self::new(repr.number, repr.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weight(number: &str, unit: &str) -> Weight {
        Weight::parse(number, unit).unwrap()
    }

    #[test]
    fn negative_weight_rejected() {
        assert_eq!(
            Weight::from_int(-1, WeightUnit::Kilogram),
            Err(MeasurementError::Negative)
        );
        assert_eq!(Weight::parse("-0.5", "g"), Err(MeasurementError::Negative));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Weight::parse("heavy", "kg"), Err(MeasurementError::InvalidNumber));
        assert_eq!(Weight::parse("", "kg"), Err(MeasurementError::InvalidNumber));
        assert_eq!(Weight::parse("1", "stone"), Err(MeasurementError::UnknownUnit));
    }

    #[test]
    fn grams_to_kilograms_is_exact() {
        let converted = weight("1000", "g").convert(WeightUnit::Kilogram).unwrap();
        assert_eq!(converted.number(), Decimal::ONE);
        assert_eq!(converted.unit(), WeightUnit::Kilogram);
    }

    #[test]
    fn pound_to_kilograms() {
        let converted = weight("1", "lb").convert(WeightUnit::Kilogram).unwrap();
        assert_eq!(converted.number(), Decimal::new(45_359_237, 8));
    }

    #[test]
    fn non_terminating_conversion_rounds_to_decimal_precision() {
        let pounds = weight("1", "kg").convert(WeightUnit::Pound).unwrap();
        let rounded = Weight::parse("2.2046226218487758072297380135", "lb").unwrap();
        assert_eq!(pounds, rounded);
        assert!(weight("1", "kg").equals(&rounded).unwrap());
    }

    #[test]
    fn ounces_to_pounds() {
        let converted = weight("8", "oz").convert(WeightUnit::Pound).unwrap();
        assert_eq!(converted.number(), Decimal::new(5, 1));
    }

    #[test]
    fn same_unit_conversion_is_identity() {
        let original = weight("2.50", "kg");
        assert_eq!(original.convert(WeightUnit::Kilogram).unwrap(), original);
    }

    #[test]
    fn comparisons_cross_units() {
        let kilo = weight("1", "kg");
        assert!(kilo.equals(&weight("1000", "g")).unwrap());
        assert!(!kilo.greater_than(&weight("3", "lb")).unwrap());
        assert!(kilo.greater_than(&weight("2", "oz")).unwrap());
        assert!(kilo.less_than_or_equal(&weight("1000000", "mg")).unwrap());
        assert!(kilo.greater_than_or_equal(&weight("999", "g")).unwrap());
        assert!(kilo.less_than(&weight("1.001", "kg")).unwrap());
    }

    #[test]
    fn overflow_reported() {
        let huge = Weight::new(Decimal::MAX, WeightUnit::Kilogram).unwrap();
        assert_eq!(huge.convert(WeightUnit::Milligram), Err(MeasurementError::Overflow));
    }

    #[test]
    fn display_uses_unit_tag() {
        assert_eq!(weight("2.5", "lb").to_string(), "2.5 lb");
    }

    #[test]
    fn zero_detection() {
        assert!(Weight::zero(WeightUnit::Gram).is_zero());
        assert!(weight("0.000", "kg").is_zero());
        assert!(!weight("0.001", "kg").is_zero());
    }
}
