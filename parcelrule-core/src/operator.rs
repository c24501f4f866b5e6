//! Comparison operators available to range conditions
//!
//! Operators are persisted by their tag (`">="`, `"> <"`, ...). The tags are
//! part of the stored configuration format and must not change.

use core::fmt;
use core::str::FromStr;

use crate::errors::ConfigError;

/// How a measured value is compared against the configured threshold(s)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComparisonOperator {
    /// `>`
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = ">"))]
    GreaterThan,
    /// `>=`
    #[cfg_attr(feature = "serde", serde(rename = ">="))]
    GreaterThanOrEqual,
    /// `<=`
    #[cfg_attr(feature = "serde", serde(rename = "<="))]
    LessThanOrEqual,
    /// `<`
    #[cfg_attr(feature = "serde", serde(rename = "<"))]
    LessThan,
    /// `==`
    #[cfg_attr(feature = "serde", serde(rename = "=="))]
    Equal,
    /// `> <`, strictly between min and max
    #[cfg_attr(feature = "serde", serde(rename = "> <"))]
    BetweenExclusive,
    /// `>= <=`, between min and max including both ends
    #[cfg_attr(feature = "serde", serde(rename = ">= <="))]
    BetweenInclusive,
}

impl ComparisonOperator {
    /// All operators in the order a configuration surface lists them
    pub const ALL: [Self; 7] = [
        Self::GreaterThan,
        Self::GreaterThanOrEqual,
        Self::LessThanOrEqual,
        Self::LessThan,
        Self::Equal,
        Self::BetweenExclusive,
        Self::BetweenInclusive,
    ];

    /// Stored tag
    pub fn tag(self) -> &'static str {
        match self {
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThanOrEqual => "<=",
            Self::LessThan => "<",
            Self::Equal => "==",
            Self::BetweenExclusive => "> <",
            Self::BetweenInclusive => ">= <=",
        }
    }

    /// Human-readable option label
    pub fn label(self) -> &'static str {
        match self {
            Self::GreaterThan => "Greater than",
            Self::GreaterThanOrEqual => "Greater than or equal to",
            Self::LessThanOrEqual => "Less than or equal to",
            Self::LessThan => "Less than",
            Self::Equal => "Equals",
            Self::BetweenExclusive => "Between (exclusive)",
            Self::BetweenInclusive => "Between (inclusive)",
        }
    }

    /// Whether the operator needs a max threshold
    pub fn requires_max(self) -> bool {
        matches!(self, Self::BetweenExclusive | Self::BetweenInclusive)
    }

    /// Look an operator up by its stored tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.tag() == tag)
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ComparisonOperator {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or(ConfigError::UnknownOperator)
    }
}
