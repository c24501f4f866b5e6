//! Submitted Values Validation
//!
//! Turns the raw values of a condition settings form into a configuration.
//! Parse failures and rejected ranges are collected into a
//! [`ValidationReport`] keyed by form field instead of stopping at the first
//! problem, so every input can be flagged in one pass.

use parcelrule_core::{
    ComparisonOperator, ConfigError, RangeCondition, RangeConditionConfig, Weight,
};

use crate::config::StoredMeasurement;

/// Raw values as submitted by an administrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedValues {
    /// Operator tag
    pub operator: String,

    /// Threshold, or min for between operators
    pub weight: StoredMeasurement,

    /// Max threshold, only read for between operators
    pub max_weight: Option<StoredMeasurement>,
}

/// Validation report with field-level issues
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Issues that block saving the configuration
    pub errors: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed (no errors)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, issue: ValidationIssue) {
        self.errors.push(issue);
    }

    /// Issues reported against one field
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationIssue> + 'a {
        self.errors.iter().filter(move |issue| issue.field == field)
    }
}

/// Individual validation issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Type of issue
    pub issue_type: IssueType,

    /// Form field that caused the issue
    pub field: String,

    /// Human-readable message
    pub message: String,
}

impl ValidationIssue {
    fn new(issue_type: IssueType, field: &str, message: impl Into<String>) -> Self {
        Self {
            issue_type,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Types of validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueType {
    /// Required value is missing
    MissingField,

    /// Value could not be parsed
    InvalidValue,

    /// Max threshold doesn't clear the threshold
    RangeViolation,
}

/// Validate submitted values and build the configuration
pub fn validate_submission(
    values: &SubmittedValues,
) -> Result<RangeConditionConfig, ValidationReport> {
    let mut report = ValidationReport::new();

    let operator = match values.operator.parse::<ComparisonOperator>() {
        Ok(operator) => Some(operator),
        Err(err) => {
            report.add_error(ValidationIssue::new(
                IssueType::InvalidValue,
                err.field(),
                err.to_string(),
            ));
            None
        }
    };

    let weight = parse_measurement(&values.weight, "weight", &mut report);

    // Max is only read once the operator is known to need it
    let max_weight = match (operator, &values.max_weight) {
        (Some(operator), Some(max)) if operator.requires_max() && !max.is_blank() => {
            parse_measurement(max, "max_weight", &mut report)
        }
        _ => None,
    };

    let (operator, weight) = match (operator, weight) {
        (Some(operator), Some(weight)) if report.is_valid() => (operator, weight),
        _ => return Err(report),
    };

    RangeCondition::configure(operator, weight, max_weight).map_err(|err| {
        let issue_type = match err {
            ConfigError::MissingRangeBound => IssueType::MissingField,
            ConfigError::InvalidRangeBound { .. } => IssueType::RangeViolation,
            ConfigError::UnknownOperator | ConfigError::Measurement(_) => IssueType::InvalidValue,
        };
        report.add_error(ValidationIssue::new(issue_type, err.field(), err.to_string()));
        report
    })
}

fn parse_measurement(
    value: &StoredMeasurement,
    field: &str,
    report: &mut ValidationReport,
) -> Option<Weight> {
    if value.is_blank() {
        report.add_error(ValidationIssue::new(
            IssueType::MissingField,
            field,
            "Value is required",
        ));
        return None;
    }

    match Weight::parse(&value.number, &value.unit) {
        Ok(weight) => Some(weight),
        Err(err) => {
            report.add_error(ValidationIssue::new(IssueType::InvalidValue, field, err.to_string()));
            None
        }
    }
}

/// Operator choices as `(tag, label)` pairs, in display order
pub fn operator_options() -> Vec<(&'static str, &'static str)> {
    ComparisonOperator::ALL
        .iter()
        .map(|operator| (operator.tag(), operator.label()))
        .collect()
}
