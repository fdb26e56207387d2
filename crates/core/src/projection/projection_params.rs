//! Parsing of raw projection request parameters.

use serde::{Deserialize, Serialize};

use super::projection_model::ProjectionInput;
use crate::errors::{Error, Result, ValidationError};
use crate::settings::ContributionType;

/// Names of the parameters a projection request must carry.
pub const REQUIRED_PARAMETERS: [&str; 5] = [
    "currentContribution",
    "contributionType",
    "currentAge",
    "salary",
    "retirementAge",
];

/// Projection request parameters exactly as received, e.g. from a query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionParams {
    pub current_contribution: Option<String>,
    pub contribution_type: Option<String>,
    pub current_age: Option<String>,
    pub salary: Option<String>,
    pub retirement_age: Option<String>,
    pub current_savings: Option<String>,
}

fn present(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_number(name: &str, raw: &str) -> Result<f64> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::invalid_input(format!(
            "{} must be a number, got '{}'",
            name, raw
        ))),
    }
}

fn parse_whole_number(name: &str, raw: &str) -> Result<i32> {
    let value = parse_number(name, raw)?;
    if value.fract() != 0.0 || value < i32::MIN as f64 || value > i32::MAX as f64 {
        return Err(Error::invalid_input(format!(
            "{} must be a whole number, got '{}'",
            name, raw
        )));
    }
    Ok(value as i32)
}

impl ProjectionParams {
    /// Parses and range-checks the parameters.
    ///
    /// An absent or blank `currentSavings` means no savings; any other
    /// parameter that is absent or blank fails the whole request.
    pub fn parse(&self) -> Result<ProjectionInput> {
        let fields = [
            present(&self.current_contribution),
            present(&self.contribution_type),
            present(&self.current_age),
            present(&self.salary),
            present(&self.retirement_age),
        ];
        let [
            Some(contribution),
            Some(contribution_type),
            Some(current_age),
            Some(salary),
            Some(retirement_age),
        ] = fields
        else {
            return Err(Error::Validation(ValidationError::MissingParameters(
                REQUIRED_PARAMETERS.iter().map(|s| s.to_string()).collect(),
            )));
        };

        let input = ProjectionInput {
            contribution_value: parse_number("currentContribution", contribution)?,
            contribution_type: contribution_type.parse::<ContributionType>()?,
            current_age: parse_whole_number("currentAge", current_age)?,
            salary: parse_number("salary", salary)?,
            retirement_age: parse_whole_number("retirementAge", retirement_age)?,
            current_savings: match present(&self.current_savings) {
                Some(raw) => parse_number("currentSavings", raw)?,
                None => 0.0,
            },
        };
        input.validate()?;
        Ok(input)
    }
}
