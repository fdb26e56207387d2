//! Retirement projection domain models.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_AGE, PAY_PERIODS_PER_YEAR};
use crate::errors::{Error, Result};
use crate::settings::{ContributionSettings, ContributionType};

/// Typed, range-checked calculator input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInput {
    pub contribution_value: f64,
    pub contribution_type: ContributionType,
    pub current_age: i32,
    pub salary: f64,
    pub retirement_age: i32,
    pub current_savings: f64,
}

impl ProjectionInput {
    /// Builds the input for a stored settings snapshot and the YTD total.
    pub fn from_settings(settings: &ContributionSettings, current_savings: f64) -> Result<Self> {
        let input = Self {
            contribution_value: settings.contribution_value,
            contribution_type: settings.contribution_type,
            current_age: settings.age,
            salary: settings.salary,
            retirement_age: settings.retirement_age,
            current_savings,
        };
        input.validate()?;
        Ok(input)
    }

    /// Range checks shared by every way of building an input.
    pub fn validate(&self) -> Result<()> {
        self.contribution_type
            .validate_value(self.contribution_value)?;
        if !(0..=MAX_AGE).contains(&self.current_age) {
            return Err(Error::invalid_input(format!(
                "currentAge must be between 0 and {}, got {}",
                MAX_AGE, self.current_age
            )));
        }
        if !(0..=MAX_AGE).contains(&self.retirement_age) {
            return Err(Error::invalid_input(format!(
                "retirementAge must be between 0 and {}, got {}",
                MAX_AGE, self.retirement_age
            )));
        }
        if !self.salary.is_finite() || self.salary < 0.0 {
            return Err(Error::invalid_input(format!(
                "salary must be a non-negative number, got {}",
                self.salary
            )));
        }
        if !self.current_savings.is_finite() || self.current_savings < 0.0 {
            return Err(Error::invalid_input(format!(
                "currentSavings must be a non-negative number, got {}",
                self.current_savings
            )));
        }
        Ok(())
    }

    /// Contribution per year implied by the configured mode.
    pub fn annual_contribution(&self) -> f64 {
        match self.contribution_type {
            ContributionType::Percentage => (self.contribution_value / 100.0) * self.salary,
            ContributionType::Fixed => self.contribution_value * PAY_PERIODS_PER_YEAR,
        }
    }

    pub fn years_to_retirement(&self) -> i32 {
        self.retirement_age - self.current_age
    }
}

/// Unrounded projection breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub current_age: i32,
    pub retirement_age: i32,
    pub years_to_retirement: i32,
    pub annual_contribution: f64,
    pub future_value_of_current: f64,
    pub future_value_of_contributions: f64,
    pub total_future_value: f64,
    pub total_contributions: f64,
    pub investment_growth: f64,
    pub annual_return_rate: f64,
}

/// Display payload: every monetary amount rounded to whole currency units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetirementImpact {
    pub current_age: i32,
    pub retirement_age: i32,
    pub annual_contribution: i64,
    pub estimated_savings: i64,
    pub future_value_of_current: i64,
    pub future_value_of_contributions: i64,
    pub total_contributions: i64,
    pub investment_growth: i64,
    pub years_to_retirement: i32,
    pub annual_return_rate: f64,
}

/// Rounds to the nearest whole unit, halves toward positive infinity.
pub fn round_to_unit(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

impl From<ProjectionResult> for RetirementImpact {
    fn from(result: ProjectionResult) -> Self {
        Self {
            current_age: result.current_age,
            retirement_age: result.retirement_age,
            annual_contribution: round_to_unit(result.annual_contribution),
            estimated_savings: round_to_unit(result.total_future_value),
            future_value_of_current: round_to_unit(result.future_value_of_current),
            future_value_of_contributions: round_to_unit(result.future_value_of_contributions),
            total_contributions: round_to_unit(result.total_contributions),
            investment_growth: round_to_unit(result.investment_growth),
            years_to_retirement: result.years_to_retirement,
            annual_return_rate: result.annual_return_rate,
        }
    }
}
