//! Contribution settings domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_AGE, DEFAULT_CONTRIBUTION_VALUE, DEFAULT_RETIREMENT_AGE, DEFAULT_SALARY, MAX_AGE,
    MAX_CONTRIBUTION_PERCENT,
};
use crate::errors::{Error, Result};

/// How the contribution value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionType {
    /// Percent of annual salary.
    Percentage,
    /// Currency amount per month.
    Fixed,
}

impl ContributionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContributionType::Percentage => "percentage",
            ContributionType::Fixed => "fixed",
        }
    }

    /// Checks that `value` is a usable contribution for this mode.
    ///
    /// Percentages must lie in (0, 100]; fixed amounts must be positive.
    pub fn validate_value(&self, value: f64) -> Result<()> {
        if !value.is_finite() || value <= 0.0 {
            return Err(Error::invalid_input(format!(
                "Contribution value must be a positive number, got {}",
                value
            )));
        }
        if *self == ContributionType::Percentage && value > MAX_CONTRIBUTION_PERCENT {
            return Err(Error::invalid_input(format!(
                "Percentage contribution must not exceed {}%, got {}",
                MAX_CONTRIBUTION_PERCENT, value
            )));
        }
        Ok(())
    }
}

impl fmt::Display for ContributionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContributionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "percentage" => Ok(ContributionType::Percentage),
            "fixed" => Ok(ContributionType::Fixed),
            other => Err(Error::invalid_input(format!(
                "Unrecognized contribution type '{}', expected 'percentage' or 'fixed'",
                other
            ))),
        }
    }
}

/// A snapshot of the user's contribution configuration.
///
/// `id` and `updated_at` are only set on snapshots read back from storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContributionSettings {
    pub id: Option<i32>,
    pub contribution_type: ContributionType,
    pub contribution_value: f64,
    pub age: i32,
    pub salary: f64,
    pub retirement_age: i32,
    pub updated_at: Option<NaiveDateTime>,
}

impl Default for ContributionSettings {
    fn default() -> Self {
        Self {
            id: None,
            contribution_type: ContributionType::Fixed,
            contribution_value: DEFAULT_CONTRIBUTION_VALUE,
            age: DEFAULT_AGE,
            salary: DEFAULT_SALARY,
            retirement_age: DEFAULT_RETIREMENT_AGE,
            updated_at: None,
        }
    }
}

/// Raw settings update as received from a client.
///
/// The contribution type stays a string here so an unknown mode surfaces as
/// a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub contribution_type: Option<String>,
    pub contribution_value: Option<f64>,
    pub age: Option<i32>,
    pub salary: Option<f64>,
    pub retirement_age: Option<i32>,
}

/// Validated settings ready to be persisted as the new current snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContributionSettings {
    pub contribution_type: ContributionType,
    pub contribution_value: f64,
    pub age: i32,
    pub salary: f64,
    pub retirement_age: i32,
}

impl SettingsUpdate {
    /// Validates the update and fills omitted fields with defaults.
    ///
    /// Omitted fields never inherit from the previous snapshot: an update
    /// replaces the settings wholesale.
    pub fn into_new_settings(self) -> Result<NewContributionSettings> {
        let contribution_type: ContributionType = self
            .contribution_type
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| Error::invalid_input("Contribution type and value are required"))?
            .parse()?;
        let contribution_value = self
            .contribution_value
            .ok_or_else(|| Error::invalid_input("Contribution type and value are required"))?;
        contribution_type.validate_value(contribution_value)?;

        let age = self.age.unwrap_or(DEFAULT_AGE);
        if !(0..=MAX_AGE).contains(&age) {
            return Err(Error::invalid_input(format!(
                "Age must be between 0 and {}, got {}",
                MAX_AGE, age
            )));
        }

        let salary = self.salary.unwrap_or(DEFAULT_SALARY);
        if !salary.is_finite() || salary < 0.0 {
            return Err(Error::invalid_input(format!(
                "Salary must be a non-negative number, got {}",
                salary
            )));
        }

        let retirement_age = self.retirement_age.unwrap_or(DEFAULT_RETIREMENT_AGE);
        if !(0..=MAX_AGE).contains(&retirement_age) {
            return Err(Error::invalid_input(format!(
                "Retirement age must be between 0 and {}, got {}",
                MAX_AGE, retirement_age
            )));
        }

        Ok(NewContributionSettings {
            contribution_type,
            contribution_value,
            age,
            salary,
            retirement_age,
        })
    }
}
