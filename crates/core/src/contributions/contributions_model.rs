//! Contribution history domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::CONTRIBUTION_ENTRY_TYPE;
use crate::errors::{Error, Result};

/// One recorded contribution event. Entries are append-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContributionHistoryEntry {
    pub id: i32,
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(rename = "type")]
    pub entry_type: String,
}

/// Input model for appending a history entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewContribution {
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(rename = "type", default = "default_entry_type")]
    pub entry_type: String,
}

fn default_entry_type() -> String {
    CONTRIBUTION_ENTRY_TYPE.to_string()
}

impl NewContribution {
    pub fn contribution(date: NaiveDate, amount: f64) -> Self {
        Self {
            date,
            amount,
            entry_type: default_entry_type(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(Error::invalid_input(format!(
                "Contribution amount must be a positive number, got {}",
                self.amount
            )));
        }
        if self.entry_type.trim().is_empty() {
            return Err(Error::invalid_input("Contribution type tag must not be empty"));
        }
        Ok(())
    }
}

/// Year-to-date view over the contribution log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YtdContributions {
    pub contributions: Vec<ContributionHistoryEntry>,
    #[serde(rename = "totalYTD")]
    pub total_ytd: f64,
}

impl YtdContributions {
    pub fn from_entries(contributions: Vec<ContributionHistoryEntry>) -> Self {
        let total_ytd = contributions.iter().map(|c| c.amount).sum();
        Self {
            contributions,
            total_ytd,
        }
    }
}

/// Demo history seeded into an empty log: the 15th of each month, Jan-Nov 2025.
pub fn demo_history() -> Vec<NewContribution> {
    (1..=11)
        .filter_map(|month| NaiveDate::from_ymd_opt(2025, month, 15))
        .map(|date| NewContribution::contribution(date, 250.0))
        .collect()
}
