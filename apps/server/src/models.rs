use chrono::{NaiveDate, NaiveDateTime};
use nestegg_core::contributions as core_contributions;
use nestegg_core::projection as core_projection;
use nestegg_core::settings as core_settings;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const SETTINGS_SAVED_MESSAGE: &str = "Settings updated successfully";

/// Contribution settings as exchanged with the web client (snake_case keys).
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct UserSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub contribution_type: String,
    pub contribution_value: f64,
    pub age: i32,
    pub salary: f64,
    pub retirement_age: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

impl From<core_settings::ContributionSettings> for UserSettings {
    fn from(s: core_settings::ContributionSettings) -> Self {
        Self {
            id: s.id,
            contribution_type: s.contribution_type.as_str().to_string(),
            contribution_value: s.contribution_value,
            age: s.age,
            salary: s.salary,
            retirement_age: s.retirement_age,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UserSettingsUpdate {
    pub contribution_type: Option<String>,
    pub contribution_value: Option<f64>,
    pub age: Option<i32>,
    pub salary: Option<f64>,
    pub retirement_age: Option<i32>,
}

impl From<UserSettingsUpdate> for core_settings::SettingsUpdate {
    fn from(u: UserSettingsUpdate) -> Self {
        Self {
            contribution_type: u.contribution_type,
            contribution_value: u.contribution_value,
            age: u.age,
            salary: u.salary,
            retirement_age: u.retirement_age,
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone)]
pub struct SavedUserSettings {
    #[serde(flatten)]
    pub settings: UserSettings,
    pub message: String,
}

impl SavedUserSettings {
    pub fn new(settings: UserSettings) -> Self {
        Self {
            settings,
            message: SETTINGS_SAVED_MESSAGE.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ContributionEntry {
    pub id: i32,
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(rename = "type")]
    pub entry_type: String,
}

impl From<core_contributions::ContributionHistoryEntry> for ContributionEntry {
    fn from(e: core_contributions::ContributionHistoryEntry) -> Self {
        Self {
            id: e.id,
            date: e.date,
            amount: e.amount,
            entry_type: e.entry_type,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct NewContributionEntry {
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
}

impl From<NewContributionEntry> for core_contributions::NewContribution {
    fn from(e: NewContributionEntry) -> Self {
        match e.entry_type {
            Some(entry_type) => Self {
                date: e.date,
                amount: e.amount,
                entry_type,
            },
            None => Self::contribution(e.date, e.amount),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct YtdContributions {
    pub contributions: Vec<ContributionEntry>,
    #[serde(rename = "totalYTD")]
    pub total_ytd: f64,
}

impl From<core_contributions::YtdContributions> for YtdContributions {
    fn from(y: core_contributions::YtdContributions) -> Self {
        Self {
            contributions: y.contributions.into_iter().map(Into::into).collect(),
            total_ytd: y.total_ytd,
        }
    }
}

/// Rounded projection returned by the retirement-impact endpoints.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
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

impl From<core_projection::ProjectionResult> for RetirementImpact {
    fn from(result: core_projection::ProjectionResult) -> Self {
        let r = core_projection::RetirementImpact::from(result);
        Self {
            current_age: r.current_age,
            retirement_age: r.retirement_age,
            annual_contribution: r.annual_contribution,
            estimated_savings: r.estimated_savings,
            future_value_of_current: r.future_value_of_current,
            future_value_of_contributions: r.future_value_of_contributions,
            total_contributions: r.total_contributions,
            investment_growth: r.investment_growth,
            years_to_retirement: r.years_to_retirement,
            annual_return_rate: r.annual_return_rate,
        }
    }
}
