//! Database models for contribution settings snapshots.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use nestegg_core::errors::Error;
use nestegg_core::settings::{ContributionSettings, ContributionType, NewContributionSettings};

/// Database model for one settings snapshot
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::user_settings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserSettingsDB {
    pub id: i32,
    pub contribution_type: String,
    pub contribution_value: f64,
    pub age: i32,
    pub salary: f64,
    pub retirement_age: i32,
    pub updated_at: NaiveDateTime,
}

/// Database model for inserting a snapshot
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::user_settings)]
pub struct NewUserSettingsDB {
    pub contribution_type: String,
    pub contribution_value: f64,
    pub age: i32,
    pub salary: f64,
    pub retirement_age: i32,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<UserSettingsDB> for ContributionSettings {
    type Error = Error;

    fn try_from(db: UserSettingsDB) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Some(db.id),
            contribution_type: db.contribution_type.parse::<ContributionType>()?,
            contribution_value: db.contribution_value,
            age: db.age,
            salary: db.salary,
            retirement_age: db.retirement_age,
            updated_at: Some(db.updated_at),
        })
    }
}

impl From<NewContributionSettings> for NewUserSettingsDB {
    fn from(domain: NewContributionSettings) -> Self {
        Self {
            contribution_type: domain.contribution_type.as_str().to_string(),
            contribution_value: domain.contribution_value,
            age: domain.age,
            salary: domain.salary,
            retirement_age: domain.retirement_age,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
