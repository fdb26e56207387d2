//! Database models for contribution history entries.

use chrono::NaiveDate;
use diesel::prelude::*;
use nestegg_core::contributions::{ContributionHistoryEntry, NewContribution};

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::contribution_history)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ContributionHistoryDB {
    pub id: i32,
    pub date: NaiveDate,
    pub amount: f64,
    pub entry_type: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::contribution_history)]
pub struct NewContributionHistoryDB {
    pub date: NaiveDate,
    pub amount: f64,
    pub entry_type: String,
}

impl From<ContributionHistoryDB> for ContributionHistoryEntry {
    fn from(db: ContributionHistoryDB) -> Self {
        Self {
            id: db.id,
            date: db.date,
            amount: db.amount,
            entry_type: db.entry_type,
        }
    }
}

impl From<NewContribution> for NewContributionHistoryDB {
    fn from(domain: NewContribution) -> Self {
        Self {
            date: domain.date,
            amount: domain.amount,
            entry_type: domain.entry_type,
        }
    }
}
