use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use super::model::{ContributionHistoryDB, NewContributionHistoryDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::contribution_history;
use nestegg_core::contributions::{
    ContributionHistoryEntry, ContributionRepositoryTrait, NewContribution,
};
use nestegg_core::errors::Result;

pub struct ContributionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ContributionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ContributionRepository { pool, writer }
    }
}

#[async_trait]
impl ContributionRepositoryTrait for ContributionRepository {
    fn load_entries_by_type(&self, entry_type: &str) -> Result<Vec<ContributionHistoryEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = contribution_history::table
            .filter(contribution_history::entry_type.eq(entry_type))
            .order((contribution_history::date.asc(), contribution_history::id.asc()))
            .select(ContributionHistoryDB::as_select())
            .load::<ContributionHistoryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(ContributionHistoryEntry::from).collect())
    }

    fn count_entries(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        Ok(contribution_history::table
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(StorageError::from)?)
    }

    async fn insert_entry(&self, new_entry: NewContribution) -> Result<ContributionHistoryEntry> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<ContributionHistoryEntry> {
                let new_row: NewContributionHistoryDB = new_entry.into();
                let saved = diesel::insert_into(contribution_history::table)
                    .values(&new_row)
                    .returning(ContributionHistoryDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(ContributionHistoryEntry::from(saved))
            })
            .await
    }

    async fn insert_entries(&self, new_entries: Vec<NewContribution>) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let rows: Vec<NewContributionHistoryDB> =
                    new_entries.into_iter().map(Into::into).collect();
                Ok(diesel::insert_into(contribution_history::table)
                    .values(&rows)
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{self, spawn_writer};
    use chrono::NaiveDate;
    use nestegg_core::constants::CONTRIBUTION_ENTRY_TYPE;
    use nestegg_core::contributions::demo_history;
    use tempfile::TempDir;

    fn setup() -> (ContributionRepository, TempDir) {
        let tmp = tempfile::tempdir().unwrap();
        let db_path = tmp.path().join("contributions.db");
        let db_path = db::init(db_path.to_str().unwrap()).unwrap();
        let pool = db::create_pool(&db_path).unwrap();
        db::run_migrations(&pool).unwrap();
        let writer = spawn_writer((*pool).clone()).unwrap();
        (ContributionRepository::new(pool, writer), tmp)
    }

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, month, day).unwrap()
    }

    #[tokio::test]
    async fn entries_come_back_in_date_order() {
        let (repo, _tmp) = setup();
        repo.insert_entry(NewContribution::contribution(date(3, 15), 300.0))
            .await
            .unwrap();
        repo.insert_entry(NewContribution::contribution(date(1, 15), 100.0))
            .await
            .unwrap();
        repo.insert_entry(NewContribution::contribution(date(2, 15), 200.0))
            .await
            .unwrap();

        let entries = repo.load_entries_by_type(CONTRIBUTION_ENTRY_TYPE).unwrap();
        let amounts: Vec<f64> = entries.iter().map(|e| e.amount).collect();
        assert_eq!(amounts, vec![100.0, 200.0, 300.0]);
        assert_eq!(entries[0].date, date(1, 15));
    }

    #[tokio::test]
    async fn filters_by_type_tag() {
        let (repo, _tmp) = setup();
        repo.insert_entry(NewContribution::contribution(date(4, 15), 250.0))
            .await
            .unwrap();
        repo.insert_entry(NewContribution {
            date: date(4, 30),
            amount: 50.0,
            entry_type: "rollover".to_string(),
        })
        .await
        .unwrap();

        assert_eq!(repo.count_entries().unwrap(), 2);
        assert_eq!(repo.load_entries_by_type(CONTRIBUTION_ENTRY_TYPE).unwrap().len(), 1);
        assert_eq!(repo.load_entries_by_type("rollover").unwrap().len(), 1);
    }

    #[tokio::test]
    async fn bulk_insert_stores_every_entry() {
        let (repo, _tmp) = setup();
        let inserted = repo.insert_entries(demo_history()).await.unwrap();
        assert_eq!(inserted, 11);

        let entries = repo.load_entries_by_type(CONTRIBUTION_ENTRY_TYPE).unwrap();
        let total: f64 = entries.iter().map(|e| e.amount).sum();
        assert_eq!(total, 2_750.0);
        assert_eq!(entries.last().unwrap().date, date(11, 15));
    }
}
