use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use super::model::{NewUserSettingsDB, UserSettingsDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::user_settings;
use nestegg_core::errors::Result;
use nestegg_core::settings::{
    ContributionSettings, NewContributionSettings, SettingsRepositoryTrait,
};

/// Settings are stored as a series of snapshots; the newest row is current.
pub struct SettingsRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SettingsRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SettingsRepository { pool, writer }
    }
}

#[async_trait]
impl SettingsRepositoryTrait for SettingsRepository {
    fn get_latest_settings(&self) -> Result<Option<ContributionSettings>> {
        let mut conn = get_connection(&self.pool)?;
        let latest = user_settings::table
            .order(user_settings::id.desc())
            .select(UserSettingsDB::as_select())
            .first::<UserSettingsDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        latest.map(ContributionSettings::try_from).transpose()
    }

    async fn insert_settings(
        &self,
        new_settings: NewContributionSettings,
    ) -> Result<ContributionSettings> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<ContributionSettings> {
                let new_row: NewUserSettingsDB = new_settings.into();
                let saved = diesel::insert_into(user_settings::table)
                    .values(&new_row)
                    .returning(UserSettingsDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                ContributionSettings::try_from(saved)
            })
            .await
    }
}
