use super::settings_model::{ContributionSettings, SettingsUpdate};
use super::settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
use crate::errors::Result;
use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self) -> Result<ContributionSettings> {
        match self.settings_repository.get_latest_settings()? {
            Some(settings) => Ok(settings),
            None => {
                debug!("No saved contribution settings, using defaults");
                Ok(ContributionSettings::default())
            }
        }
    }

    async fn update_settings(&self, update: SettingsUpdate) -> Result<ContributionSettings> {
        let new_settings = update.into_new_settings()?;
        let saved = self
            .settings_repository
            .insert_settings(new_settings)
            .await?;
        info!(
            "Contribution settings updated: {} {}",
            saved.contribution_type, saved.contribution_value
        );
        Ok(saved)
    }
}
