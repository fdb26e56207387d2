use crate::errors::Result;
use crate::settings::settings_model::{ContributionSettings, NewContributionSettings, SettingsUpdate};
use async_trait::async_trait;

/// Trait for settings repository operations
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// The most recently saved snapshot, if any.
    fn get_latest_settings(&self) -> Result<Option<ContributionSettings>>;

    /// Persist a new snapshot; it becomes the current settings.
    async fn insert_settings(
        &self,
        new_settings: NewContributionSettings,
    ) -> Result<ContributionSettings>;
}

/// Trait for settings service operations
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    fn get_settings(&self) -> Result<ContributionSettings>;
    async fn update_settings(&self, update: SettingsUpdate) -> Result<ContributionSettings>;
}
