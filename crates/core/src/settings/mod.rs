//! Settings module - contribution settings snapshots, service, and traits.

mod settings_model;
mod settings_service;
mod settings_traits;

pub use settings_model::{
    ContributionSettings, ContributionType, NewContributionSettings, SettingsUpdate,
};
pub use settings_service::SettingsService;
pub use settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
