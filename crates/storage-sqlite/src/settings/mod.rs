//! SQLite storage implementation for contribution settings.

mod model;
mod repository;

pub use model::{NewUserSettingsDB, UserSettingsDB};
pub use repository::SettingsRepository;

// Re-export trait from core for convenience
pub use nestegg_core::settings::SettingsRepositoryTrait;
