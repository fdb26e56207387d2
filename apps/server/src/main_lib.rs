use std::sync::Arc;

use crate::config::Config;
use nestegg_core::{
    contributions::{ContributionService, ContributionServiceTrait},
    projection::{ProjectionService, ProjectionServiceTrait},
    settings::{SettingsService, SettingsServiceTrait},
};
use nestegg_storage_sqlite::{
    contributions::ContributionRepository, db, settings::SettingsRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub settings_service: Arc<dyn SettingsServiceTrait>,
    pub contribution_service: Arc<dyn ContributionServiceTrait>,
    pub projection_service: Arc<dyn ProjectionServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("NESTEGG_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone())?;

    let settings_repo = Arc::new(SettingsRepository::new(pool.clone(), writer.clone()));
    let settings_service: Arc<dyn SettingsServiceTrait> =
        Arc::new(SettingsService::new(settings_repo));

    let contribution_repo = Arc::new(ContributionRepository::new(pool.clone(), writer.clone()));
    let contribution_service: Arc<dyn ContributionServiceTrait> =
        Arc::new(ContributionService::new(contribution_repo));

    if config.seed_demo_data {
        contribution_service.seed_demo_history().await?;
    }

    let projection_service: Arc<dyn ProjectionServiceTrait> = Arc::new(ProjectionService::new(
        settings_service.clone(),
        contribution_service.clone(),
    ));

    Ok(Arc::new(AppState {
        settings_service,
        contribution_service,
        projection_service,
    }))
}
