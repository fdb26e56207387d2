use std::sync::Arc;

use log::debug;

use super::projection_calculator::calculate_projection;
use super::projection_model::{ProjectionInput, ProjectionResult};
use crate::contributions::ContributionServiceTrait;
use crate::errors::Result;
use crate::settings::SettingsServiceTrait;

/// Trait for projection service operations
pub trait ProjectionServiceTrait: Send + Sync {
    /// Projects an already validated input.
    fn project(&self, input: &ProjectionInput) -> ProjectionResult;

    /// Projects the current settings snapshot against the YTD savings total.
    fn project_current(&self) -> Result<ProjectionResult>;
}

pub struct ProjectionService {
    settings_service: Arc<dyn SettingsServiceTrait>,
    contribution_service: Arc<dyn ContributionServiceTrait>,
}

impl ProjectionService {
    pub fn new(
        settings_service: Arc<dyn SettingsServiceTrait>,
        contribution_service: Arc<dyn ContributionServiceTrait>,
    ) -> Self {
        ProjectionService {
            settings_service,
            contribution_service,
        }
    }
}

impl ProjectionServiceTrait for ProjectionService {
    fn project(&self, input: &ProjectionInput) -> ProjectionResult {
        calculate_projection(input)
    }

    fn project_current(&self) -> Result<ProjectionResult> {
        let settings = self.settings_service.get_settings()?;
        let ytd = self.contribution_service.get_ytd_contributions()?;
        debug!(
            "Projecting current settings ({} {}) with {} saved",
            settings.contribution_type, settings.contribution_value, ytd.total_ytd
        );
        let input = ProjectionInput::from_settings(&settings, ytd.total_ytd)?;
        Ok(calculate_projection(&input))
    }
}
