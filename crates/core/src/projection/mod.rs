//! Projection module - retirement projection calculator, request parsing, and service.

mod projection_calculator;
mod projection_model;
mod projection_params;
mod projection_service;

pub use projection_calculator::calculate_projection;
pub use projection_model::{round_to_unit, ProjectionInput, ProjectionResult, RetirementImpact};
pub use projection_params::{ProjectionParams, REQUIRED_PARAMETERS};
pub use projection_service::{ProjectionService, ProjectionServiceTrait};
