//! Contributions module - append-only contribution log, service, and traits.

mod contributions_model;
mod contributions_service;
mod contributions_traits;

pub use contributions_model::{
    demo_history, ContributionHistoryEntry, NewContribution, YtdContributions,
};
pub use contributions_service::ContributionService;
pub use contributions_traits::{ContributionRepositoryTrait, ContributionServiceTrait};
