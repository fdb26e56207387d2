//! SQLite storage implementation for the contribution log.

mod model;
mod repository;

pub use model::{ContributionHistoryDB, NewContributionHistoryDB};
pub use repository::ContributionRepository;
