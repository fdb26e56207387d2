use crate::contributions::contributions_model::{
    ContributionHistoryEntry, NewContribution, YtdContributions,
};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for the append-only contribution log
#[async_trait]
pub trait ContributionRepositoryTrait: Send + Sync {
    /// Entries carrying the given type tag, ordered by date then id.
    fn load_entries_by_type(&self, entry_type: &str) -> Result<Vec<ContributionHistoryEntry>>;
    fn count_entries(&self) -> Result<i64>;
    async fn insert_entry(&self, new_entry: NewContribution) -> Result<ContributionHistoryEntry>;
    async fn insert_entries(&self, new_entries: Vec<NewContribution>) -> Result<usize>;
}

/// Trait for contribution log service operations
#[async_trait]
pub trait ContributionServiceTrait: Send + Sync {
    fn get_ytd_contributions(&self) -> Result<YtdContributions>;
    async fn record_contribution(
        &self,
        new_entry: NewContribution,
    ) -> Result<ContributionHistoryEntry>;
    async fn seed_demo_history(&self) -> Result<usize>;
}
