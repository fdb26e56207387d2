use super::contributions_model::{
    demo_history, ContributionHistoryEntry, NewContribution, YtdContributions,
};
use super::contributions_traits::{ContributionRepositoryTrait, ContributionServiceTrait};
use crate::constants::CONTRIBUTION_ENTRY_TYPE;
use crate::errors::Result;
use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

pub struct ContributionService {
    contribution_repository: Arc<dyn ContributionRepositoryTrait>,
}

impl ContributionService {
    pub fn new(contribution_repository: Arc<dyn ContributionRepositoryTrait>) -> Self {
        ContributionService {
            contribution_repository,
        }
    }
}

#[async_trait]
impl ContributionServiceTrait for ContributionService {
    fn get_ytd_contributions(&self) -> Result<YtdContributions> {
        let entries = self
            .contribution_repository
            .load_entries_by_type(CONTRIBUTION_ENTRY_TYPE)?;
        Ok(YtdContributions::from_entries(entries))
    }

    async fn record_contribution(
        &self,
        new_entry: NewContribution,
    ) -> Result<ContributionHistoryEntry> {
        new_entry.validate()?;
        let entry = self.contribution_repository.insert_entry(new_entry).await?;
        debug!(
            "Recorded {} of {} on {}",
            entry.entry_type, entry.amount, entry.date
        );
        Ok(entry)
    }

    async fn seed_demo_history(&self) -> Result<usize> {
        if self.contribution_repository.count_entries()? > 0 {
            debug!("Contribution history already present, skipping demo seed");
            return Ok(0);
        }
        let inserted = self
            .contribution_repository
            .insert_entries(demo_history())
            .await?;
        info!("Seeded {} demo contribution entries", inserted);
        Ok(inserted)
    }
}
