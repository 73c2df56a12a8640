use chrono::Utc;
use parking_lot::Mutex;

use crate::constants::FETCH_LIMIT;
use crate::database::Database;
use crate::error::Error;

use super::{Campaign, CampaignId, CampaignInput, NewCampaign};

const FETCH_FAILED: &str = "Failed to fetch campaigns";

#[derive(Default)]
struct ManagerState {
    campaigns: Vec<Campaign>,
    loading: bool,
    error: Option<String>,
}

/// Owns the in-memory campaign list for the process. The list is a cache of
/// the store's newest-first ordering and is only mutated in direct response
/// to a confirmed store outcome, never before a call resolves.
pub struct CampaignManager {
    db: Box<dyn Database>,
    state: Mutex<ManagerState>,
}

impl CampaignManager {
    pub fn new(db: Box<dyn Database>) -> CampaignManager {
        CampaignManager {
            db,
            state: Mutex::new(ManagerState::default()),
        }
    }

    /// Replaces the cached list wholesale with the store's ordering. On
    /// failure the previous list stays available and the shared error field
    /// carries a generic message, the store error itself is only logged.
    #[tracing::instrument(skip(self))]
    pub async fn fetch(&self) -> Result<Vec<Campaign>, Error> {
        {
            let mut state = self.state.lock();
            state.loading = true;
            state.error = None;
        }

        let result = self
            .db
            .campaigns()
            .fetch_recent_campaigns(FETCH_LIMIT)
            .await;

        let mut state = self.state.lock();
        state.loading = false;
        match result {
            Ok(campaigns) => {
                state.campaigns = campaigns.clone();
                Ok(campaigns)
            }
            Err(err) => {
                tracing::error!("failed to fetch campaigns: {}", err);
                state.error = Some(FETCH_FAILED.to_string());
                Err(err)
            }
        }
    }

    /// Stamps the input with a fresh timestamp, inserts it, and prepends the
    /// store-returned record to the cached list. Failures are returned to the
    /// caller without touching the cache or the shared error field.
    #[tracing::instrument(skip(self))]
    pub async fn add(&self, input: CampaignInput) -> Result<Campaign, Error> {
        let record = NewCampaign {
            name: input.name,
            cost: input.cost,
            revenue: input.revenue,
            roi: input.roi,
            timestamp: Utc::now(),
        };

        let stored = self.db.campaigns().insert_campaign(&record).await?;

        // the store is not trusted to echo the record back unchanged;
        // timestamps are excluded, bson datetimes round to milliseconds
        if stored.name != record.name
            || stored.cost != record.cost
            || stored.revenue != record.revenue
            || stored.roi != record.roi
        {
            return Err(Error::StoreReturnedMismatchedRecord {
                campaign_id: stored.id,
            });
        }

        let mut state = self.state.lock();
        state.campaigns.insert(0, stored.clone());

        Ok(stored)
    }

    /// Deletes by id and filters the cached list once the store confirms.
    #[tracing::instrument(skip(self))]
    pub async fn remove(&self, campaign_id: CampaignId) -> Result<(), Error> {
        self.db
            .campaigns()
            .delete_campaign_by_id(campaign_id)
            .await?;

        let mut state = self.state.lock();
        state.campaigns.retain(|campaign| campaign.id != campaign_id);

        Ok(())
    }

    pub fn campaigns(&self) -> Vec<Campaign> {
        self.state.lock().campaigns.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }

    pub fn last_error(&self) -> Option<String> {
        self.state.lock().error.clone()
    }
}
