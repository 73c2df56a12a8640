use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument};
use mongodb::{bson, Collection, Database, IndexModel};

use crate::error::Error;

use super::{Campaign, CampaignId, NewCampaign};

const CAMPAIGNS: &str = "campaigns";
const COUNTERS: &str = "counters";

#[async_trait]
pub trait CampaignStore: Send + Sync {
    async fn insert_campaign(&self, campaign: &NewCampaign) -> Result<Campaign, Error>;
    async fn fetch_recent_campaigns(&self, limit: i64) -> Result<Vec<Campaign>, Error>;
    async fn delete_campaign_by_id(&self, campaign_id: CampaignId) -> Result<(), Error>;
}

#[derive(Debug, Clone)]
pub struct MongoCampaignStore {
    campaigns: Collection<Campaign>,
    counters: Collection<bson::Document>,
}

impl MongoCampaignStore {
    pub fn new(db: &Database) -> MongoCampaignStore {
        MongoCampaignStore {
            campaigns: db.collection(CAMPAIGNS),
            counters: db.collection(COUNTERS),
        }
    }

    pub async fn initialize(&self) -> Result<(), Error> {
        let index = IndexModel::builder()
            .keys(bson::doc! { "timestamp": -1 })
            .build();
        self.campaigns.create_index(index, None).await?;

        Ok(())
    }

    async fn allocate_campaign_id(&self) -> Result<CampaignId, Error> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();
        let counter = self
            .counters
            .find_one_and_update(
                bson::doc! { "_id": CAMPAIGNS },
                bson::doc! { "$inc": { "seq": 1i64 } },
                options,
            )
            .await?
            .ok_or_else(|| {
                Error::InvalidStoreState("campaign counter upsert returned no document".to_string())
            })?;

        let seq = counter.get_i64("seq").map_err(|_| {
            Error::InvalidStoreState("campaign counter is missing an integer seq".to_string())
        })?;

        Ok(CampaignId::from(seq))
    }
}

#[async_trait]
impl CampaignStore for MongoCampaignStore {
    #[tracing::instrument(skip(self))]
    async fn insert_campaign(&self, campaign: &NewCampaign) -> Result<Campaign, Error> {
        let campaign = Campaign {
            id: self.allocate_campaign_id().await?,
            name: campaign.name.clone(),
            cost: campaign.cost,
            revenue: campaign.revenue,
            roi: campaign.roi,
            timestamp: campaign.timestamp,
        };

        let result = self.campaigns.insert_one(&campaign, None).await?;
        if result.inserted_id != bson::Bson::from(campaign.id) {
            return Err(Error::StoreReturnedMismatchedRecord {
                campaign_id: campaign.id,
            });
        }

        Ok(campaign)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_recent_campaigns(&self, limit: i64) -> Result<Vec<Campaign>, Error> {
        let options = FindOptions::builder()
            .sort(bson::doc! { "timestamp": -1 })
            .limit(limit)
            .build();
        let campaigns: Vec<Campaign> = self
            .campaigns
            .find(bson::doc! {}, options)
            .await?
            .try_collect()
            .await?;

        Ok(campaigns)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_campaign_by_id(&self, campaign_id: CampaignId) -> Result<(), Error> {
        // the deleted count is not inspected, a missing id reports as deleted
        self.campaigns
            .delete_one(bson::doc! { "_id": campaign_id }, None)
            .await?;

        Ok(())
    }
}
