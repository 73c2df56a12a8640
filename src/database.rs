use mongodb::Database as MongoDb;

use crate::campaign::db::{CampaignStore, MongoCampaignStore};
use crate::error::Error;

pub trait Database: Send + Sync {
    fn campaigns(&self) -> &dyn CampaignStore;
}

#[derive(Debug, Clone)]
pub struct MongoDatabase {
    campaigns: MongoCampaignStore,
}

impl MongoDatabase {
    pub async fn initialize(db: MongoDb) -> Result<MongoDatabase, Error> {
        let campaigns = MongoCampaignStore::new(&db);
        campaigns.initialize().await?;

        Ok(MongoDatabase { campaigns })
    }
}

impl Database for MongoDatabase {
    fn campaigns(&self) -> &dyn CampaignStore {
        &self.campaigns
    }
}

#[cfg(test)]
pub mod test {
    use async_trait::async_trait;

    use crate::campaign::db::CampaignStore;
    use crate::campaign::{Campaign, CampaignId, NewCampaign};
    use crate::error::Error;

    use super::Database;

    pub struct MockDatabase {
        pub campaigns: MockCampaignStore,
    }

    impl MockDatabase {
        pub fn new() -> MockDatabase {
            MockDatabase {
                campaigns: MockCampaignStore::new(),
            }
        }
    }

    impl Database for MockDatabase {
        fn campaigns(&self) -> &dyn CampaignStore {
            &self.campaigns
        }
    }

    pub struct MockCampaignStore {
        pub on_insert_campaign:
            Box<dyn Fn(&NewCampaign) -> Result<Campaign, Error> + Send + Sync>,
        pub on_fetch_recent_campaigns:
            Box<dyn Fn(i64) -> Result<Vec<Campaign>, Error> + Send + Sync>,
        pub on_delete_campaign_by_id:
            Box<dyn Fn(CampaignId) -> Result<(), Error> + Send + Sync>,
    }

    impl MockCampaignStore {
        pub fn new() -> MockCampaignStore {
            MockCampaignStore {
                on_insert_campaign: Box::new(|_| panic!("insert_campaign is not mocked")),
                on_fetch_recent_campaigns: Box::new(|_| {
                    panic!("fetch_recent_campaigns is not mocked")
                }),
                on_delete_campaign_by_id: Box::new(|_| {
                    panic!("delete_campaign_by_id is not mocked")
                }),
            }
        }
    }

    #[async_trait]
    impl CampaignStore for MockCampaignStore {
        async fn insert_campaign(&self, campaign: &NewCampaign) -> Result<Campaign, Error> {
            (self.on_insert_campaign)(campaign)
        }

        async fn fetch_recent_campaigns(&self, limit: i64) -> Result<Vec<Campaign>, Error> {
            (self.on_fetch_recent_campaigns)(limit)
        }

        async fn delete_campaign_by_id(&self, campaign_id: CampaignId) -> Result<(), Error> {
            (self.on_delete_campaign_by_id)(campaign_id)
        }
    }
}
