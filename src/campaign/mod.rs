use std::fmt::{Debug, Display};

use chrono::{DateTime, Utc};
use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};

pub mod db;
pub mod endpoints;
pub mod form;
pub mod manager;
pub use endpoints::*;

/// Store-assigned integer id, allocated at insert time.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CampaignId(i64);

impl From<i64> for CampaignId {
    fn from(id: i64) -> CampaignId {
        CampaignId(id)
    }
}

impl From<CampaignId> for Bson {
    fn from(id: CampaignId) -> Bson {
        Bson::Int64(id.0)
    }
}

impl Display for CampaignId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl Debug for CampaignId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        Display::fmt(self, f)
    }
}

/// One tracked marketing effort. Immutable once stored, the lifecycle is
/// create then optionally delete.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Campaign {
    #[serde(rename = "_id")]
    pub id: CampaignId,
    pub name: String,
    pub cost: f64,
    pub revenue: f64,
    pub roi: f64,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,
}

/// Insert payload, everything but the store-assigned id.
#[derive(Clone, Debug)]
pub struct NewCampaign {
    pub name: String,
    pub cost: f64,
    pub revenue: f64,
    pub roi: f64,
    pub timestamp: DateTime<Utc>,
}

/// Input to [`manager::CampaignManager::add`]. The roi is computed by the
/// caller, the data layer does not recompute it.
#[derive(Clone, Debug)]
pub struct CampaignInput {
    pub name: String,
    pub cost: f64,
    pub revenue: f64,
    pub roi: f64,
}
