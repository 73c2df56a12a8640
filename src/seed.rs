use chrono::Utc;
use tracing::info;

use crate::campaign::NewCampaign;
use crate::constants::CAMPAIGN_TEMPLATES;
use crate::database::Database;
use crate::error::Error;
use crate::metrics::calculate_roi;

/// Inserts the quick-fill templates as demo campaigns, only into an empty
/// store.
pub async fn seed(db: &dyn Database) -> Result<(), Error> {
    let existing = db.campaigns().fetch_recent_campaigns(1).await?;
    if !existing.is_empty() {
        return Ok(());
    }

    info!("seeding demo campaigns");
    for template in CAMPAIGN_TEMPLATES.iter() {
        let record = NewCampaign {
            name: template.name.to_string(),
            cost: template.cost,
            revenue: template.revenue,
            roi: calculate_roi(template.revenue, template.cost),
            timestamp: Utc::now(),
        };
        db.campaigns().insert_campaign(&record).await?;
    }

    Ok(())
}
