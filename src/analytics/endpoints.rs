use actix_web::get;
use actix_web::web::{Data, Json};
use serde::{Deserialize, Serialize};

use crate::campaign::manager::CampaignManager;
use crate::error::Error;
use crate::metrics::{format_currency, format_percentage};

use super::{chart_points, summarize, CampaignSummary, ChartPoint};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalyticsBody {
    pub summary: CampaignSummary,
    pub formatted_total_cost: String,
    pub formatted_total_revenue: String,
    pub formatted_average_roi: String,
    pub points: Vec<ChartPoint>,
}

#[get("/analytics")]
#[tracing::instrument(skip(manager))]
async fn get_analytics(manager: Data<CampaignManager>) -> Result<Json<AnalyticsBody>, Error> {
    let campaigns = manager.fetch().await?;

    let summary = summarize(&campaigns);
    let body = AnalyticsBody {
        formatted_total_cost: format_currency(summary.total_cost),
        formatted_total_revenue: format_currency(summary.total_revenue),
        formatted_average_roi: format_percentage(summary.average_roi),
        points: chart_points(&campaigns),
        summary,
    };

    Ok(Json(body))
}
