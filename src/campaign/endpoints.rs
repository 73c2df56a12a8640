use actix_web::web::{Data, Json, Path, Query};
use actix_web::{delete, get, post};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::CAMPAIGN_TEMPLATES;
use crate::error::Error;
use crate::metrics::{calculate_roi, format_currency, format_date, format_percentage};

use super::form;
use super::manager::CampaignManager;
use super::{Campaign, CampaignId, CampaignInput};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateCampaignBody {
    pub name: String,
    pub cost: f64,
    pub revenue: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CampaignBody {
    pub id: CampaignId,
    pub name: String,
    pub cost: f64,
    pub revenue: f64,
    pub roi: f64,
    pub timestamp: DateTime<Utc>,
    pub formatted_cost: String,
    pub formatted_revenue: String,
    pub formatted_roi: String,
    pub formatted_timestamp: String,
}

impl CampaignBody {
    pub fn render(campaign: Campaign) -> CampaignBody {
        CampaignBody {
            id: campaign.id,
            cost: campaign.cost,
            revenue: campaign.revenue,
            roi: campaign.roi,
            timestamp: campaign.timestamp,
            formatted_cost: format_currency(campaign.cost),
            formatted_revenue: format_currency(campaign.revenue),
            formatted_roi: format_percentage(campaign.roi),
            formatted_timestamp: format_date(campaign.timestamp),
            name: campaign.name,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CampaignDeletedBody {
    pub id: CampaignId,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CampaignTemplateBody {
    pub name: String,
    pub cost: f64,
    pub revenue: f64,
    pub roi: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RoiPreviewQuery {
    pub cost: String,
    pub revenue: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoiPreviewBody {
    pub roi: Option<f64>,
    pub formatted_roi: Option<String>,
    pub formatted_profit: Option<String>,
}

#[post("/campaigns")]
#[tracing::instrument(skip(manager))]
async fn create_campaign(
    manager: Data<CampaignManager>,
    body: Json<CreateCampaignBody>,
) -> Result<Json<CampaignBody>, Error> {
    let body = body.into_inner();

    form::validate_submission(&body.name, body.cost, body.revenue)?;

    let roi = calculate_roi(body.revenue, body.cost);
    let campaign = manager
        .add(CampaignInput {
            name: body.name.trim().to_string(),
            cost: body.cost,
            revenue: body.revenue,
            roi,
        })
        .await?;

    Ok(Json(CampaignBody::render(campaign)))
}

#[get("/campaigns")]
#[tracing::instrument(skip(manager))]
async fn get_campaigns(manager: Data<CampaignManager>) -> Result<Json<Vec<CampaignBody>>, Error> {
    let campaigns = manager.fetch().await?;

    let body = campaigns.into_iter().map(CampaignBody::render).collect();

    Ok(Json(body))
}

#[delete("/campaigns/{campaign_id}")]
#[tracing::instrument(skip(manager))]
async fn delete_campaign(
    manager: Data<CampaignManager>,
    params: Path<CampaignId>,
) -> Result<Json<CampaignDeletedBody>, Error> {
    let campaign_id = params.into_inner();

    manager.remove(campaign_id).await?;

    Ok(Json(CampaignDeletedBody { id: campaign_id }))
}

#[get("/campaigns/templates")]
#[tracing::instrument]
async fn get_campaign_templates() -> Json<Vec<CampaignTemplateBody>> {
    let body = CAMPAIGN_TEMPLATES
        .iter()
        .map(|template| CampaignTemplateBody {
            name: template.name.to_string(),
            cost: template.cost,
            revenue: template.revenue,
            roi: calculate_roi(template.revenue, template.cost),
        })
        .collect();

    Json(body)
}

#[get("/roi/preview")]
#[tracing::instrument]
async fn preview_roi(query: Query<RoiPreviewQuery>) -> Json<RoiPreviewBody> {
    let query = query.into_inner();

    let body = match form::preview_roi(&query.cost, &query.revenue) {
        Some(preview) => RoiPreviewBody {
            roi: Some(preview.roi),
            formatted_roi: Some(format_percentage(preview.roi)),
            formatted_profit: Some(format_currency(preview.profit)),
        },
        None => RoiPreviewBody {
            roi: None,
            formatted_roi: None,
            formatted_profit: None,
        },
    };

    Json(body)
}
