use actix_web::web::{self, Data, FormConfig, JsonConfig, PathConfig, QueryConfig};
use actix_web::{App, HttpServer, ResponseError};
use mongodb::Client;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub mod analytics;
pub mod campaign;
pub mod constants;
pub mod database;
pub mod error;
pub mod metrics;
pub mod seed;

pub use analytics::{AnalyticsBody, CampaignSummary, ChartPoint};
pub use campaign::endpoints::{
    CampaignBody, CampaignDeletedBody, CampaignTemplateBody, CreateCampaignBody, RoiPreviewBody,
};
pub use campaign::manager::CampaignManager;
pub use campaign::{Campaign, CampaignId, CampaignInput};
pub use error::Error;

use crate::database::MongoDatabase;

pub async fn run(seed_demo: bool) -> Result<(), Error> {
    let uri = "mongodb://localhost:27017";
    info!("connecting to db: {}", uri);
    let db = Client::with_uri_str(uri).await?.database("roitrack");
    let db = MongoDatabase::initialize(db).await?;

    if seed_demo {
        seed::seed(&db).await?;
    }

    let manager = Data::new(CampaignManager::new(Box::new(db)));

    HttpServer::new(move || {
        App::new()
            .app_data(JsonConfig::default().error_handler(|err, _req| {
                // format json errors with custom format
                Error::InvalidJson(err).into()
            }))
            .app_data(PathConfig::default().error_handler(|err, _req| {
                // format path errors with custom format
                Error::InvalidPath(err).into()
            }))
            .app_data(FormConfig::default().error_handler(|err, _req| {
                // format form errors with custom format
                Error::InvalidForm(err).into()
            }))
            .app_data(QueryConfig::default().error_handler(|err, _req| {
                // format query errors with custom format
                Error::InvalidQuery(err).into()
            }))
            .app_data(manager.clone())
            .wrap(TracingLogger::default())
            .service(campaign::endpoints::create_campaign)
            .service(campaign::endpoints::get_campaigns)
            .service(campaign::endpoints::delete_campaign)
            .service(campaign::endpoints::get_campaign_templates)
            .service(campaign::endpoints::preview_roi)
            .service(analytics::endpoints::get_analytics)
            .default_service(web::to(|| async { Error::PathDoesNotExist.error_response() }))
    })
    .bind("127.0.0.1:8080")?
    .run()
    .await?;

    Ok(())
}
