use tracing::{info, Level};
use tracing_subscriber::fmt::format::FmtSpan;

use roitrack_server::constants::APP_NAME;
use roitrack_server::Error;

#[actix_web::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_span_events(FmtSpan::NEW)
        .compact()
        .init();

    info!("starting {}", APP_NAME);
    roitrack_server::run(true).await?;

    Ok(())
}
