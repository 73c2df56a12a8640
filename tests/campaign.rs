use std::time::Duration;

use awc::Client;
use roitrack_server::{CampaignBody, CreateCampaignBody};

// Drives the real server over HTTP, needs a local mongod on 27017.
#[actix_rt::test]
#[ignore]
async fn create_campaign() {
    let _ = std::thread::spawn(|| {
        actix_web::rt::System::new().block_on(roitrack_server::run(false))
    });
    tokio::time::sleep(Duration::from_millis(500)).await;

    let body = CreateCampaignBody {
        name: "Festive Launch Push".into(),
        cost: 2000.0,
        revenue: 6000.0,
    };
    let client = Client::default();
    let campaign: CampaignBody = client
        .post("http://localhost:8080/campaigns")
        .send_json(&body)
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(campaign.name, "Festive Launch Push".to_string());
    assert_eq!(campaign.roi, 200.0);
    assert_eq!(campaign.formatted_roi, "200.00%".to_string());
}
