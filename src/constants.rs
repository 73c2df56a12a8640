pub const APP_NAME: &str = "ROI Campaign Tracker";

pub const CURRENCY_CODE: &str = "INR";
pub const CURRENCY_SYMBOL: &str = "₹";

/// Cap on the initial load, campaigns beyond it are not paged in.
pub const FETCH_LIMIT: i64 = 100;

pub const CAMPAIGN_NAME_MIN: usize = 2;

#[derive(Clone, Copy, Debug)]
pub struct CampaignTemplate {
    pub name: &'static str,
    pub cost: f64,
    pub revenue: f64,
}

pub const CAMPAIGN_TEMPLATES: [CampaignTemplate; 3] = [
    CampaignTemplate {
        name: "Social Media Campaign",
        cost: 5000.0,
        revenue: 8000.0,
    },
    CampaignTemplate {
        name: "Email Marketing",
        cost: 2000.0,
        revenue: 6000.0,
    },
    CampaignTemplate {
        name: "Google Ads Campaign",
        cost: 10000.0,
        revenue: 15000.0,
    },
];
