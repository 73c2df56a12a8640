use serde::{Deserialize, Serialize};

use crate::campaign::Campaign;

pub mod endpoints;
pub use endpoints::*;

const NAME_DISPLAY_LIMIT: usize = 10;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CampaignSummary {
    pub total_campaigns: usize,
    pub total_cost: f64,
    pub total_revenue: f64,
    pub average_roi: f64,
}

pub fn summarize(campaigns: &[Campaign]) -> CampaignSummary {
    let total_cost: f64 = campaigns.iter().map(|campaign| campaign.cost).sum();
    let total_revenue: f64 = campaigns.iter().map(|campaign| campaign.revenue).sum();
    let total_roi: f64 = campaigns.iter().map(|campaign| campaign.roi).sum();
    let average_roi = if campaigns.is_empty() {
        0.0
    } else {
        total_roi / campaigns.len() as f64
    };

    CampaignSummary {
        total_campaigns: campaigns.len(),
        total_cost,
        total_revenue,
        average_roi,
    }
}

/// One point per campaign for the roi-over-time and cost-vs-revenue charts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub roi: f64,
    pub cost: f64,
    pub revenue: f64,
    pub index: usize,
}

/// The cached list is newest first; charts read left to right, so points are
/// emitted oldest first with a 1-based index.
pub fn chart_points(campaigns: &[Campaign]) -> Vec<ChartPoint> {
    campaigns
        .iter()
        .rev()
        .enumerate()
        .map(|(index, campaign)| ChartPoint {
            name: display_name(&campaign.name),
            roi: campaign.roi,
            cost: campaign.cost,
            revenue: campaign.revenue,
            index: index + 1,
        })
        .collect()
}

fn display_name(name: &str) -> String {
    if name.chars().count() > NAME_DISPLAY_LIMIT {
        let truncated: String = name.chars().take(NAME_DISPLAY_LIMIT).collect();
        format!("{}...", truncated)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::campaign::CampaignId;

    fn campaign(id: i64, name: &str, cost: f64, revenue: f64, roi: f64) -> Campaign {
        Campaign {
            id: CampaignId::from(id),
            name: name.to_string(),
            cost,
            revenue,
            roi,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn summary_totals_and_average() {
        let campaigns = vec![
            campaign(2, "Email Marketing", 2000.0, 6000.0, 200.0),
            campaign(1, "Social Media", 5000.0, 8000.0, 60.0),
        ];

        let summary = summarize(&campaigns);

        assert_eq!(summary.total_campaigns, 2);
        assert_eq!(summary.total_cost, 7000.0);
        assert_eq!(summary.total_revenue, 14000.0);
        assert_eq!(summary.average_roi, 130.0);
    }

    #[test]
    fn an_empty_list_summarizes_to_zeroes() {
        let summary = summarize(&[]);

        assert_eq!(summary.total_campaigns, 0);
        assert_eq!(summary.total_cost, 0.0);
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.average_roi, 0.0);
    }

    #[test]
    fn chart_points_run_oldest_first_with_one_based_indexes() {
        let campaigns = vec![
            campaign(2, "Newer", 2000.0, 6000.0, 200.0),
            campaign(1, "Older", 5000.0, 8000.0, 60.0),
        ];

        let points = chart_points(&campaigns);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].name, "Older");
        assert_eq!(points[0].index, 1);
        assert_eq!(points[1].name, "Newer");
        assert_eq!(points[1].index, 2);
    }

    #[test]
    fn long_names_are_truncated_for_display() {
        let campaigns = vec![campaign(1, "Social Media Campaign", 5000.0, 8000.0, 60.0)];

        let points = chart_points(&campaigns);

        assert_eq!(points[0].name, "Social Med...");
    }
}
