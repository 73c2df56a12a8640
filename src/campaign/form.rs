use crate::constants::CAMPAIGN_NAME_MIN;
use crate::error::Error;
use crate::metrics::calculate_roi;

/// Submission rules, checked before any store call is made: trimmed name of
/// at least two characters, strictly positive cost, non-negative revenue.
pub fn validate_submission(name: &str, cost: f64, revenue: f64) -> Result<(), Error> {
    if name.trim().chars().count() < CAMPAIGN_NAME_MIN {
        return Err(Error::CampaignNameTooShort {
            name: name.to_string(),
        });
    }
    if !(cost > 0.0) {
        return Err(Error::CampaignCostNotPositive { cost });
    }
    if !(revenue >= 0.0) {
        return Err(Error::CampaignRevenueNegative { revenue });
    }

    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoiPreview {
    pub roi: f64,
    pub profit: f64,
}

/// Live preview over raw text inputs. Only computable when both fields parse
/// and the cost is strictly positive.
pub fn preview_roi(cost: &str, revenue: &str) -> Option<RoiPreview> {
    let cost: f64 = cost.trim().parse().ok()?;
    let revenue: f64 = revenue.trim().parse().ok()?;

    if revenue.is_nan() || !(cost > 0.0) {
        return None;
    }

    Some(RoiPreview {
        roi: calculate_roi(revenue, cost),
        profit: revenue - cost,
    })
}
