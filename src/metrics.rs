use chrono::{DateTime, Utc};

use crate::constants::CURRENCY_SYMBOL;

/// Percentage return on a campaign. A zero cost yields 0 rather than an
/// error, matching the submission rule that rejects zero-cost campaigns
/// before this is ever stored.
pub fn calculate_roi(revenue: f64, cost: f64) -> f64 {
    if cost == 0.0 {
        return 0.0;
    }

    ((revenue - cost) / cost) * 100.0
}

/// Fixed INR rendering: sign, rupee symbol, Indian digit grouping, two
/// fractional digits.
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = match fixed.split_once('.') {
        Some(parts) => parts,
        None => (fixed.as_str(), "00"),
    };

    format!("{}{}{}.{}", sign, CURRENCY_SYMBOL, group_indian(whole), frac)
}

// Last three digits, then groups of two.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = vec![tail.to_string()];
    let mut rest = head;
    while rest.len() > 2 {
        let (next, group) = rest.split_at(rest.len() - 2);
        groups.push(group.to_string());
        rest = next;
    }
    groups.push(rest.to_string());
    groups.reverse();

    groups.join(",")
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Day, short month, year, two-digit hour and minute.
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%-d %b %Y, %I:%M %P").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn roi_is_profit_over_cost_as_percentage() {
        assert_eq!(calculate_roi(6000.0, 2000.0), 200.0);
        assert_eq!(calculate_roi(1500.0, 3000.0), -50.0);
        assert_eq!(calculate_roi(0.0, 2000.0), -100.0);
        assert_eq!(calculate_roi(2000.0, 2000.0), 0.0);
    }

    #[test]
    fn roi_with_zero_cost_is_zero() {
        assert_eq!(calculate_roi(100.0, 0.0), 0.0);
        assert_eq!(calculate_roi(0.0, 0.0), 0.0);
        assert_eq!(calculate_roi(-50.0, 0.0), 0.0);
    }

    #[test]
    fn percentages_round_to_two_decimals() {
        assert_eq!(format_percentage(12.3456), "12.35%");
        assert_eq!(format_percentage(-4.0), "-4.00%");
        assert_eq!(format_percentage(0.0), "0.00%");
        assert_eq!(format_percentage(200.0), "200.00%");
    }

    #[test]
    fn currency_keeps_two_fractional_digits() {
        assert_eq!(format_currency(0.0), "₹0.00");
        assert_eq!(format_currency(123.5), "₹123.50");
        assert_eq!(format_currency(12345.678), "₹12,345.68");
    }

    #[test]
    fn currency_uses_indian_grouping() {
        assert_eq!(format_currency(100.0), "₹100.00");
        assert_eq!(format_currency(1000.0), "₹1,000.00");
        assert_eq!(format_currency(100000.0), "₹1,00,000.00");
        assert_eq!(format_currency(1234567.89), "₹12,34,567.89");
    }

    #[test]
    fn currency_puts_the_sign_before_the_symbol() {
        assert_eq!(format_currency(-123.0), "-₹123.00");
        assert_eq!(format_currency(-1234567.89), "-₹12,34,567.89");
    }

    #[test]
    fn dates_render_in_the_fixed_display_format() {
        let afternoon = chrono::Utc.with_ymd_and_hms(2025, 8, 5, 14, 7, 0).unwrap();
        assert_eq!(format_date(afternoon), "5 Aug 2025, 02:07 pm");

        let morning = chrono::Utc.with_ymd_and_hms(2025, 1, 31, 9, 5, 0).unwrap();
        assert_eq!(format_date(morning), "31 Jan 2025, 09:05 am");
    }
}
