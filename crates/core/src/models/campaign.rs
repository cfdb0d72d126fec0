use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Campaign objectives offered by the ads manager.
pub const KNOWN_OBJECTIVES: &[&str] =
    &["Awareness", "Traffic", "Engagement", "Leads", "App Promotion", "Sales"];

const US_DATE: &str = "%m/%d/%Y";
const ISO_DATE: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetType {
    #[default]
    Daily,
    Lifetime,
}

impl BudgetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetType::Daily => "daily",
            BudgetType::Lifetime => "lifetime",
        }
    }
}

impl fmt::Display for BudgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BidStrategy {
    #[default]
    LowestCost,
    CostCap,
    BidCap,
}

impl BidStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            BidStrategy::LowestCost => "lowest_cost",
            BidStrategy::CostCap => "cost_cap",
            BidStrategy::BidCap => "bid_cap",
        }
    }

    /// Label used by the ads manager bulk sheet.
    pub fn label(&self) -> &'static str {
        match self {
            BidStrategy::LowestCost => "Highest volume or value",
            BidStrategy::CostCap => "Cost per result goal",
            BidStrategy::BidCap => "Bid cap",
        }
    }

    pub fn requires_bid_amount(&self) -> bool {
        !matches!(self, BidStrategy::LowestCost)
    }
}

impl fmt::Display for BidStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Campaign-level parameters chosen in the wizard.
///
/// `start_date` and `end_date` are display strings; they are substituted into
/// ad copy verbatim and only parsed for validation and duration math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignConfig {
    pub name: String,
    #[serde(default)]
    pub objective: String,
    #[serde(default = "default_platform")]
    pub platform: String,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub budget_type: BudgetType,
    #[serde(default)]
    pub bid_strategy: BidStrategy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid_amount: Option<f64>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,
}

fn default_platform() -> String {
    "Meta".to_string()
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            objective: String::new(),
            platform: default_platform(),
            budget: 0.0,
            budget_type: BudgetType::default(),
            bid_strategy: BidStrategy::default(),
            bid_amount: None,
            start_date: String::new(),
            end_date: String::new(),
            duration_days: None,
        }
    }
}

impl CampaignConfig {
    /// Fill `end_date` from `start_date` + `duration_days`.
    ///
    /// The duration is inclusive of the start day. Returns `true` when the end
    /// date was written.
    pub fn derive_end_date(&mut self) -> bool {
        let Some(days) = self.duration_days.filter(|d| *d > 0) else {
            return false;
        };
        let Some((start, fmt)) = parse_display_date(&self.start_date) else {
            return false;
        };
        match start.checked_add_days(Days::new(u64::from(days - 1))) {
            Some(end) => {
                self.end_date = end.format(fmt).to_string();
                true
            }
            None => false,
        }
    }

    /// Copy with `end_date` filled from the duration when it was left empty.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut c = self.clone();
        if c.end_date.trim().is_empty() {
            c.derive_end_date();
        }
        c
    }

    /// Inclusive number of days between start and end, when both parse.
    pub fn length_days(&self) -> Option<i64> {
        let (start, _) = parse_display_date(&self.start_date)?;
        let (end, _) = parse_display_date(&self.end_date)?;
        Some((end - start).num_days() + 1)
    }
}

/// Parse `MM/DD/YYYY` or `YYYY-MM-DD`, returning the format that matched.
pub fn parse_display_date(s: &str) -> Option<(NaiveDate, &'static str)> {
    let s = s.trim();
    [US_DATE, ISO_DATE]
        .into_iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok().map(|d| (d, fmt)))
}

/// Render a budget as the shortest decimal text that round-trips.
pub fn format_budget(budget: f64) -> String {
    format!("{budget}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign(start: &str, days: Option<u32>) -> CampaignConfig {
        CampaignConfig {
            name: "EWC".into(),
            start_date: start.into(),
            duration_days: days,
            ..Default::default()
        }
    }

    #[test]
    fn test_derive_end_date_us_format() {
        let mut c = campaign("06/01/2025", Some(30));
        assert!(c.derive_end_date());
        assert_eq!(c.end_date, "06/30/2025");
        assert_eq!(c.length_days(), Some(30));
    }

    #[test]
    fn test_derive_end_date_iso_format() {
        let mut c = campaign("2025-12-20", Some(14));
        assert!(c.derive_end_date());
        assert_eq!(c.end_date, "2026-01-02");
    }

    #[test]
    fn test_derive_end_date_needs_duration_and_start() {
        assert!(!campaign("06/01/2025", None).derive_end_date());
        assert!(!campaign("06/01/2025", Some(0)).derive_end_date());
        assert!(!campaign("next week", Some(3)).derive_end_date());
    }

    #[test]
    fn test_normalized_keeps_explicit_end_date() {
        let mut c = campaign("06/01/2025", Some(10));
        c.end_date = "07/04/2025".into();
        assert_eq!(c.normalized().end_date, "07/04/2025");

        let c = campaign("06/01/2025", Some(10));
        assert_eq!(c.normalized().end_date, "06/10/2025");
    }

    #[test]
    fn test_format_budget() {
        assert_eq!(format_budget(50.0), "50");
        assert_eq!(format_budget(92.69), "92.69");
        assert_eq!(format_budget(0.5), "0.5");
    }

    #[test]
    fn test_bid_strategy_serde() {
        let s: BidStrategy = serde_yaml::from_str("cost_cap").unwrap();
        assert_eq!(s, BidStrategy::CostCap);
        assert!(s.requires_bid_amount());
        assert!(!BidStrategy::LowestCost.requires_bid_amount());
    }
}
