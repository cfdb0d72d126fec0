use serde::Serialize;

use crate::models::campaign::parse_display_date;
use crate::models::{AdCreative, CampaignConfig, KNOWN_OBJECTIVES, Location};
use crate::plan::CampaignPlan;
use crate::templates::{Resolver, VariableContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub severity: Severity,
    pub message: String,
}

impl Issue {
    fn error(message: impl Into<String>) -> Self {
        Self { severity: Severity::Error, message: message.into() }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self { severity: Severity::Warning, message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Check the campaign parameters the ads manager requires.
pub fn validate_campaign(c: &CampaignConfig) -> Vec<Issue> {
    let mut issues = Vec::new();

    if c.name.trim().is_empty() {
        issues.push(Issue::error("campaign name is required"));
    }

    let objective = c.objective.trim();
    if objective.is_empty() {
        issues.push(Issue::error("campaign objective is required"));
    } else if !KNOWN_OBJECTIVES.contains(&objective) {
        issues.push(Issue::warning(format!(
            "objective '{objective}' is not one of: {}",
            KNOWN_OBJECTIVES.join(", ")
        )));
    }

    if !c.budget.is_finite() || c.budget <= 0.0 {
        issues.push(Issue::error("budget must be greater than zero"));
    }

    if c.bid_strategy.requires_bid_amount() && c.bid_amount.is_none_or(|a| a <= 0.0) {
        issues.push(Issue::error(format!(
            "bid strategy '{}' requires a positive bid amount",
            c.bid_strategy
        )));
    }

    if c.duration_days == Some(0) {
        issues.push(Issue::error("duration must be at least one day"));
    }

    let start = date_field(&mut issues, "start date", &c.start_date, true);
    let end_required = c.duration_days.is_none();
    let end = date_field(&mut issues, "end date", &c.end_date, end_required);

    if let (Some(start), Some(end)) = (start, end)
        && end < start
    {
        issues.push(Issue::error(format!(
            "end date {} is before start date {}",
            c.end_date, c.start_date
        )));
    }

    issues
}

fn date_field(
    issues: &mut Vec<Issue>,
    label: &str,
    value: &str,
    required: bool,
) -> Option<chrono::NaiveDate> {
    if value.trim().is_empty() {
        if required {
            issues.push(Issue::error(format!("{label} is required")));
        }
        return None;
    }
    match parse_display_date(value) {
        Some((d, _)) => Some(d),
        None => {
            issues.push(Issue::error(format!(
                "{label} '{value}' is not MM/DD/YYYY or YYYY-MM-DD"
            )));
            None
        }
    }
}

/// Aggregate view of a plan before export.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignReview {
    pub campaign: CampaignConfig,
    pub location_count: usize,
    pub ad_count: usize,
    pub total_ads: usize,
    /// Budget split evenly across locations, rounded to cents.
    pub budget_per_location: Option<f64>,
    pub length_days: Option<i64>,
    pub issues: Vec<Issue>,
}

impl CampaignReview {
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(Issue::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| !i.is_error())
    }
}

/// Review the selected locations and ads of a plan.
pub fn review(
    plan: &CampaignPlan,
    locations: &[&Location],
    ads: &[AdCreative],
    resolver: &Resolver,
) -> CampaignReview {
    let campaign = plan.campaign.normalized();
    let mut issues = validate_campaign(&campaign);

    if locations.is_empty() {
        issues.push(Issue::error("no locations selected"));
    }
    if ads.is_empty() {
        issues.push(Issue::error("no ads selected"));
    }

    for id in plan.overrides.keys() {
        if !locations.iter().any(|l| &l.id == id) {
            issues.push(Issue::warning(format!(
                "overrides for '{id}' are ignored: location is not selected"
            )));
        }
    }

    for loc in locations {
        let missing = loc.missing_display_fields();
        if !missing.is_empty() {
            issues.push(Issue::warning(format!(
                "location '{}' has no {}; ads will show blanks",
                loc.id,
                missing.join(", ")
            )));
        }

        let mut ctx = VariableContext::new().with_location(loc).with_campaign(&campaign);
        if let Some(custom) = plan.overrides.get(&loc.id) {
            ctx = ctx.with_custom(custom);
        }
        for ad in ads {
            for (field, text) in ad_text_fields(ad) {
                let left = resolver.unresolved(text, &ctx);
                if !left.is_empty() {
                    issues.push(Issue::warning(format!(
                        "ad '{}' for location '{}': {field} leaves {} unresolved",
                        ad.id,
                        loc.id,
                        left.iter().map(|p| format!("{{{{{p}}}}}")).collect::<Vec<_>>().join(", ")
                    )));
                }
            }
        }
    }

    let budget_per_location = (!locations.is_empty() && campaign.budget.is_finite())
        .then(|| (campaign.budget / locations.len() as f64 * 100.0).round() / 100.0);

    CampaignReview {
        length_days: campaign.length_days(),
        location_count: locations.len(),
        ad_count: ads.len(),
        total_ads: locations.len() * ads.len(),
        budget_per_location,
        campaign,
        issues,
    }
}

fn ad_text_fields(ad: &AdCreative) -> [(&'static str, &str); 4] {
    [
        ("title", ad.title.as_str()),
        ("body", ad.body.as_str()),
        ("call to action", ad.call_to_action.as_str()),
        ("landing page URL", ad.landing_page_url.as_str()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BidStrategy;

    fn valid() -> CampaignConfig {
        CampaignConfig {
            name: "EWC".into(),
            objective: "Engagement".into(),
            budget: 50.0,
            start_date: "06/01/2025".into(),
            end_date: "06/30/2025".into(),
            ..Default::default()
        }
    }

    fn messages(issues: &[Issue]) -> Vec<&str> {
        issues.iter().map(|i| i.message.as_str()).collect()
    }

    #[test]
    fn test_valid_campaign_has_no_issues() {
        assert!(validate_campaign(&valid()).is_empty());
    }

    #[test]
    fn test_missing_required_fields() {
        let c = CampaignConfig::default();
        let issues = validate_campaign(&c);
        assert!(issues.iter().all(Issue::is_error));
        assert_eq!(
            messages(&issues),
            vec![
                "campaign name is required",
                "campaign objective is required",
                "budget must be greater than zero",
                "start date is required",
                "end date is required",
            ]
        );
    }

    #[test]
    fn test_end_before_start() {
        let c = CampaignConfig { end_date: "2025-05-01".into(), ..valid() };
        let issues = validate_campaign(&c);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("before start date"));
    }

    #[test]
    fn test_duration_replaces_end_date() {
        let c = CampaignConfig { end_date: String::new(), duration_days: Some(7), ..valid() };
        assert!(validate_campaign(&c).is_empty());
    }

    #[test]
    fn test_unknown_objective_is_warning() {
        let c = CampaignConfig { objective: "Vibes".into(), ..valid() };
        let issues = validate_campaign(&c);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_cost_cap_needs_bid_amount() {
        let c = CampaignConfig { bid_strategy: BidStrategy::CostCap, ..valid() };
        assert!(validate_campaign(&c)[0].message.contains("cost_cap"));

        let c = CampaignConfig { bid_amount: Some(3.5), ..c };
        assert!(validate_campaign(&c).is_empty());
    }
}
