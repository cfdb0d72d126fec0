use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{AdCreative, CampaignConfig, Location, ProcessedAd};
use crate::templates::{CustomVars, Resolver, VariableContext};

/// Location id -> custom placeholder values.
pub type Overrides = BTreeMap<String, CustomVars>;

/// Resolve every ad against every location.
///
/// Output is location-major: all ads for the first location, then all ads for
/// the second, and so on. Missing location fields render as blanks; nothing in
/// here can fail.
pub fn process_ads<'a>(
    locations: impl IntoIterator<Item = &'a Location>,
    ads: &[AdCreative],
    campaign: &CampaignConfig,
    overrides: &Overrides,
    resolver: &Resolver,
) -> Vec<ProcessedAd> {
    let mut out = Vec::new();
    for location in locations {
        let mut ctx = VariableContext::new().with_location(location).with_campaign(campaign);
        if let Some(custom) = overrides.get(&location.id) {
            ctx = ctx.with_custom(custom);
        }
        for ad in ads {
            out.push(process_one(location, ad, campaign, &ctx, resolver));
        }
    }
    debug!(campaign = %campaign.name, processed = out.len(), "processed ads");
    out
}

fn process_one(
    location: &Location,
    ad: &AdCreative,
    campaign: &CampaignConfig,
    ctx: &VariableContext<'_>,
    resolver: &Resolver,
) -> ProcessedAd {
    ProcessedAd {
        location_id: location.id.clone(),
        location_name: location.name.clone(),
        ad_set_name: format!("{} - {}", campaign.name, location.name),
        ad_name: format!("{} - {}", location.name, ad.name),
        original: ad.clone(),
        title: resolver.resolve(&ad.title, ctx),
        body: resolver.resolve(&ad.body, ctx),
        call_to_action: resolver.resolve(&ad.call_to_action, ctx),
        landing_page_url: resolver.resolve(&ad.landing_page_url, ctx),
    }
}
