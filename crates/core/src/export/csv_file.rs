use std::io::Write;

use crate::models::{CampaignConfig, ProcessedAd};
use crate::models::campaign::format_budget;

use super::{ExportError, budget_per_location};

const HEADER: [&str; 15] = [
    "Campaign Name",
    "Campaign Objective",
    "Bid Strategy",
    "Campaign Start Time",
    "Campaign Stop Time",
    "Ad Set Name",
    "Ad Set Budget",
    "Budget Type",
    "Location ID",
    "Ad Name",
    "Title",
    "Body",
    "Call to Action",
    "Link",
    "Image",
];

/// One row per processed ad, ads manager bulk-import columns.
pub(super) fn write<W: Write>(
    writer: W,
    ads: &[ProcessedAd],
    campaign: &CampaignConfig,
) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    let budget = format!("{:.2}", budget_per_location(ads, campaign));
    let bid = match campaign.bid_amount {
        Some(amount) => format!("{} ({})", campaign.bid_strategy.label(), format_budget(amount)),
        None => campaign.bid_strategy.label().to_string(),
    };

    for ad in ads {
        wtr.write_record([
            campaign.name.as_str(),
            campaign.objective.as_str(),
            bid.as_str(),
            campaign.start_date.as_str(),
            campaign.end_date.as_str(),
            ad.ad_set_name.as_str(),
            budget.as_str(),
            campaign.budget_type.as_str(),
            ad.location_id.as_str(),
            ad.ad_name.as_str(),
            ad.title.as_str(),
            ad.body.as_str(),
            ad.call_to_action.as_str(),
            ad.landing_page_url.as_str(),
            ad.original.image_url.as_deref().unwrap_or(""),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
