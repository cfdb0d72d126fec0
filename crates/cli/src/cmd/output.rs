//! Shared output formatting for listing and review commands.

use multiad_core::ads::CampaignReview;
use multiad_core::locations::Page;
use multiad_core::models::campaign::format_budget;
use multiad_core::models::Location;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct LocationRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "City")]
    city: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Zip")]
    zip: String,
    #[tabled(rename = "Phone")]
    phone: String,
}

fn location_to_row(loc: &&Location) -> LocationRow {
    LocationRow {
        id: loc.id.clone(),
        name: loc.name.clone(),
        city: loc.city.clone(),
        state: loc.state.clone(),
        zip: loc.zip_code.clone(),
        phone: loc.phone_number.clone(),
    }
}

/// Print a page of locations as a table.
pub fn print_locations_table(page: &Page<'_, &Location>) {
    if page.total == 0 {
        println!("(no locations found)");
        return;
    }
    if page.items.is_empty() {
        println!("(page {} is empty)", page.page);
    } else {
        let rows: Vec<LocationRow> = page.items.iter().map(location_to_row).collect();
        let table = Table::new(&rows).with(Style::rounded()).to_string();
        println!("{}", table);
    }
    println!("-- page {}/{}, {} locations --", page.page, page.total_pages, page.total);
}

/// Print a page of locations as JSON.
pub fn print_locations_json(page: &Page<'_, &Location>) {
    println!("{}", serde_json::to_string_pretty(page.items).unwrap_or_default());
}

/// Print a campaign review as plain text.
pub fn print_review(review: &CampaignReview) {
    let c = &review.campaign;
    println!("Campaign:   {}", c.name);
    println!("Objective:  {}", c.objective);
    println!("Platform:   {}", c.platform);
    println!("Budget:     ${} {}", format_budget(c.budget), c.budget_type);
    if let Some(per) = review.budget_per_location {
        println!("Per store:  ${per:.2}");
    }
    println!("Bidding:    {}", c.bid_strategy.label());
    match review.length_days {
        Some(days) => println!("Schedule:   {} - {} ({days} days)", c.start_date, c.end_date),
        None => println!("Schedule:   {} - {}", c.start_date, c.end_date),
    }
    println!(
        "Ads:        {} locations x {} ads = {} ads",
        review.location_count, review.ad_count, review.total_ads
    );

    if review.issues.is_empty() {
        println!();
        println!("No issues found.");
        return;
    }
    println!();
    for issue in &review.issues {
        println!("{:<7}  {}", issue.severity.as_str(), issue.message);
    }
    let errors = review.errors().count();
    let warnings = review.warnings().count();
    println!();
    println!("-- {errors} errors, {warnings} warnings --");
}
