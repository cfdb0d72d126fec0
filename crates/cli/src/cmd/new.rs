use super::{fail, load_config};
use crate::prompt::{self, PromptOptions};
use crate::NewArgs;
use chrono::Local;
use multiad_core::ads::validate_campaign;
use multiad_core::config::types::ResolvedConfig;
use multiad_core::locations::LocationBook;
use multiad_core::models::{BidStrategy, BudgetType, CampaignConfig, KNOWN_OBJECTIVES};
use multiad_core::plan::CampaignPlan;
use multiad_core::templates::repository::TemplateRepository;
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: NewArgs) {
    debug!("Running new campaign wizard");
    let cfg = load_config("new", config, profile);
    let options = PromptOptions { batch_mode: args.batch };

    let book = LocationBook::load(&cfg.locations_file).unwrap_or_else(|e| fail("new", e));
    let repo = TemplateRepository::new(&cfg.templates_dir).unwrap_or_else(|e| fail("new", e));

    let campaign = collect_campaign(&args, &options).unwrap_or_else(|e| fail("new", e));

    let issues = validate_campaign(&campaign);
    if issues.iter().any(|i| i.is_error()) {
        let msg: Vec<String> = issues
            .iter()
            .filter(|i| i.is_error())
            .map(|i| format!("  - {}", i.message))
            .collect();
        fail("new", format!("campaign is incomplete:\n{}", msg.join("\n")));
    }

    let (mut locations, groups) = (args.locations, args.groups);
    if locations.is_empty() && groups.is_empty() {
        let labels: Vec<String> = book
            .locations
            .iter()
            .map(|l| format!("{} ({}, {})", l.name, l.city, l.state))
            .collect();
        let picked = prompt::choose_many("Locations", &labels, &options)
            .unwrap_or_else(|e| fail("new", e));
        locations = picked.into_iter().map(|i| book.locations[i].id.clone()).collect();
    }
    let selected = book.select(&locations, &groups).unwrap_or_else(|e| fail("new", e));
    if selected.is_empty() {
        fail("new", "no locations selected\n  Hint: pass --location <id> or --group <name>");
    }

    let mut ads = args.ads;
    if ads.is_empty() {
        let names: Vec<String> =
            repo.list_all().iter().map(|t| t.logical_name.clone()).collect();
        let picked =
            prompt::choose_many("Ads", &names, &options).unwrap_or_else(|e| fail("new", e));
        ads = picked.into_iter().map(|i| names[i].clone()).collect();
    }
    if ads.is_empty() {
        fail("new", "no ads selected\n  Hint: pass --ad <template>");
    }
    repo.load_many(&ads).unwrap_or_else(|e| fail("new", e));

    let overrides =
        prompt::parse_override_args(&args.overrides).unwrap_or_else(|e| fail("new", e));
    if let Some(id) = overrides.keys().find(|id| book.get(id).is_none()) {
        fail("new", format!("unknown location '{id}' in --override"));
    }

    let plan = CampaignPlan {
        campaign,
        locations,
        groups,
        ads,
        overrides,
    };

    let path = output_path(&cfg, &args.output);
    plan.save(&path).unwrap_or_else(|e| fail("new", e));

    println!("OK   multiad new");
    println!("plan: {}", path.display());
    println!(
        "{} locations x {} ads, {} - {}",
        selected.len(),
        plan.ads.len(),
        plan.campaign.start_date,
        plan.campaign.end_date
    );
}

fn collect_campaign(
    args: &NewArgs,
    options: &PromptOptions,
) -> Result<CampaignConfig, prompt::PromptError> {
    let name = prompt::text(args.name.clone(), "Campaign name", "--name", None, options)?;

    let objective = match &args.objective {
        Some(o) => o.clone(),
        None => {
            let i = prompt::choose_one("Objective", "--objective", KNOWN_OBJECTIVES, options)?;
            KNOWN_OBJECTIVES[i].to_string()
        }
    };

    let platform =
        prompt::text(args.platform.clone(), "Platform", "--platform", Some("Meta"), options)?;
    let budget = prompt::number(args.budget, "Budget ($)", "--budget", options)?;

    let budget_type = match args.budget_type.as_deref() {
        Some("lifetime") => BudgetType::Lifetime,
        _ => BudgetType::Daily,
    };
    let bid_strategy = match args.bid_strategy.as_deref() {
        Some("cost_cap") => BidStrategy::CostCap,
        Some("bid_cap") => BidStrategy::BidCap,
        _ => BidStrategy::LowestCost,
    };

    let today = Local::now().date_naive().format("%m/%d/%Y").to_string();
    let start_date =
        prompt::text(args.start.clone(), "Start date", "--start", Some(&today), options)?;

    let (end_date, duration_days) = match (&args.end, args.days) {
        (Some(end), _) => (end.clone(), None),
        (None, Some(days)) => (String::new(), Some(days)),
        (None, None) => {
            let days = prompt::number(None, "Duration (days)", "--days or --end", options)?;
            (String::new(), Some(days.max(0.0).round() as u32))
        }
    };

    let mut campaign = CampaignConfig {
        name,
        objective,
        platform,
        budget,
        budget_type,
        bid_strategy,
        bid_amount: args.bid_amount,
        start_date,
        end_date,
        duration_days,
    };
    campaign.derive_end_date();
    Ok(campaign)
}

/// Bare file names land in campaigns_dir; anything with a directory part is
/// taken as given.
fn output_path(cfg: &ResolvedConfig, given: &Path) -> PathBuf {
    let bare = given.parent().is_none_or(|p| p.as_os_str().is_empty());
    if bare && !given.is_absolute() {
        cfg.campaigns_dir.join(given)
    } else {
        given.to_path_buf()
    }
}
