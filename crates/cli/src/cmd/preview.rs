use super::{fail, load_config, plan_path, resolver};
use crate::prompt::parse_var_args;
use crate::PreviewArgs;
use multiad_core::locations::LocationBook;
use multiad_core::models::{CampaignConfig, Location};
use multiad_core::plan::CampaignPlan;
use multiad_core::templates::repository::TemplateRepository;
use multiad_core::templates::{CustomVars, VariableContext};
use std::path::Path;
use tracing::warn;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &PreviewArgs) {
    let rc = load_config("preview", config, profile);
    let resolver = resolver(&rc);

    let plan = args
        .plan
        .as_deref()
        .map(|p| CampaignPlan::load(&plan_path(&rc, p)).unwrap_or_else(|e| fail("preview", e)));
    let campaign: Option<CampaignConfig> = plan.as_ref().map(|p| p.campaign.normalized());

    let book;
    let location: Option<&Location> = match args.location.as_deref() {
        Some(id) => {
            book = LocationBook::load(&rc.locations_file).unwrap_or_else(|e| fail("preview", e));
            match book.get(id) {
                Some(loc) => Some(loc),
                None => fail("preview", format!("unknown location '{id}'")),
            }
        }
        None => None,
    };

    // Plan overrides for the location, then --var on top.
    let mut custom = CustomVars::new();
    if let (Some(plan), Some(loc)) = (plan.as_ref(), location) {
        if let Some(o) = plan.overrides.get(&loc.id) {
            custom.extend(o.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
    }
    custom.extend(parse_var_args(&args.vars).unwrap_or_else(|e| fail("preview", e)));

    let mut ctx = VariableContext::new().with_custom(&custom);
    if let Some(loc) = location {
        ctx = ctx.with_location(loc);
    }
    if let Some(c) = campaign.as_ref() {
        ctx = ctx.with_campaign(c);
    }

    let fields: Vec<(&str, String)> = match (&args.template, &args.ad) {
        (Some(text), _) => vec![("", text.clone())],
        (None, Some(name)) => {
            let repo =
                TemplateRepository::new(&rc.templates_dir).unwrap_or_else(|e| fail("preview", e));
            let ad = repo.get_by_name(name).unwrap_or_else(|e| fail("preview", e));
            vec![
                ("title", ad.title),
                ("body", ad.body),
                ("call_to_action", ad.call_to_action),
                ("landing_page_url", ad.landing_page_url),
            ]
        }
        (None, None) => fail("preview", "either --template or --ad is required"),
    };

    for (label, text) in &fields {
        for left in resolver.unresolved(text, &ctx) {
            warn!("{{{{{left}}}}} left unresolved");
        }
        let out = resolver.resolve(text, &ctx);
        if label.is_empty() {
            println!("{out}");
        } else {
            println!("{label}: {out}");
        }
    }
}
