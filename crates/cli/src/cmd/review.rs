use super::output::print_review;
use super::{fail, load_config, load_plan_inputs, resolver};
use crate::ReviewArgs;
use multiad_core::ads::review;
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &ReviewArgs) {
    let rc = load_config("review", config, profile);
    let inputs = load_plan_inputs("review", &rc, &args.plan);
    let selected = inputs
        .book
        .select(&inputs.plan.locations, &inputs.plan.groups)
        .unwrap_or_else(|e| fail("review", e));

    let summary = review(&inputs.plan, &selected, &inputs.ads, &resolver(&rc));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary).unwrap_or_default());
    } else {
        print_review(&summary);
    }

    if summary.has_errors() {
        std::process::exit(1);
    }
}
