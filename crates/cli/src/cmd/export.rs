use super::{fail, load_config, load_plan_inputs, resolver};
use crate::ExportArgs;
use multiad_core::ads::{process_ads, review};
use multiad_core::export::{default_file_name, export_to_path, ExportFormat};
use std::path::Path;
use tracing::warn;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &ExportArgs) {
    let rc = load_config("export", config, profile);
    let resolver = resolver(&rc);
    let inputs = load_plan_inputs("export", &rc, &args.plan);
    let selected = inputs
        .book
        .select(&inputs.plan.locations, &inputs.plan.groups)
        .unwrap_or_else(|e| fail("export", e));

    let summary = review(&inputs.plan, &selected, &inputs.ads, &resolver);
    if summary.has_errors() {
        let msg: Vec<String> = summary.errors().map(|i| format!("  - {}", i.message)).collect();
        fail(
            "export",
            format!("plan has errors; run `multiad review` for details\n{}", msg.join("\n")),
        );
    }
    for issue in summary.warnings() {
        warn!("{}", issue.message);
    }

    let format = args
        .format
        .or_else(|| args.output.as_deref().and_then(ExportFormat::from_path))
        .unwrap_or(rc.export.format);
    let path = match &args.output {
        Some(p) => p.clone(),
        None => rc.output_dir.join(default_file_name(&summary.campaign, format)),
    };
    if let Some(ext) = path.extension() {
        if ExportFormat::from_path(&path) != Some(format) {
            warn!(
                "writing {format} to {}: extension '{}' does not match the format",
                path.display(),
                ext.to_string_lossy()
            );
        }
    }

    let ads = process_ads(
        selected.iter().copied(),
        &inputs.ads,
        &summary.campaign,
        &inputs.plan.overrides,
        &resolver,
    );
    export_to_path(&path, &ads, &summary.campaign, format)
        .unwrap_or_else(|e| fail("export", e));

    println!("OK   multiad export");
    println!("file: {}", path.display());
    println!("ads: {} ({format})", ads.len());
}
