use multiad_core::config::loader::{default_config_path, ConfigLoader};
use multiad_core::locations::LocationBook;
use multiad_core::templates::discovery::discover_templates;
use std::path::Path;
use tracing::debug;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            println!("OK   multiad doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("workspace_root: {}", rc.workspace_root.display());
            println!("locations_file: {}", rc.locations_file.display());
            println!("templates_dir: {}", rc.templates_dir.display());
            println!("campaigns_dir: {}", rc.campaigns_dir.display());
            println!("output_dir: {}", rc.output_dir.display());
            println!("templates.unresolved_custom: {}", rc.templates.unresolved_custom.as_str());
            println!("export.format: {}", rc.export.format);
            println!("logging.level: {}", rc.logging.level);

            // Data problems are reported but do not fail the check.
            match LocationBook::load(&rc.locations_file) {
                Ok(book) => println!(
                    "locations: {} ({} groups)",
                    book.locations.len(),
                    book.groups.len()
                ),
                Err(e) => println!("locations: unavailable ({e})"),
            }
            match discover_templates(&rc.templates_dir) {
                Ok(list) => println!("templates: {}", list.len()),
                Err(e) => println!("templates: unavailable ({e})"),
            }
            debug!("doctor finished");
        }
        Err(e) => {
            println!("FAIL multiad doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
