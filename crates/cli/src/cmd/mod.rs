pub mod doctor;
pub mod export;
pub mod list_templates;
pub mod locations;
pub mod new;
pub mod output;
pub mod preview;
pub mod review;

use multiad_core::config::loader::{default_config_path, ConfigLoader};
use multiad_core::config::types::ResolvedConfig;
use multiad_core::locations::LocationBook;
use multiad_core::models::AdCreative;
use multiad_core::plan::CampaignPlan;
use multiad_core::templates::repository::TemplateRepository;
use multiad_core::templates::Resolver;
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Print a failure banner and exit with status 1.
pub fn fail(cmd: &str, err: impl Display) -> ! {
    println!("FAIL multiad {cmd}");
    println!("{err}");
    std::process::exit(1);
}

pub fn load_config(cmd: &str, config: Option<&Path>, profile: Option<&str>) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL multiad {cmd}");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}

pub fn resolver(cfg: &ResolvedConfig) -> Resolver {
    Resolver::new(cfg.templates.unresolved_custom)
}

/// Plan paths that do not exist as given are looked up under campaigns_dir.
pub fn plan_path(cfg: &ResolvedConfig, given: &Path) -> PathBuf {
    if given.exists() || given.is_absolute() {
        given.to_path_buf()
    } else {
        cfg.campaigns_dir.join(given)
    }
}

/// Everything a plan refers to, loaded from disk.
pub struct PlanInputs {
    pub plan: CampaignPlan,
    pub book: LocationBook,
    pub ads: Vec<AdCreative>,
}

pub fn load_plan_inputs(cmd: &str, cfg: &ResolvedConfig, given: &Path) -> PlanInputs {
    let path = plan_path(cfg, given);
    let plan = CampaignPlan::load(&path).unwrap_or_else(|e| fail(cmd, e));
    let book = LocationBook::load(&cfg.locations_file).unwrap_or_else(|e| fail(cmd, e));
    let repo = TemplateRepository::new(&cfg.templates_dir).unwrap_or_else(|e| fail(cmd, e));
    let ads = repo.load_many(&plan.ads).unwrap_or_else(|e| fail(cmd, e));
    PlanInputs { plan, book, ads }
}
