mod cmd;
mod logging;
mod prompt;

use clap::{Args, Parser, Subcommand};
use multiad_core::config::loader::ConfigLoader;
use multiad_core::config::types::LoggingConfig;
use multiad_core::export::ExportFormat;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "multiad",
    version,
    about = "Build multi-location ad campaigns from a location book and ad templates"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// List and filter locations from the location book
    Locations(LocationsArgs),

    /// List ad templates discovered under templates_dir
    ListTemplates,

    /// Resolve a template against one location
    Preview(PreviewArgs),

    /// Create a campaign plan (prompts for anything not given as a flag)
    New(NewArgs),

    /// Summarize a campaign plan and report problems
    Review(ReviewArgs),

    /// Generate the ads file for a campaign plan
    Export(ExportArgs),
}

#[derive(Debug, Args)]
pub struct LocationsArgs {
    /// Case-insensitive text to match in name, city, state, zip or address
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Only locations in this state
    #[arg(long)]
    pub state: Option<String>,

    /// Only members of this location group
    #[arg(long)]
    pub group: Option<String>,

    /// Page to show (1-based)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Locations per page
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..))]
    pub per_page: u32,

    /// Output the page as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Template text, e.g. "Visit {{location.name}}!"
    #[arg(long, conflicts_with = "ad", required_unless_present = "ad")]
    pub template: Option<String>,

    /// Ad template logical name; previews every text field
    #[arg(long)]
    pub ad: Option<String>,

    /// Location id to resolve against
    #[arg(long)]
    pub location: Option<String>,

    /// Campaign plan supplying campaign values and overrides
    #[arg(long)]
    pub plan: Option<PathBuf>,

    /// Custom value as key=value (repeatable); wins over plan overrides
    #[arg(long = "var", value_name = "KEY=VALUE")]
    pub vars: Vec<String>,
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Plan file to write; bare file names go under campaigns_dir
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    #[arg(long)]
    pub name: Option<String>,

    /// Ads manager objective (Awareness, Traffic, Engagement, Leads, App Promotion, Sales)
    #[arg(long)]
    pub objective: Option<String>,

    #[arg(long)]
    pub platform: Option<String>,

    #[arg(long)]
    pub budget: Option<f64>,

    /// daily or lifetime
    #[arg(long, value_parser = ["daily", "lifetime"])]
    pub budget_type: Option<String>,

    /// lowest_cost, cost_cap or bid_cap
    #[arg(long, value_parser = ["lowest_cost", "cost_cap", "bid_cap"])]
    pub bid_strategy: Option<String>,

    #[arg(long)]
    pub bid_amount: Option<f64>,

    /// Start date (MM/DD/YYYY or YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,

    /// End date (MM/DD/YYYY or YYYY-MM-DD)
    #[arg(long, conflicts_with = "days")]
    pub end: Option<String>,

    /// Campaign length in days, counting the start date
    #[arg(long)]
    pub days: Option<u32>,

    /// Location id to include (repeatable)
    #[arg(long = "location")]
    pub locations: Vec<String>,

    /// Location group to include (repeatable)
    #[arg(long = "group")]
    pub groups: Vec<String>,

    /// Ad template to include (repeatable)
    #[arg(long = "ad")]
    pub ads: Vec<String>,

    /// Custom placeholder value for one location (repeatable)
    #[arg(long = "override", value_name = "ID:KEY=VALUE")]
    pub overrides: Vec<String>,

    /// Never prompt; fail when a required value is missing
    #[arg(long)]
    pub batch: bool,
}

#[derive(Debug, Args)]
pub struct ReviewArgs {
    /// Campaign plan file
    #[arg(long)]
    pub plan: PathBuf,

    /// Output the review as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Campaign plan file
    #[arg(long)]
    pub plan: PathBuf,

    /// csv or json; defaults to the output extension, then config
    #[arg(long)]
    pub format: Option<ExportFormat>,

    /// Output file; defaults to <output_dir>/<campaign>-ads.<ext>
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let log_cfg = ConfigLoader::load(cli.config.as_deref(), cli.profile.as_deref())
        .map(|rc| rc.logging)
        .unwrap_or_else(|_| LoggingConfig::default());
    logging::init(&log_cfg);

    let config = cli.config.as_deref();
    let profile = cli.profile.as_deref();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(config, profile),
        Commands::Locations(args) => cmd::locations::run(config, profile, &args),
        Commands::ListTemplates => cmd::list_templates::run(config, profile),
        Commands::Preview(args) => cmd::preview::run(config, profile, &args),
        Commands::New(args) => cmd::new::run(config, profile, args),
        Commands::Review(args) => cmd::review::run(config, profile, &args),
        Commands::Export(args) => cmd::export::run(config, profile, &args),
    }
}
