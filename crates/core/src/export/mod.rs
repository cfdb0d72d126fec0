//! Writing processed ads to files the ads manager can import.

mod csv_file;
mod json_file;

use std::collections::HashSet;
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::models::{CampaignConfig, ProcessedAd};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Flush(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Format implied by a file extension, if any.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension().and_then(|e| e.to_str()).and_then(|e| e.parse().ok())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("unknown export format '{other}' (expected csv or json)")),
        }
    }
}

/// Serialize `ads` in the given format.
pub fn write_ads<W: Write>(
    writer: W,
    ads: &[ProcessedAd],
    campaign: &CampaignConfig,
    format: ExportFormat,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv => csv_file::write(writer, ads, campaign),
        ExportFormat::Json => json_file::write(writer, ads, campaign),
    }
}

/// Write `ads` to `path`, creating parent directories.
pub fn export_to_path(
    path: &Path,
    ads: &[ProcessedAd],
    campaign: &CampaignConfig,
    format: ExportFormat,
) -> Result<(), ExportError> {
    let io_err = |e| ExportError::Io { path: path.to_path_buf(), source: e };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    write_ads(&mut out, ads, campaign, format)?;
    out.flush()?;
    info!(path = %path.display(), ads = ads.len(), %format, "exported ads");
    Ok(())
}

/// `<slug of campaign name>-ads.<ext>`, or `campaign-ads.<ext>` when the name
/// has no usable characters.
pub fn default_file_name(campaign: &CampaignConfig, format: ExportFormat) -> String {
    let slug = slugify(&campaign.name);
    let stem = if slug.is_empty() { "campaign".to_string() } else { slug };
    format!("{stem}-ads.{}", format.extension())
}

/// Campaign budget split evenly across the distinct locations in `ads`.
pub(crate) fn budget_per_location(ads: &[ProcessedAd], campaign: &CampaignConfig) -> f64 {
    let locations: HashSet<&str> = ads.iter().map(|a| a.location_id.as_str()).collect();
    if locations.is_empty() {
        return campaign.budget;
    }
    campaign.budget / locations.len() as f64
}

/// Convert a string to a file-name-friendly slug.
///
/// - Converts to lowercase
/// - Replaces spaces and underscores with hyphens
/// - Removes non-alphanumeric characters (except hyphens)
/// - Collapses multiple hyphens into one
fn slugify(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
        } else if (c == ' ' || c == '_' || c == '-') && !result.ends_with('-') {
            result.push('-');
        }
    }

    result.trim_matches('-').to_string()
}
