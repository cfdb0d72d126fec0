//! Campaign plans: the saved state of the wizard.
//!
//! A plan names the campaign parameters, which locations and ad templates are
//! selected, and per-location values for `{{custom.<key>}}` placeholders:
//!
//! ```yaml
//! campaign:
//!   name: Summer Promo
//!   objective: Traffic
//!   budget: 50
//!   startDate: 06/01/2025
//!   endDate: 06/30/2025
//! locations: [uptown]
//! groups: [front-range]
//! ads: [promos/summer]
//! overrides:
//!   uptown:
//!     promoCode: SAVE10
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::CampaignConfig;
use crate::templates::CustomVars;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("campaign plan not found at {0}")]
    NotFound(String),

    #[error("failed to read campaign plan {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write campaign plan {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse campaign plan {0}: {1}")]
    Parse(String, #[source] serde_yaml::Error),

    #[error("failed to serialize campaign plan: {0}")]
    Serialize(#[source] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignPlan {
    pub campaign: CampaignConfig,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub ads: Vec<String>,
    /// Location id -> custom values.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<String, CustomVars>,
}

impl CampaignPlan {
    pub fn load(path: &Path) -> Result<Self, PlanError> {
        if !path.exists() {
            return Err(PlanError::NotFound(path.display().to_string()));
        }
        let s = fs::read_to_string(path)
            .map_err(|e| PlanError::Read { path: path.to_path_buf(), source: e })?;
        serde_yaml::from_str(&s).map_err(|e| PlanError::Parse(path.display().to_string(), e))
    }

    pub fn save(&self, path: &Path) -> Result<(), PlanError> {
        let yaml = serde_yaml::to_string(self).map_err(PlanError::Serialize)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| PlanError::Write { path: path.to_path_buf(), source: e })?;
        }
        fs::write(path, yaml).map_err(|e| PlanError::Write { path: path.to_path_buf(), source: e })
    }
}
