use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::models::AdCreative;
use crate::templates::discovery::{TemplateDiscoveryError, TemplateInfo, discover_templates};

#[derive(Debug, Error)]
pub enum TemplateRepoError {
    #[error(transparent)]
    Discovery(#[from] TemplateDiscoveryError),

    #[error("template not found: {0}")]
    NotFound(String),

    #[error("failed to read template file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse template {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// On-disk shape of an ad template. `name` defaults to the logical name.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TemplateFile {
    name: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    body: String,
    #[serde(default)]
    call_to_action: String,
    #[serde(default)]
    landing_page_url: String,
    image_url: Option<String>,
}

pub struct TemplateRepository {
    pub root: PathBuf,
    pub templates: Vec<TemplateInfo>,
}

impl TemplateRepository {
    pub fn new(root: &Path) -> Result<Self, TemplateDiscoveryError> {
        let templates = discover_templates(root)?;
        debug!(count = templates.len(), root = %root.display(), "discovered ad templates");
        Ok(Self { root: root.to_path_buf(), templates })
    }

    pub fn list_all(&self) -> &[TemplateInfo] {
        &self.templates
    }

    pub fn get_by_name(&self, name: &str) -> Result<AdCreative, TemplateRepoError> {
        let info = self
            .templates
            .iter()
            .find(|t| t.logical_name == name)
            .ok_or_else(|| TemplateRepoError::NotFound(name.to_string()))?;

        let content = fs::read_to_string(&info.path)
            .map_err(|e| TemplateRepoError::Io { path: info.path.clone(), source: e })?;

        let file: TemplateFile = serde_yaml::from_str(&content)
            .map_err(|e| TemplateRepoError::Parse { path: info.path.clone(), source: e })?;

        Ok(AdCreative {
            id: info.logical_name.clone(),
            name: file.name.unwrap_or_else(|| info.logical_name.clone()),
            title: file.title,
            body: file.body,
            call_to_action: file.call_to_action,
            landing_page_url: file.landing_page_url,
            image_url: file.image_url,
        })
    }

    /// Load several templates, preserving the requested order.
    pub fn load_many<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<Vec<AdCreative>, TemplateRepoError> {
        names.iter().map(|n| self.get_by_name(n.as_ref())).collect()
    }
}
