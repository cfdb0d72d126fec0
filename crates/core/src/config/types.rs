use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::export::ExportFormat;
use crate::templates::resolver::UnresolvedCustom;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub templates: TemplateSettings,
    #[serde(default)]
    pub export: ExportSettings,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub workspace_root: String,
    /// Location book (YAML or JSON) holding stores and location groups.
    pub locations_file: String,
    /// Directory scanned for ad template files.
    pub templates_dir: String,
    /// Where `new` writes campaign plans when given a bare file name.
    pub campaigns_dir: String,
    /// Default destination for exported ad files.
    pub output_dir: String,
}

/// How the resolver treats `{{custom.<key>}}` placeholders whose key is
/// missing from the per-location overrides.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct TemplateSettings {
    #[serde(default)]
    pub unresolved_custom: UnresolvedCustom,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ExportSettings {
    #[serde(default)]
    pub format: ExportFormat,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub workspace_root: PathBuf,
    pub locations_file: PathBuf,
    pub templates_dir: PathBuf,
    pub campaigns_dir: PathBuf,
    pub output_dir: PathBuf,
    pub logging: LoggingConfig,
    pub templates: TemplateSettings,
    pub export: ExportSettings,
}
