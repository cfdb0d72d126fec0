#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// A temporary workspace with config, location book and ad templates.
pub struct Workspace {
    pub tmp: TempDir,
    pub config: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        Self::with_settings("")
    }

    /// `extra` is appended to config.toml.
    pub fn with_settings(extra: &str) -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        let config = root.join("config.toml");

        write(
            &config,
            &format!(
                r#"
version = 1
profile = "default"

[profiles.default]
workspace_root = "{root}"
locations_file = "{{{{workspace_root}}}}/locations.yaml"
templates_dir  = "{{{{workspace_root}}}}/templates"
campaigns_dir  = "campaigns"
output_dir     = "out"
{extra}
"#,
                root = root.display(),
            ),
        );

        write(
            &root.join("locations.yaml"),
            r#"
locations:
  - id: uptown
    name: Uptown
    city: Denver
    state: CO
    zipCode: "80202"
    phoneNumber: 555-0100
    address: 1 Main St
    landingPageUrl: https://ex.com/uptown
  - id: pearl
    name: Pearl Street
    city: Boulder
    state: CO
    zipCode: "80302"
    phoneNumber: 555-0101
    address: 2 Pearl St
  - id: soco
    name: South Congress
    city: Austin
    state: TX
    zipCode: "78704"
    phoneNumber: 555-0102
    address: 3 Congress Ave
groups:
  - name: colorado
    locationIds: [uptown, pearl]
"#,
        );

        write(
            &root.join("templates").join("visit.yaml"),
            r#"
name: Visit
title: "Visit {{location.name}}"
body: "Visit {{location.name}} in {{location.city}}, {{location.state}}! Budget: ${{campaign.budget}}"
callToAction: Get Directions
landingPageUrl: "https://ex.com/stores/{{location.zipCode}}"
"#,
        );
        write(
            &root.join("templates").join("promos").join("code.yaml"),
            r#"
name: Promo code
title: "Use {{custom.promoCode}} at {{location.name}}"
body: "Offer ends {{campaign.endDate}}."
callToAction: Shop Now
landingPageUrl: "{{location.landingPageUrl}}"
"#,
        );

        Self { tmp, config }
    }

    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    /// Command with `--config` already set and an isolated XDG dir.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("multiad"));
        cmd.env("XDG_CONFIG_HOME", self.root().join("xdg"));
        cmd.env("NO_COLOR", "1");
        cmd.arg("--config").arg(&self.config);
        cmd
    }

    pub fn write_plan(&self, name: &str, yaml: &str) -> PathBuf {
        let path = self.root().join("campaigns").join(name);
        write(&path, yaml);
        path
    }
}

pub const EWC_PLAN: &str = r#"
campaign:
  name: EWC Grand Opening
  objective: Engagement
  platform: Meta
  budget: 50
  startDate: 06/01/2025
  endDate: 06/30/2025
locations: [uptown]
groups: [colorado]
ads: [visit, promos/code]
overrides:
  uptown:
    promoCode: DEN10
  pearl:
    promoCode: BOU10
"#;
