use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{Location, LocationGroup};

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("locations file not found at {0}")]
    NotFound(String),

    #[error("failed to read locations file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML in {0}: {1}")]
    Yaml(String, #[source] serde_yaml::Error),

    #[error("failed to parse JSON in {0}: {1}")]
    Json(String, #[source] serde_json::Error),

    #[error("duplicate location id '{0}'")]
    DuplicateId(String),

    #[error("group '{group}' references unknown location '{id}'")]
    DanglingMember { group: String, id: String },

    #[error("unknown location '{0}'")]
    UnknownLocation(String),

    #[error("unknown location group '{0}'")]
    UnknownGroup(String),
}

/// All stores and groups available to campaigns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationBook {
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub groups: Vec<LocationGroup>,
}

impl LocationBook {
    /// Load a book from YAML, or JSON when the file ends in `.json`.
    pub fn load(path: &Path) -> Result<Self, LocationError> {
        if !path.exists() {
            return Err(LocationError::NotFound(path.display().to_string()));
        }
        let s = fs::read_to_string(path)
            .map_err(|e| LocationError::Io { path: path.to_path_buf(), source: e })?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let book: LocationBook = if is_json {
            serde_json::from_str(&s)
                .map_err(|e| LocationError::Json(path.display().to_string(), e))?
        } else {
            serde_yaml::from_str(&s)
                .map_err(|e| LocationError::Yaml(path.display().to_string(), e))?
        };

        book.check()?;
        debug!(
            locations = book.locations.len(),
            groups = book.groups.len(),
            "loaded location book"
        );
        Ok(book)
    }

    /// Ids must be unique and every group member must exist.
    pub fn check(&self) -> Result<(), LocationError> {
        let mut seen = HashSet::new();
        for loc in &self.locations {
            if !seen.insert(loc.id.as_str()) {
                return Err(LocationError::DuplicateId(loc.id.clone()));
            }
        }
        for group in &self.groups {
            if let Some(id) = group.location_ids.iter().find(|id| !seen.contains(id.as_str())) {
                return Err(LocationError::DanglingMember {
                    group: group.name.clone(),
                    id: id.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    pub fn group(&self, name: &str) -> Option<&LocationGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Expand explicit ids and group names into locations, in book order,
    /// each location at most once.
    pub fn select<S: AsRef<str>>(
        &self,
        ids: &[S],
        groups: &[S],
    ) -> Result<Vec<&Location>, LocationError> {
        let mut wanted: HashSet<&str> = HashSet::new();
        for id in ids {
            let id = id.as_ref();
            let loc = self.get(id).ok_or_else(|| LocationError::UnknownLocation(id.to_string()))?;
            wanted.insert(loc.id.as_str());
        }
        for name in groups {
            let name = name.as_ref();
            let group =
                self.group(name).ok_or_else(|| LocationError::UnknownGroup(name.to_string()))?;
            wanted.extend(group.location_ids.iter().map(String::as_str));
        }
        Ok(self.locations.iter().filter(|l| wanted.contains(l.id.as_str())).collect())
    }
}
