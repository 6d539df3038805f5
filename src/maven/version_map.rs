use crate::error::{PinError, Result};
use crate::maven::Coordinate;
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

/// A coordinate together with the version it is forced to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinnedDependency {
    pub coordinate: Coordinate,
    pub version: String,
}

impl PinnedDependency {
    pub fn is_bom(&self) -> bool {
        self.coordinate.is_bom()
    }
}

/// Forced versions keyed by coordinate, in the order they appear in the JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionMap {
    entries: Vec<PinnedDependency>,
}

impl VersionMap {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PinError::Config(format!(
                "Failed to read version map '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content).map_err(|e| match e {
            PinError::Config(msg) => {
                PinError::Config(format!("Version map '{}': {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Parses a flat `{"group:artifact": "version"}` object.
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: IndexMap<String, String> = serde_json::from_str(content)
            .map_err(|e| PinError::Config(format!("Failed to parse JSON: {}", e)))?;

        let entries = raw
            .into_iter()
            .map(|(key, version)| -> Result<PinnedDependency> {
                Ok(PinnedDependency {
                    coordinate: Coordinate::parse(&key)?,
                    version,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PinnedDependency> {
        self.entries.iter()
    }
}
