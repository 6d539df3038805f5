use crate::error::{PinError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_POM: &str = "pom.xml";
pub const DEFAULT_MARKER: &str = "x-cross-repo-check-dependency-mark";
/// Nesting depth of generated `<dependency>` elements, in indentation units.
pub const DEFAULT_DEPTH: usize = 5;
pub const MAX_DEPTH: usize = 64;

/// Optional TOML file, e.g.
///
/// ```toml
/// pom = "bom/pom.xml"
/// marker = "x-cross-repo-check-dependency-mark"
/// depth = 5
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub pom: Option<PathBuf>,
    #[serde(default)]
    pub marker: Option<String>,
    #[serde(default)]
    pub depth: Option<usize>,
}

impl ConfigFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PinError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            PinError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

/// Command-line overrides, highest precedence.
#[derive(Debug, Default, Clone)]
pub struct PatchOptions {
    pub pom: Option<PathBuf>,
    pub marker: Option<String>,
    pub depth: Option<usize>,
    pub config: Option<PathBuf>,
}

/// Effective settings after merging flags, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchSettings {
    pub pom_path: PathBuf,
    pub marker: String,
    pub depth: usize,
}

impl Default for PatchSettings {
    fn default() -> Self {
        Self {
            pom_path: PathBuf::from(DEFAULT_POM),
            marker: DEFAULT_MARKER.to_string(),
            depth: DEFAULT_DEPTH,
        }
    }
}

impl PatchSettings {
    pub fn resolve(options: PatchOptions) -> Result<Self> {
        let file = match &options.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };

        Self::merge(options, file)
    }

    fn merge(options: PatchOptions, file: ConfigFile) -> Result<Self> {
        let defaults = Self::default();

        let marker = options
            .marker
            .or(file.marker)
            .unwrap_or(defaults.marker);
        if marker.trim().is_empty() {
            return Err(PinError::Config("Marker pattern may not be empty".into()));
        }

        let depth = options.depth.or(file.depth).unwrap_or(defaults.depth);
        if depth > MAX_DEPTH {
            return Err(PinError::Config(format!(
                "Nesting depth {} is out of range (0..={})",
                depth, MAX_DEPTH
            )));
        }

        Ok(Self {
            pom_path: options.pom.or(file.pom).unwrap_or(defaults.pom_path),
            marker,
            depth,
        })
    }
}
