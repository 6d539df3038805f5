use crate::error::{PinError, Result};
use std::fmt;

const BOM_SUFFIX: &str = "-bom";

/// A `group:artifact` pair, independent of version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
}

impl Coordinate {
    pub fn new(group: impl Into<String>, artifact: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
        }
    }

    /// Parses `group:artifact`. Exactly one separator and two non-empty parts.
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split(':').collect();
        if parts.len() != 2 {
            return Err(PinError::Config(format!(
                "Invalid coordinate '{}'. Expected format groupId:artifactId",
                input
            )));
        }

        let (group, artifact) = (parts[0], parts[1]);

        if group.is_empty() || artifact.is_empty() {
            return Err(PinError::Config(format!(
                "Invalid coordinate '{}'. Neither groupId nor artifactId may be empty",
                input
            )));
        }

        if [group, artifact].iter().any(|part| part.trim() != *part) {
            return Err(PinError::Config(format!(
                "Invalid coordinate '{}'. groupId and artifactId may not have surrounding whitespace",
                input
            )));
        }

        Ok(Self::new(group, artifact))
    }

    /// BOM artifacts must be imported into dependencyManagement, not depended on.
    pub fn is_bom(&self) -> bool {
        self.artifact.ends_with(BOM_SUFFIX)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.artifact)
    }
}
