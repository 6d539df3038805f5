use crate::error::{PinError, Result};
use std::path::{Path, PathBuf};

const FORBIDDEN: &[&str] = &["/etc", "/sys", "/proc", "/dev", "/boot"];

/// Guards the document path before it is read and later replaced.
pub struct PathValidator;

impl PathValidator {
    /// Canonicalises the target document and checks that it is a regular file
    /// outside system directories.
    pub fn validate_document_path(path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();

        let canonical = path.canonicalize().map_err(|e| {
            PinError::Io(format!("Invalid document path '{}': {e}", path.display()))
        })?;

        if !canonical.is_file() {
            return Err(PinError::Io(format!(
                "Document '{}' is not a regular file",
                canonical.display()
            )));
        }

        for forbidden in FORBIDDEN {
            let forbidden_path = Path::new(forbidden);

            if path.starts_with(forbidden_path) || canonical.starts_with(forbidden_path) {
                return Err(PinError::Io(format!(
                    "Refusing to patch a file under system directory '{}'",
                    forbidden
                )));
            }

            if let Ok(canonical_forbidden) = forbidden_path.canonicalize() {
                if canonical.starts_with(&canonical_forbidden) {
                    return Err(PinError::Io(format!(
                        "Refusing to patch a file under system directory '{}'",
                        forbidden
                    )));
                }
            }
        }

        Ok(canonical)
    }
}
