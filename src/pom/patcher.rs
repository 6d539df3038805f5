use crate::error::{PinError, Result};
use crate::maven::VersionMap;
use crate::pom::{DocumentStyle, FragmentRenderer, MarkerPattern};
use crate::utils::atomic_write;
use crate::utils::path_validator::PathValidator;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of patching a document in memory.
#[derive(Debug, Clone)]
pub struct PatchOutcome {
    pub patched: String,
    pub style: DocumentStyle,
    /// Byte offset of the replaced marker line in the original text.
    pub marker_offset: usize,
}

/// Document text together with the resolved file it was read from. Writes
/// go back to `path`, so a symlinked POM updates its target, not the link.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub path: PathBuf,
    pub text: String,
}

/// Injects pinned versions into a POM by replacing its marker line.
///
/// The document is only ever treated as text; nothing outside the marker
/// line is touched.
pub struct PomPatcher {
    pom_path: PathBuf,
    marker: MarkerPattern,
    depth: usize,
}

impl PomPatcher {
    pub fn new<P: AsRef<Path>>(pom_path: P, marker: MarkerPattern, depth: usize) -> Self {
        Self {
            pom_path: pom_path.as_ref().to_path_buf(),
            marker,
            depth,
        }
    }

    pub fn pom_path(&self) -> &Path {
        &self.pom_path
    }

    pub fn load_document(&self) -> Result<LoadedDocument> {
        let path = PathValidator::validate_document_path(&self.pom_path)?;

        let text = fs::read_to_string(&path).map_err(|e| {
            PinError::Io(format!(
                "Failed to read document '{}': {}",
                self.pom_path.display(),
                e
            ))
        })?;

        Ok(LoadedDocument { path, text })
    }

    /// Replaces the first marker line with the rendered block. Fails with
    /// [`PinError::NoChange`] if the result equals the input.
    pub fn patch(&self, document: &str, versions: &VersionMap) -> Result<PatchOutcome> {
        let style = DocumentStyle::detect(document)?;
        let block = FragmentRenderer::new(&style, self.depth).render(versions);

        let marker_offset = self.marker.find(document).map(|range| range.start);
        let patched = self.marker.replace_first(document, &block);

        match marker_offset {
            Some(marker_offset) if patched != document => Ok(PatchOutcome {
                patched,
                style,
                marker_offset,
            }),
            _ => Err(PinError::NoChange {
                path: self.pom_path.display().to_string(),
                marker: self.marker.as_str().to_string(),
            }),
        }
    }

    pub fn write_document(&self, document: &LoadedDocument, contents: &str) -> Result<()> {
        atomic_write(&document.path, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MARKER;
    use tempfile::tempdir;

    const POM: &str = "<project>\n    <dependencyManagement>\n        <dependencies>\n    <!-- x-cross-repo-check-dependency-mark -->\n        </dependencies>\n    </dependencyManagement>\n</project>\n";

    fn patcher(path: &Path) -> PomPatcher {
        PomPatcher::new(path, MarkerPattern::new(DEFAULT_MARKER).unwrap(), 5)
    }

    #[test]
    fn bom_and_plain_scenario() {
        let versions = VersionMap::from_json(
            r#"{"com.example:foo-bom": "1.2.3", "com.example:bar": "4.5.6"}"#,
        )
        .unwrap();

        let outcome = patcher(Path::new("pom.xml")).patch(POM, &versions).unwrap();
        let outer = " ".repeat(20);
        let inner = " ".repeat(24);
        let expected_block = [
            format!("{outer}<dependency>"),
            format!("{inner}<groupId>com.example</groupId>"),
            format!("{inner}<artifactId>foo-bom</artifactId>"),
            format!("{inner}<version>1.2.3</version>"),
            format!("{inner}<type>pom</type>"),
            format!("{inner}<scope>import</scope>"),
            format!("{outer}</dependency>"),
            format!("{outer}<dependency>"),
            format!("{inner}<groupId>com.example</groupId>"),
            format!("{inner}<artifactId>bar</artifactId>"),
            format!("{inner}<version>4.5.6</version>"),
            format!("{outer}</dependency>"),
        ]
        .join("\n");
        let expected = POM.replace(
            "    <!-- x-cross-repo-check-dependency-mark -->",
            &expected_block,
        );

        assert_eq!(outcome.patched, expected);
        assert_eq!(outcome.style.indent_unit, "    ");
        assert!(!outcome.patched.contains(DEFAULT_MARKER));
    }

    #[test]
    fn two_space_documents_use_two_space_multiples() {
        let pom = "<project>\n  <dependencyManagement>\n    <dependencies>\n      <!-- x-cross-repo-check-dependency-mark -->\n    </dependencies>\n  </dependencyManagement>\n</project>\n";
        let versions = VersionMap::from_json(r#"{"com.example:bar": "4.5.6"}"#).unwrap();

        let outcome = patcher(Path::new("pom.xml")).patch(pom, &versions).unwrap();
        assert!(
            outcome
                .patched
                .contains(&format!("\n{}<dependency>\n", " ".repeat(10)))
        );
        assert!(
            outcome
                .patched
                .contains(&format!("\n{}<artifactId>bar</artifactId>\n", " ".repeat(12)))
        );
    }

    #[test]
    fn unindented_documents_get_no_indentation() {
        let pom = "<project>\n<!-- x-cross-repo-check-dependency-mark -->\n</project>\n";
        let versions = VersionMap::from_json(r#"{"com.example:bar": "4.5.6"}"#).unwrap();

        let outcome = patcher(Path::new("pom.xml")).patch(pom, &versions).unwrap();
        assert_eq!(
            outcome.patched,
            "<project>\n<dependency>\n<groupId>com.example</groupId>\n<artifactId>bar</artifactId>\n<version>4.5.6</version>\n</dependency>\n</project>\n"
        );
    }

    #[test]
    fn empty_map_removes_marker_content() {
        let outcome = patcher(Path::new("pom.xml"))
            .patch(POM, &VersionMap::default())
            .unwrap();

        assert_ne!(outcome.patched, POM);
        assert!(!outcome.patched.contains(DEFAULT_MARKER));
        assert!(outcome.patched.contains("<dependencies>\n\n        </dependencies>"));
    }

    #[test]
    fn missing_marker_is_no_change() {
        let pom = "<project>\n  <dependencies/>\n</project>\n";
        let versions = VersionMap::from_json(r#"{"com.example:bar": "4.5.6"}"#).unwrap();

        let err = patcher(Path::new("pom.xml")).patch(pom, &versions).unwrap_err();
        assert!(matches!(err, PinError::NoChange { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn second_run_on_output_is_no_change() {
        let versions = VersionMap::from_json(r#"{"com.example:bar": "4.5.6"}"#).unwrap();
        let patcher = patcher(Path::new("pom.xml"));

        let first = patcher.patch(POM, &versions).unwrap();
        let err = patcher.patch(&first.patched, &versions).unwrap_err();
        assert!(matches!(err, PinError::NoChange { .. }));
    }

    #[test]
    fn one_block_per_entry_in_order() {
        let versions = VersionMap::from_json(
            r#"{"org.c:c": "3", "org.a:a-bom": "1", "org.b:b": "2"}"#,
        )
        .unwrap();

        let patched = patcher(Path::new("pom.xml"))
            .patch(POM, &versions)
            .unwrap()
            .patched;

        assert_eq!(patched.matches("<dependency>").count(), 3);
        assert_eq!(patched.matches("<type>pom</type>").count(), 1);
        let positions: Vec<usize> = ["<artifactId>c<", "<artifactId>a-bom<", "<artifactId>b<"]
            .iter()
            .map(|needle| patched.find(needle).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn crlf_documents_stay_crlf() {
        let pom = "<project>\r\n  <!-- x-cross-repo-check-dependency-mark -->\r\n</project>\r\n";
        let versions = VersionMap::from_json(r#"{"com.example:bar": "4.5.6"}"#).unwrap();

        let patched = patcher(Path::new("pom.xml"))
            .patch(pom, &versions)
            .unwrap()
            .patched;

        assert!(!patched.replace("\r\n", "").contains('\n'));
        assert!(!patched.replace("\r\n", "").contains('\r'));
        assert!(patched.ends_with("</dependency>\r\n</project>\r\n"));
    }

    #[test]
    fn load_and_write_round_trip_through_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pom.xml");
        fs::write(&path, POM).unwrap();
        let patcher = patcher(&path);

        let document = patcher.load_document().unwrap();
        let versions = VersionMap::from_json(r#"{"com.example:bar": "4.5.6"}"#).unwrap();
        let outcome = patcher.patch(&document.text, &versions).unwrap();
        patcher.write_document(&document, &outcome.patched).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), outcome.patched);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_document_updates_link_target() {
        let dir = tempdir().unwrap();
        let real = dir.path().join("real-pom.xml");
        let link = dir.path().join("pom.xml");
        fs::write(&real, POM).unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();
        let patcher = patcher(&link);

        let document = patcher.load_document().unwrap();
        let versions = VersionMap::from_json(r#"{"com.example:bar": "4.5.6"}"#).unwrap();
        let outcome = patcher.patch(&document.text, &versions).unwrap();
        patcher.write_document(&document, &outcome.patched).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), outcome.patched);
        assert!(fs::read_to_string(&link).unwrap().contains("<dependency>"));
    }

    #[test]
    fn missing_document_is_io_error() {
        let dir = tempdir().unwrap();
        let err = patcher(&dir.path().join("pom.xml"))
            .load_document()
            .unwrap_err();
        assert!(matches!(err, PinError::Io(_)));
    }
}
