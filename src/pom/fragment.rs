use crate::maven::{PinnedDependency, VersionMap};
use crate::pom::DocumentStyle;
use quick_xml::escape::escape;

/// Renders `<dependency>` elements for a dependencyManagement section.
pub struct FragmentRenderer<'a> {
    style: &'a DocumentStyle,
    depth: usize,
}

impl<'a> FragmentRenderer<'a> {
    pub fn new(style: &'a DocumentStyle, depth: usize) -> Self {
        Self { style, depth }
    }

    /// All entries in map order, joined with the document's line terminator.
    /// The block carries no trailing terminator: it takes the place of the
    /// marker line's content and reuses that line's ending.
    pub fn render(&self, versions: &VersionMap) -> String {
        let blocks: Vec<String> = versions
            .iter()
            .map(|dependency| self.render_dependency(dependency))
            .collect();

        blocks.join(self.style.newline)
    }

    pub fn render_dependency(&self, dependency: &PinnedDependency) -> String {
        self.dependency_lines(dependency).join(self.style.newline)
    }

    fn dependency_lines(&self, dependency: &PinnedDependency) -> Vec<String> {
        let outer = self.style.indent(self.depth);
        let inner = self.style.indent(self.depth + 1);
        let coordinate = &dependency.coordinate;

        let mut lines = vec![
            format!("{outer}<dependency>"),
            format!("{inner}<groupId>{}</groupId>", escape(coordinate.group.as_str())),
            format!(
                "{inner}<artifactId>{}</artifactId>",
                escape(coordinate.artifact.as_str())
            ),
            format!("{inner}<version>{}</version>", escape(dependency.version.as_str())),
        ];

        if dependency.is_bom() {
            lines.push(format!("{inner}<type>pom</type>"));
            lines.push(format!("{inner}<scope>import</scope>"));
        }

        lines.push(format!("{outer}</dependency>"));
        lines
    }
}
