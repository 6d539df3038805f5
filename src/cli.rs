use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pompin",
    about = "Pin dependency versions into a pom.xml dependencyManagement marker",
    version,
    author
)]
pub struct Cli {
    /// Label of the repository being patched (diagnostics only)
    #[arg(value_name = "LABEL")]
    pub label: String,

    /// JSON file mapping "groupId:artifactId" to the version to force
    #[arg(value_name = "VERSIONS")]
    pub versions: PathBuf,

    /// POM file to patch (defaults to pom.xml in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub pom: Option<PathBuf>,

    /// Regex selecting the marker line to replace
    #[arg(long, value_name = "REGEX")]
    pub marker: Option<String>,

    /// Nesting depth, in indentation units, of generated <dependency> elements (0-64)
    #[arg(long, value_name = "N")]
    pub depth: Option<usize>,

    /// TOML file providing defaults for pom, marker and depth
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the patched document instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}
