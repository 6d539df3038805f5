use crate::config::{PatchOptions, PatchSettings};
use crate::error::{PinError, Result};
use crate::maven::VersionMap;
use crate::pom::{MarkerPattern, PomPatcher};
use crate::utils::verbose_enabled;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// Pin the versions from `versions_path` into the configured POM.
pub fn execute_pin(
    label: &str,
    versions_path: &Path,
    options: PatchOptions,
    dry_run: bool,
) -> Result<()> {
    println!(
        "{}",
        "Pinning dependency versions for cross-repo check..."
            .cyan()
            .bold()
    );
    println!("   Repository:  {}", label.bright_cyan());
    println!("   Version map: {}", versions_path.display().to_string().dimmed());

    let settings = PatchSettings::resolve(options)?;
    let marker = MarkerPattern::new(&settings.marker)?;
    if verbose_enabled() {
        eprintln!(
            "[VERBOSE] pom={} marker={} depth={}",
            settings.pom_path.display(),
            settings.marker,
            settings.depth
        );
    }

    // Step 1: Load the version map before touching the document
    println!("\n{}", "1. Loading version map...".yellow());
    let versions = VersionMap::load(versions_path)?;
    println!(
        "{}",
        format!("✓ Loaded {} coordinate(s)", versions.len()).green()
    );

    // Step 2: Read the target document
    println!(
        "\n{}",
        format!("2. Reading {}...", settings.pom_path.display()).yellow()
    );
    let patcher = PomPatcher::new(&settings.pom_path, marker, settings.depth);
    let document = patcher.load_document()?;
    println!("{}", "✓ Document loaded".green());

    // Step 3: Replace the marker line
    println!(
        "\n{}",
        "3. Injecting dependencyManagement entries...".yellow()
    );
    let outcome = match patcher.patch(&document.text, &versions) {
        Ok(outcome) => outcome,
        Err(e @ PinError::NoChange { .. }) => {
            // Best effort; the NoChange error is what the caller must see.
            let _ = report_unchanged(&mut io::stdout().lock(), &document.text);
            return Err(e);
        }
        Err(e) => return Err(e),
    };
    if verbose_enabled() {
        eprintln!(
            "[VERBOSE] Marker at byte {}, indent unit {:?}, newline {:?}",
            outcome.marker_offset, outcome.style.indent_unit, outcome.style.newline
        );
    }
    println!("{}", "✓ Marker replaced".green());

    // Step 4: Persist (or show) the result
    if dry_run {
        println!(
            "\n{}",
            "4. Dry run, patched document follows:".yellow()
        );
        println!("{}", outcome.patched);
    } else {
        println!(
            "\n{}",
            format!("4. Writing {}...", patcher.pom_path().display()).yellow()
        );
        patcher.write_document(&document, &outcome.patched)?;
        println!("{}", "✓ Document written".green());
    }

    print_pin_report(&versions);

    println!("\n{}", "✨ Versions pinned successfully!".green().bold());
    Ok(())
}

/// Dumps the untouched document so the operator can see why the marker
/// was not replaced.
fn report_unchanged<W: Write>(out: &mut W, document: &str) -> io::Result<()> {
    writeln!(out, "{}", "✗ Document would be unchanged".red())?;
    writeln!(out, "\n{}", "Original document:".dimmed())?;
    writeln!(out, "{}", document)
}

fn print_pin_report(versions: &VersionMap) {
    if versions.is_empty() {
        println!(
            "\n{}",
            "No coordinates given; marker line removed only".yellow()
        );
        return;
    }

    println!("\n{}", "Pinned dependencies:".cyan().bold());
    for dependency in versions.iter() {
        let kind = if dependency.is_bom() {
            "bom import".magenta()
        } else {
            "managed".dimmed()
        };
        println!(
            "  • {} {} ({})",
            dependency.coordinate.to_string().white().bold(),
            dependency.version.green(),
            kind
        );
    }
}
