use std::path::{Path, PathBuf};

use console::style;
use miette::Result;

use appinit_core::report::Reporter;
use appinit_core::{generate, GenerateOptions};

/// Reporter that prints one styled line per materialized path, mirroring
/// the per-entry log the generator has always produced.
struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn created(&self, path: &Path) {
        println!(
            "  {} created '{}'",
            style("+").green(),
            style(path.display()).cyan()
        );
    }

    fn skipped(&self, path: &Path) {
        println!(
            "  {} create skipped '{}' exists",
            style("=").dim(),
            style(path.display()).dim()
        );
    }
}

pub fn run(name: String, output: Option<String>) -> Result<()> {
    let options = GenerateOptions {
        name: name.clone(),
        output: output.map(PathBuf::from),
    };

    let result = generate(options, &ConsoleReporter)?;

    println!(
        "\n{} app '{}' initialized at {}",
        style("✓").green().bold(),
        style(&name).cyan(),
        style(result.app_dir.display()).cyan()
    );
    println!(
        "  {} entries created, {} already existed",
        result.created.len(),
        result.skipped.len()
    );

    Ok(())
}
