pub mod assets;
pub mod context;
pub mod error;
pub mod materialize;
pub mod plan;
pub mod render;
pub mod report;

use std::path::{Path, PathBuf};

use crate::assets::{AssetSource, EmbeddedAssets};
use crate::context::{app_variables, Variables};
use crate::error::{AppinitError, Result};
use crate::materialize::{Materializer, Outcome};
use crate::plan::{Source, ENTRIES};
use crate::report::Reporter;

/// Options for the `generate` operation.
pub struct GenerateOptions {
    /// The app name as supplied on the command line.
    pub name: String,
    /// Parent directory for the app. If None, uses the current directory.
    pub output: Option<PathBuf>,
}

/// Summary of one generation run.
#[derive(Debug)]
pub struct GeneratedApp {
    pub app_dir: PathBuf,
    pub created: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Main entry point: materialize the app skeleton.
///
/// Entries are processed strictly in plan order, directories before their
/// contents. The first fatal error halts the run; entries materialized
/// before the failure stay on disk, and re-running against them is safe.
pub fn generate(options: GenerateOptions, reporter: &dyn Reporter) -> Result<GeneratedApp> {
    let parent = match &options.output {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().map_err(|e| AppinitError::Io {
            context: "getting current directory".into(),
            source: e,
        })?,
    };

    let variables = app_variables(&options.name);
    let app_dir = parent.join(&options.name);

    run_plan(&app_dir, &EmbeddedAssets, &variables, reporter)
}

/// Materialize the scaffold plan against an explicit asset source and
/// variable mapping. `generate` wires in the embedded assets; tests use this
/// to substitute failing templates.
pub fn run_plan(
    app_dir: &Path,
    assets: &dyn AssetSource,
    variables: &Variables,
    reporter: &dyn Reporter,
) -> Result<GeneratedApp> {
    let materializer = Materializer::new(reporter);
    let mut created = Vec::new();
    let mut skipped = Vec::new();

    for entry in ENTRIES {
        let path = if entry.rel_path.is_empty() {
            app_dir.to_path_buf()
        } else {
            app_dir.join(entry.rel_path)
        };

        let outcome = match entry.source {
            Source::Directory => materializer.dir(&path)?,
            Source::Template(id) => materializer.file(&path, || {
                let template = assets.resolve(id)?;
                render::render(template, variables)
            })?,
        };

        match outcome {
            Outcome::Created => created.push(path),
            Outcome::Skipped => skipped.push(path),
        }
    }

    Ok(GeneratedApp {
        app_dir: app_dir.to_path_buf(),
        created,
        skipped,
    })
}
