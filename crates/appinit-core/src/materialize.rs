use std::fs;
use std::path::Path;

use crate::error::{AppinitError, Result};
use crate::report::Reporter;

/// What happened to a single path during materialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    Skipped,
}

/// Creates filesystem entries only where nothing exists yet.
///
/// Existing entries are skipped on existence alone — their content is never
/// inspected, mutated, or deleted, which is what makes re-running a
/// generation over a partially-populated directory safe.
pub struct Materializer<'a> {
    reporter: &'a dyn Reporter,
}

impl<'a> Materializer<'a> {
    pub fn new(reporter: &'a dyn Reporter) -> Self {
        Self { reporter }
    }

    /// Create an empty directory at `path` unless it already exists.
    pub fn dir(&self, path: &Path) -> Result<Outcome> {
        self.ensure(path, |p| {
            fs::create_dir(p).map_err(|e| AppinitError::Write {
                path: p.to_path_buf(),
                source: e,
            })
        })
    }

    /// Produce bytes and write them to `path` unless it already exists.
    ///
    /// The producer runs only for absent paths, so a producer that would
    /// fail (an unrenderable template, say) can never fail a run for an
    /// entry that is already on disk.
    pub fn file<F>(&self, path: &Path, produce: F) -> Result<Outcome>
    where
        F: FnOnce() -> Result<Vec<u8>>,
    {
        self.ensure(path, |p| {
            let bytes = produce()?;
            fs::write(p, bytes).map_err(|e| AppinitError::Write {
                path: p.to_path_buf(),
                source: e,
            })
        })
    }

    fn ensure(&self, path: &Path, create: impl FnOnce(&Path) -> Result<()>) -> Result<Outcome> {
        let exists = path.try_exists().map_err(|e| AppinitError::Stat {
            path: path.to_path_buf(),
            source: e,
        })?;

        if exists {
            self.reporter.skipped(path);
            return Ok(Outcome::Skipped);
        }

        create(path)?;
        self.reporter.created(path);
        Ok(Outcome::Created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::NullReporter;

    #[test]
    fn creates_absent_directory_and_file() {
        let tmp = tempfile::tempdir().unwrap();
        let materializer = Materializer::new(&NullReporter);

        let dir = tmp.path().join("app");
        assert_eq!(materializer.dir(&dir).unwrap(), Outcome::Created);
        assert!(dir.is_dir());

        let file = dir.join("Dockerfile");
        let outcome = materializer.file(&file, || Ok(b"FROM scratch\n".to_vec()));
        assert_eq!(outcome.unwrap(), Outcome::Created);
        assert_eq!(fs::read(&file).unwrap(), b"FROM scratch\n");
    }

    #[test]
    fn existing_entries_are_skipped_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let materializer = Materializer::new(&NullReporter);

        let file = tmp.path().join("notes.txt");
        fs::write(&file, "user edits").unwrap();

        let outcome = materializer.file(&file, || Ok(b"generated".to_vec()));
        assert_eq!(outcome.unwrap(), Outcome::Skipped);
        assert_eq!(fs::read_to_string(&file).unwrap(), "user edits");
    }

    #[test]
    fn producer_never_runs_for_existing_path() {
        let tmp = tempfile::tempdir().unwrap();
        let materializer = Materializer::new(&NullReporter);

        let file = tmp.path().join("present");
        fs::write(&file, "x").unwrap();

        // A producer that would abort the run must not even be invoked.
        let outcome = materializer.file(&file, || {
            panic!("producer invoked for existing path");
        });
        assert_eq!(outcome.unwrap(), Outcome::Skipped);
    }

    #[test]
    fn write_failure_is_reported_with_path() {
        let tmp = tempfile::tempdir().unwrap();
        let materializer = Materializer::new(&NullReporter);

        // Parent directory is missing, so the write must fail.
        let file = tmp.path().join("no-such-dir").join("file");
        let err = materializer.file(&file, || Ok(vec![])).unwrap_err();
        match err {
            AppinitError::Write { path, .. } => assert_eq!(path, file),
            other => panic!("expected Write, got {other:?}"),
        }
    }

    #[test]
    fn producer_failure_propagates() {
        let tmp = tempfile::tempdir().unwrap();
        let materializer = Materializer::new(&NullReporter);

        let file = tmp.path().join("fresh");
        let err = materializer
            .file(&file, || {
                Err(AppinitError::UnknownVariable {
                    name: "missing_var".into(),
                })
            })
            .unwrap_err();
        assert!(matches!(err, AppinitError::UnknownVariable { .. }));
        assert!(!file.exists(), "failed producer must leave no file behind");
    }
}
