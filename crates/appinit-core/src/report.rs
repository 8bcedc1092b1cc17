use std::path::Path;

/// Observability collaborator for materialization outcomes.
///
/// The materializer calls exactly one of these per entry. Implementations
/// decide how (or whether) to surface the event; the CLI backs this with
/// styled terminal output.
pub trait Reporter {
    fn created(&self, path: &Path);
    fn skipped(&self, path: &Path);
}

/// Reporter that discards every event. Used by library callers and tests.
pub struct NullReporter;

impl Reporter for NullReporter {
    fn created(&self, _path: &Path) {}
    fn skipped(&self, _path: &Path) {}
}
