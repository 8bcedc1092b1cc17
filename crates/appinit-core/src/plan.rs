/// Content producer for one scaffold entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Create an empty directory.
    Directory,
    /// Render the named embedded template and write the result.
    Template(&'static str),
}

/// One entry of the scaffold plan: a path relative to the app root plus the
/// producer for its content.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub rel_path: &'static str,
    pub source: Source,
}

const fn dir(rel_path: &'static str) -> Entry {
    Entry {
        rel_path,
        source: Source::Directory,
    }
}

const fn file(rel_path: &'static str, template: &'static str) -> Entry {
    Entry {
        rel_path,
        source: Source::Template(template),
    }
}

/// The fixed scaffold plan, in dependency order: every directory appears
/// before the entries beneath it. The empty `rel_path` is the app root.
pub const ENTRIES: &[Entry] = &[
    dir(""),
    file("Dockerfile", "Dockerfile"),
    file("docker-compose.yml", "docker-compose.yml"),
    dir("config"),
    file("config/dev.yml", "dev.yml"),
    file("config/prod.yml", "prod.yml"),
    file("config/seed.js", "seed.js"),
    dir("config/migrations"),
    file("config/migrations/100_init.sql", "100_init.sql"),
];
