use crate::error::{AppinitError, Result};

/// Resolves a template id to raw template bytes.
///
/// The renderer never owns template content; it borrows it from an asset
/// source for the duration of one render call.
pub trait AssetSource {
    fn resolve(&self, id: &str) -> Result<&[u8]>;
}

// Template assets baked into the binary at compile time.
const ASSETS: &[(&str, &[u8])] = &[
    ("Dockerfile", include_bytes!("tmpl/Dockerfile")),
    ("docker-compose.yml", include_bytes!("tmpl/docker-compose.yml")),
    ("dev.yml", include_bytes!("tmpl/dev.yml")),
    ("prod.yml", include_bytes!("tmpl/prod.yml")),
    ("seed.js", include_bytes!("tmpl/seed.js")),
    ("100_init.sql", include_bytes!("tmpl/100_init.sql")),
];

/// The default asset source: the `src/tmpl/` files embedded in the binary.
pub struct EmbeddedAssets;

impl AssetSource for EmbeddedAssets {
    fn resolve(&self, id: &str) -> Result<&[u8]> {
        ASSETS
            .iter()
            .find(|(name, _)| *name == id)
            .map(|(_, bytes)| *bytes)
            .ok_or_else(|| AppinitError::UnknownAsset { id: id.to_string() })
    }
}
