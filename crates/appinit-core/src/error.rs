use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum AppinitError {
    #[error("unknown template variable '{name}'")]
    #[diagnostic(help("The embedded templates only use 'app_name' and 'app_name_slug'"))]
    UnknownVariable { name: String },

    #[error("unable to check if {path} exists")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to create {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown template asset '{id}'")]
    UnknownAsset { id: String },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AppinitError>;
