// src/error.rs
//! Error taxonomy for the fetch → parse → reshape pipeline.
//!
//! Every variant is terminal: there is no partial-table fallback and no
//! default-filling of missing cells.

use std::{io, path::{Path, PathBuf}};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The server answered, but not with a success status.
    #[error("failed to retrieve {url}: HTTP status {status}")]
    FetchFailure { url: String, status: u16 },

    /// The request never produced a status (DNS, TLS, connection reset, …).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Markup contained no `<table>` element.
    #[error("no <table> element found in the fetched page")]
    NotFound,

    /// Header or data rows disagree with the expected layout.
    #[error("table shape mismatch in {what}: expected {expected}, found {found}")]
    ShapeMismatch {
        what: String,
        expected: String,
        found: String,
    },

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn shape(
        what: impl Into<String>,
        expected: impl ToString,
        found: impl ToString,
    ) -> Self {
        Self::ShapeMismatch {
            what: what.into(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io { path: path.as_ref().to_path_buf(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
