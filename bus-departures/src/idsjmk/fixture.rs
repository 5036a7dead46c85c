//! Offline departure board source.
//!
//! Reads a previously saved API response from disk and serves it as if
//! it had just been fetched. Useful for development without network
//! access and for reproducing a board that rendered oddly.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::Board;

use super::convert::parse_board;
use super::error::FetchError;

/// A departure board response stored in a JSON file.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    path: PathBuf,
}

impl FixtureSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the fixture file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and convert the stored board.
    ///
    /// The file is read on every call, so edits show up without a restart.
    pub fn load(&self) -> Result<Board, FetchError> {
        let body = std::fs::read_to_string(&self.path).map_err(|e| FetchError::Fixture {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        debug!(path = %self.path.display(), bytes = body.len(), "loaded fixture board");

        parse_board(&body)
    }
}
