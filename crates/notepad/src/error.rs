// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::io;
use std::path::PathBuf;

/// A specialized `Result` type for the crate.
pub type Result<T> = std::result::Result<T, NoteError>;

/// Errors raised at the edges of the editor: snapshots, storage and config.
///
/// Autoformatting and editing themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("malformed document snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("unknown block type `{0}` in document snapshot")]
    UnknownBlockType(String),

    #[error("duplicate block key `{0}` in document snapshot")]
    DuplicateBlockKey(String),

    #[error("storage error for key `{key}`: {message}")]
    Storage { key: String, message: String },

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid editor configuration: {0}")]
    Config(String),
}

impl NoteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
