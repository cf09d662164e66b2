// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Model code for a small note editor with markdown-style shortcuts.
//!
//! Typing `#` followed by a space on an otherwise empty line turns it into
//! a heading, and `*`, `**` and `***` followed by a space toggle bold, red
//! and underlined text. The document is persisted as a raw JSON snapshot
//! into a [`KeyValueStore`] after every change.

pub mod autoformat;
mod config;
mod content_model;
mod error;
mod formats;
pub mod key_command;
mod note_editor;
mod rich_text_engine;
pub mod storage;
mod style_map;
mod utf16;

pub use crate::autoformat::{
    find_trigger, intercept_input, FormatAction, InputHandling, Trigger,
    TRIGGERS,
};
pub use crate::config::{
    EditorConfig, DEFAULT_SAVE_MESSAGE, DEFAULT_STORAGE_KEY,
};
pub use crate::content_model::{
    BlockProjection, ContentBlock, ContentModel, Position, RawBlock,
    RawContent, RawStyleRange, Selection, StyledRun, TextRange,
};
pub use crate::error::{NoteError, Result};
pub use crate::formats::{BlockType, InlineStyle, StyleSet};
pub use crate::key_command::{handle_key_command, KeyCommand};
pub use crate::note_editor::{NoteEditor, SaveConfirmation};
pub use crate::rich_text_engine::RichTextEngine;
pub use crate::storage::{KeyValueStore, MemoryStore};
pub use crate::style_map::{default_style_map, StyleMap};

#[cfg(not(target_arch = "wasm32"))]
pub use crate::storage::FileStore;
