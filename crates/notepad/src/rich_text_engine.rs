// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Defines the [`RichTextEngine`] trait: the boundary between the editor
//! behaviour in this crate (autoformatting, key commands, persistence) and
//! the document model that actually stores content.
//!
//! [`ContentModel`](crate::ContentModel) is the model shipped with the crate.
//! Nothing outside the `content_model` module depends on its internals.

use crate::{BlockType, InlineStyle, Result, Selection, TextRange};

/// The operations the editor needs from a rich-text document model.
///
/// Offsets are UTF-16 code units within a block, matching the offsets used
/// by browser text APIs.
pub trait RichTextEngine: Sized {
    // -----------------------------------------------------------------------
    // Content access
    // -----------------------------------------------------------------------

    /// Full text of the block with the given key, if it exists.
    fn line_text(&self, block_key: &str) -> Option<String>;

    /// The current selection.
    fn selection(&self) -> Selection;

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Replace `range` with `text`, leaving a collapsed selection after the
    /// inserted text.
    fn replace_range(&mut self, range: &TextRange, text: &str);

    /// Toggle the block type of the blocks covered by the selection.
    fn set_block_type(&mut self, block_type: BlockType);

    /// Toggle an inline style on the selection (or on the pending style
    /// override when the selection is collapsed).
    fn toggle_inline_style(&mut self, style: InlineStyle);

    // -----------------------------------------------------------------------
    // Snapshots
    // -----------------------------------------------------------------------

    /// Produce the serialized raw snapshot of the document.
    fn serialize(&self) -> Result<String>;

    /// Rebuild a document from a serialized raw snapshot.
    fn deserialize(blob: &str) -> Result<Self>;
}
