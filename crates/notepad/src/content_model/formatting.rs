// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Inline style toggles and block type changes.

use super::ContentModel;
use crate::{BlockType, InlineStyle, StyleSet};

impl ContentModel {
    /// The style that text typed at the cursor would receive.
    ///
    /// A pending override wins. Otherwise a collapsed cursor inherits the
    /// style of the character before it, or of the first character when at
    /// offset 0. A range selection reports the style of its first selected
    /// character, or of the character before it at the end of a block.
    ///
    /// With no character to look at in the block, the style comes from the
    /// last character of the nearest non-empty block above.
    pub fn current_inline_style(&self) -> StyleSet {
        if let Some(style) = &self.style_override {
            return style.clone();
        }
        let start = self.selection.start();
        let Some(idx) = self.block_index(&start.block_key) else {
            return StyleSet::new();
        };
        let block = &self.blocks[idx];
        let len = block.len_utf16();
        if self.selection.is_collapsed() {
            if start.offset > 0 {
                return block.style_at(start.offset - 1);
            }
            if len > 0 {
                return block.style_at(0);
            }
        } else {
            if start.offset < len {
                return block.style_at(start.offset);
            }
            if start.offset > 0 {
                return block.style_at(start.offset - 1);
            }
        }
        self.style_above(idx)
    }

    /// Style of the last character of the closest non-empty block before
    /// `idx`, or the empty set.
    fn style_above(&self, idx: usize) -> StyleSet {
        self.blocks[..idx]
            .iter()
            .rev()
            .find(|b| !b.is_empty())
            .map(|b| b.style_at(b.len_utf16() - 1))
            .unwrap_or_default()
    }

    /// Toggle `style`.
    ///
    /// - **Collapsed cursor**: flips the style in the pending override so
    ///   that the next inserted text will (or won't) carry it.
    /// - **Range selection**: removes the style if every selected code unit
    ///   already has it, otherwise adds it to all of them.
    pub fn toggle_inline_style(&mut self, style: InlineStyle) {
        if self.selection.is_collapsed() {
            let mut pending = self.current_inline_style();
            if !pending.remove(&style) {
                pending.insert(style);
            }
            self.style_override = Some(pending);
            return;
        }

        let segments = self.selected_segments();
        let fully_styled = segments.iter().all(|&(idx, from, to)| {
            self.blocks[idx].styles[from..to]
                .iter()
                .all(|s| s.contains(&style))
        });
        for (idx, from, to) in segments {
            for unit in &mut self.blocks[idx].styles[from..to] {
                if fully_styled {
                    unit.remove(&style);
                } else {
                    unit.insert(style);
                }
            }
        }
        self.assert_invariants();
    }

    /// Toggle the type of the blocks touched by the selection.
    ///
    /// If the block at the selection start already has `block_type`, all
    /// touched blocks become unstyled; otherwise they all take
    /// `block_type`. A selection ending at offset 0 of a later block does
    /// not touch that block.
    pub fn toggle_block_type(&mut self, block_type: BlockType) {
        let Some((first, last)) = self.selected_block_span() else {
            return;
        };
        let target = if self.blocks[first].block_type == block_type {
            BlockType::Unstyled
        } else {
            block_type
        };
        for block in &mut self.blocks[first..=last] {
            block.block_type = target;
        }
    }

    /// Set the type of the block at the selection start, without toggling.
    pub(crate) fn reset_block_type(&mut self, block_type: BlockType) {
        if let Some(idx) = self.block_index(&self.selection.start().block_key)
        {
            self.blocks[idx].block_type = block_type;
        }
    }

    fn selected_block_span(&self) -> Option<(usize, usize)> {
        let start = self.selection.start();
        let end = self.selection.end();
        let first = self.block_index(&start.block_key)?;
        let mut last = self.block_index(&end.block_key)?;
        if last > first && end.offset == 0 {
            last -= 1;
        }
        Some((first, last))
    }

    /// `(block index, from, to)` code unit spans covered by the selection.
    fn selected_segments(&self) -> Vec<(usize, usize, usize)> {
        let start = self.selection.start();
        let end = self.selection.end();
        let (Some(first), Some(last)) = (
            self.block_index(&start.block_key),
            self.block_index(&end.block_key),
        ) else {
            return Vec::new();
        };
        (first..=last)
            .map(|idx| {
                let len = self.blocks[idx].len_utf16();
                let from = if idx == first { start.offset.min(len) } else { 0 };
                let to = if idx == last { end.offset.min(len) } else { len };
                (idx, from, to.max(from))
            })
            .filter(|&(_, from, to)| from < to)
            .collect()
    }
}
