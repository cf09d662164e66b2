// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Selection management.

use super::ContentModel;

/// A point in the document: a block key plus a UTF-16 offset in that block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub block_key: String,
    pub offset: usize,
}

impl Position {
    pub fn new(block_key: impl Into<String>, offset: usize) -> Self {
        Self {
            block_key: block_key.into(),
            offset,
        }
    }
}

/// An ordered range: `start` never comes after `end` in the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextRange {
    pub start: Position,
    pub end: Position,
}

impl TextRange {
    /// A range covering `start..end` within a single block.
    pub fn in_block(block_key: &str, start: usize, end: usize) -> Self {
        Self {
            start: Position::new(block_key, start.min(end)),
            end: Position::new(block_key, start.max(end)),
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

/// The user's selection. `anchor` is where it started and `focus` is where
/// it ends; `is_backward` is true when `focus` comes before `anchor`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub anchor: Position,
    pub focus: Position,
    pub is_backward: bool,
}

impl Selection {
    pub fn collapsed(at: Position) -> Self {
        Self {
            anchor: at.clone(),
            focus: at,
            is_backward: false,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }

    pub fn start(&self) -> &Position {
        if self.is_backward {
            &self.focus
        } else {
            &self.anchor
        }
    }

    pub fn end(&self) -> &Position {
        if self.is_backward {
            &self.anchor
        } else {
            &self.focus
        }
    }

    pub fn range(&self) -> TextRange {
        TextRange {
            start: self.start().clone(),
            end: self.end().clone(),
        }
    }
}

impl ContentModel {
    /// Move the selection. Positions naming unknown blocks are ignored and
    /// offsets are clamped to their block's length.
    pub fn select(&mut self, anchor: Position, focus: Position) {
        let (Some(anchor), Some(focus)) =
            (self.clamp_position(&anchor), self.clamp_position(&focus))
        else {
            log::debug!("ignoring selection on unknown block");
            return;
        };
        let is_backward = self.compare_positions(&focus, &anchor).is_lt();
        self.selection = Selection {
            anchor,
            focus,
            is_backward,
        };
        // The pending style only survives until the cursor moves
        self.style_override = None;
    }

    /// Select `start..end` within one block.
    pub fn select_in(&mut self, block_key: &str, start: usize, end: usize) {
        self.select(
            Position::new(block_key, start),
            Position::new(block_key, end),
        );
    }

    /// Place a collapsed cursor at the end of the document.
    pub fn move_to_end(&mut self) {
        let last = self.last_block();
        let at = Position::new(last.key(), last.len_utf16());
        self.select(at.clone(), at);
    }

    pub fn get_selection(&self) -> &Selection {
        &self.selection
    }

    pub(crate) fn set_collapsed_selection(&mut self, at: Position) {
        self.selection = Selection::collapsed(at);
    }

    fn clamp_position(&self, position: &Position) -> Option<Position> {
        let block = self.block_for_key(&position.block_key)?;
        Some(Position::new(
            block.key(),
            position.offset.min(block.len_utf16()),
        ))
    }

    /// Document order of two positions in known blocks.
    pub(crate) fn compare_positions(
        &self,
        a: &Position,
        b: &Position,
    ) -> std::cmp::Ordering {
        let ia = self.block_index(&a.block_key).unwrap_or(usize::MAX);
        let ib = self.block_index(&b.block_key).unwrap_or(usize::MAX);
        ia.cmp(&ib).then(a.offset.cmp(&b.offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with_text(text: &str) -> ContentModel {
        let mut m = ContentModel::new();
        m.insert_text(text);
        m
    }

    #[test]
    fn new_model_has_collapsed_cursor_at_start() {
        let model = ContentModel::new();
        let sel = model.get_selection();
        assert!(sel.is_collapsed());
        assert_eq!(sel.start().offset, 0);
        assert_eq!(sel.start().block_key, model.first_block().key());
    }

    #[test]
    fn selecting_within_a_block() {
        let mut model = model_with_text("abcdefgh");
        let key = model.first_block().key().to_owned();
        model.select_in(&key, 1, 3);
        let sel = model.get_selection();
        assert_eq!(sel.start().offset, 1);
        assert_eq!(sel.end().offset, 3);
        assert!(!sel.is_backward);
    }

    #[test]
    fn selecting_backwards_orders_range() {
        let mut model = model_with_text("abcdefgh");
        let key = model.first_block().key().to_owned();
        model.select(Position::new(&key, 6), Position::new(&key, 2));
        let sel = model.get_selection();
        assert!(sel.is_backward);
        assert_eq!(sel.range(), TextRange::in_block(&key, 2, 6));
    }

    #[test]
    fn selecting_past_end_is_clamped() {
        let mut model = model_with_text("abc");
        let key = model.first_block().key().to_owned();
        model.select_in(&key, 1, 10);
        assert_eq!(model.get_selection().end().offset, 3);
    }

    #[test]
    fn selecting_unknown_block_is_ignored() {
        let mut model = model_with_text("abc");
        let before = model.get_selection().clone();
        model.select_in("nope", 0, 1);
        assert_eq!(model.get_selection(), &before);
    }

    #[test]
    fn moving_the_cursor_clears_pending_style() {
        let mut model = ContentModel::new();
        model.toggle_inline_style(crate::InlineStyle::Bold);
        assert!(model.has_style_override());
        model.move_to_end();
        assert!(!model.has_style_override());
    }
}
