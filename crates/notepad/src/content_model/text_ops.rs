// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Text insertion, deletion and block splitting.

use super::base::ContentBlock;
use super::selection::{Position, TextRange};
use super::ContentModel;
use crate::utf16::{
    byte_index, next_grapheme_end, next_word_end, prev_grapheme_start,
    prev_word_start, utf16_len, utf16_offset,
};
use crate::{BlockType, StyleSet};

impl ContentModel {
    /// Type `text` over the current selection. The inserted text carries the
    /// current inline style, and any pending style override is consumed.
    pub fn insert_text(&mut self, text: &str) {
        let style = self.current_inline_style();
        let range = self.selection.range();
        self.replace_range_with_style(&range, text, &style);
    }

    /// Replace `range` with unstyled `text`.
    pub fn replace_range(&mut self, range: &TextRange, text: &str) {
        self.replace_range_with_style(range, text, &StyleSet::new());
    }

    /// Remove the character before the cursor, or the selected range.
    /// At the start of a block the block is merged into the previous one.
    pub fn backspace(&mut self) {
        self.backspace_to(prev_grapheme_start);
    }

    /// Remove the word before the cursor along with any whitespace after it.
    pub fn backspace_word(&mut self) {
        self.backspace_to(prev_word_start);
    }

    /// Remove everything between the start of the block and the cursor.
    pub fn backspace_to_start_of_line(&mut self) {
        self.backspace_to(|_, _| 0);
    }

    /// Remove the character after the cursor, or the selected range.
    /// At the end of a block the next block is merged into this one.
    pub fn delete(&mut self) {
        self.delete_to(next_grapheme_end);
    }

    /// Remove the word after the cursor along with any whitespace before it.
    pub fn delete_word(&mut self) {
        self.delete_to(next_word_end);
    }

    /// Remove everything between the cursor and the end of the block.
    pub fn delete_to_end_of_block(&mut self) {
        self.delete_to(|text, _| utf16_len(text));
    }

    /// Remove the block at `idx`. The selection moves to the start of the
    /// following block if it was inside the removed one. The last block is
    /// never removed.
    pub(crate) fn remove_block_at(&mut self, idx: usize) {
        if self.blocks.len() <= 1 || idx >= self.blocks.len() {
            return;
        }
        let removed = self.blocks.remove(idx);
        let start_key = &self.selection.start().block_key;
        let end_key = &self.selection.end().block_key;
        if *start_key == removed.key || *end_key == removed.key {
            let at = self.blocks[idx.min(self.blocks.len() - 1)].key.clone();
            self.set_collapsed_selection(Position::new(at, 0));
        }
        self.assert_invariants();
    }

    /// Backspace with a collapsed cursor removes from `start_of(text, offset)`
    /// to the cursor, or merges into the previous block at offset 0.
    fn backspace_to(&mut self, start_of: impl Fn(&str, usize) -> usize) {
        if !self.selection.is_collapsed() {
            let range = self.selection.range();
            self.replace_range(&range, "");
            return;
        }
        let pos = self.selection.start().clone();
        let Some(idx) = self.block_index(&pos.block_key) else {
            return;
        };
        let range = if pos.offset > 0 {
            let start = start_of(&self.blocks[idx].text, pos.offset);
            TextRange {
                start: Position::new(&pos.block_key, start),
                end: pos,
            }
        } else if idx > 0 {
            let prev = &self.blocks[idx - 1];
            TextRange {
                start: Position::new(prev.key(), prev.len_utf16()),
                end: pos,
            }
        } else {
            return;
        };
        self.replace_range(&range, "");
    }

    /// Delete with a collapsed cursor removes from the cursor to
    /// `end_of(text, offset)`, or merges the next block at the block end.
    fn delete_to(&mut self, end_of: impl Fn(&str, usize) -> usize) {
        if !self.selection.is_collapsed() {
            let range = self.selection.range();
            self.replace_range(&range, "");
            return;
        }
        let pos = self.selection.start().clone();
        let Some(idx) = self.block_index(&pos.block_key) else {
            return;
        };
        let block = &self.blocks[idx];
        let range = if pos.offset < block.len_utf16() {
            let end = end_of(&block.text, pos.offset);
            TextRange {
                end: Position::new(&pos.block_key, end),
                start: pos,
            }
        } else if let Some(next) = self.blocks.get(idx + 1) {
            TextRange {
                end: Position::new(next.key(), 0),
                start: pos,
            }
        } else {
            return;
        };
        self.replace_range(&range, "");
    }

    /// Split the current block at the cursor.
    ///
    /// The new block keeps the type of the block it was split from, except
    /// that splitting at the very end of a header or quote starts an
    /// unstyled block.
    pub fn enter(&mut self) {
        if !self.selection.is_collapsed() {
            let range = self.selection.range();
            self.replace_range(&range, "");
        }
        let pos = self.selection.start().clone();
        let Some(idx) = self.block_index(&pos.block_key) else {
            return;
        };
        let new_key = self.generate_key();

        let block = &mut self.blocks[idx];
        let split_byte = byte_index(&block.text, pos.offset);
        let split_unit = utf16_offset(&block.text, split_byte);
        let tail_text = block.text.split_off(split_byte);
        let tail_styles = block.styles.split_off(split_unit);

        let block_type =
            if tail_text.is_empty() && block.block_type.resets_on_split() {
                BlockType::Unstyled
            } else {
                block.block_type
            };
        let new_block = ContentBlock {
            key: new_key.clone(),
            text: tail_text,
            block_type,
            depth: block.depth,
            styles: tail_styles,
        };
        self.blocks.insert(idx + 1, new_block);
        self.set_collapsed_selection(Position::new(new_key, 0));
        self.style_override = None;
        self.assert_invariants();
    }

    /// Replace `range` with `text`, giving every inserted code unit `style`.
    ///
    /// The start block survives, blocks after it up to and including the
    /// end block are merged into it, and the cursor lands after the
    /// inserted text.
    pub(crate) fn replace_range_with_style(
        &mut self,
        range: &TextRange,
        text: &str,
        style: &StyleSet,
    ) {
        let (start, end) =
            if self.compare_positions(&range.start, &range.end).is_gt() {
                (&range.end, &range.start)
            } else {
                (&range.start, &range.end)
            };
        let (Some(si), Some(ei)) = (
            self.block_index(&start.block_key),
            self.block_index(&end.block_key),
        ) else {
            log::debug!("ignoring replace on unknown block");
            return;
        };

        let end_block = &self.blocks[ei];
        let end_byte = byte_index(&end_block.text, end.offset);
        let end_unit = utf16_offset(&end_block.text, end_byte);
        let suffix_text = end_block.text[end_byte..].to_owned();
        let suffix_styles = end_block.styles[end_unit..].to_vec();

        let block = &mut self.blocks[si];
        let start_byte = byte_index(&block.text, start.offset);
        let start_unit = utf16_offset(&block.text, start_byte);
        block.text.truncate(start_byte);
        block.styles.truncate(start_unit);
        block.text.push_str(text);
        block
            .styles
            .extend(std::iter::repeat(style.clone()).take(utf16_len(text)));
        block.text.push_str(&suffix_text);
        block.styles.extend(suffix_styles);
        let key = block.key.clone();

        if ei > si {
            self.blocks.drain(si + 1..=ei);
        }
        self.set_collapsed_selection(Position::new(
            key,
            start_unit + utf16_len(text),
        ));
        self.style_override = None;
        self.assert_invariants();
    }
}

#[cfg(test)]
mod tests {
    use crate::{BlockType, ContentModel, InlineStyle, Position, TextRange};

    fn model_with_text(text: &str) -> ContentModel {
        let mut m = ContentModel::new();
        m.insert_text(text);
        m
    }

    fn first_key(m: &ContentModel) -> String {
        m.first_block().key().to_owned()
    }

    #[test]
    fn typing_appends_and_moves_cursor() {
        let mut model = model_with_text("hel");
        model.insert_text("lo");
        assert_eq!(model.plain_text(), "hello");
        assert_eq!(model.get_selection().start().offset, 5);
    }

    #[test]
    fn typing_over_a_selection_replaces_it() {
        let mut model = model_with_text("hello world");
        let key = first_key(&model);
        model.select_in(&key, 6, 11);
        model.insert_text("there");
        assert_eq!(model.plain_text(), "hello there");
    }

    #[test]
    fn replace_range_inserts_unstyled_text() {
        let mut model = ContentModel::new();
        model.toggle_inline_style(InlineStyle::Bold);
        model.insert_text("ab");
        let key = first_key(&model);
        model.replace_range(&TextRange::in_block(&key, 1, 1), "X");
        let block = model.first_block();
        assert_eq!(block.text(), "aXb");
        assert!(block.style_at(0).contains(&InlineStyle::Bold));
        assert!(block.style_at(1).is_empty());
        assert!(block.style_at(2).contains(&InlineStyle::Bold));
    }

    #[test]
    fn replacing_whole_line_with_nothing_empties_it() {
        let mut model = model_with_text("***");
        let key = first_key(&model);
        model.replace_range(&TextRange::in_block(&key, 0, 3), "");
        assert_eq!(model.plain_text(), "");
        assert_eq!(model.get_selection().start(), &Position::new(key, 0));
    }

    #[test]
    fn backspace_removes_previous_character() {
        let mut model = model_with_text("abc");
        model.backspace();
        assert_eq!(model.plain_text(), "ab");
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let mut model = model_with_text("a\u{1F469}\u{1F3FF}\u{200D}\u{1F680}");
        model.backspace();
        assert_eq!(model.plain_text(), "a");
        assert_eq!(model.get_selection().start().offset, 1);
    }

    #[test]
    fn backspace_at_start_of_document_does_nothing() {
        let mut model = model_with_text("abc");
        let key = first_key(&model);
        model.select_in(&key, 0, 0);
        model.backspace();
        assert_eq!(model.plain_text(), "abc");
    }

    #[test]
    fn backspace_at_block_start_merges_into_previous_block() {
        let mut model = model_with_text("ab");
        model.enter();
        model.insert_text("cd");
        let second = model.blocks()[1].key().to_owned();
        model.select_in(&second, 0, 0);
        model.backspace();
        assert_eq!(model.blocks().len(), 1);
        assert_eq!(model.plain_text(), "abcd");
        assert_eq!(model.get_selection().start().offset, 2);
    }

    #[test]
    fn delete_removes_next_character() {
        let mut model = model_with_text("abc");
        let key = first_key(&model);
        model.select_in(&key, 1, 1);
        model.delete();
        assert_eq!(model.plain_text(), "ac");
    }

    #[test]
    fn delete_at_block_end_merges_next_block() {
        let mut model = model_with_text("ab");
        model.enter();
        model.insert_text("cd");
        let key = first_key(&model);
        model.select_in(&key, 2, 2);
        model.delete();
        assert_eq!(model.plain_text(), "abcd");
    }

    #[test]
    fn delete_at_document_end_does_nothing() {
        let mut model = model_with_text("ab");
        model.delete();
        assert_eq!(model.plain_text(), "ab");
    }

    #[test]
    fn backspace_word_removes_word_and_trailing_space() {
        let mut model = model_with_text("hello big world");
        let key = first_key(&model);
        model.select_in(&key, 10, 10);
        model.backspace_word();
        assert_eq!(model.plain_text(), "hello world");
        assert_eq!(model.get_selection().start().offset, 6);
    }

    #[test]
    fn backspace_word_at_block_start_merges_blocks() {
        let mut model = model_with_text("ab");
        model.enter();
        model.insert_text("cd");
        let second = model.blocks()[1].key().to_owned();
        model.select_in(&second, 0, 0);
        model.backspace_word();
        assert_eq!(model.plain_text(), "abcd");
    }

    #[test]
    fn backspace_to_start_of_line_keeps_the_rest() {
        let mut model = model_with_text("one two");
        let key = first_key(&model);
        model.select_in(&key, 4, 4);
        model.backspace_to_start_of_line();
        assert_eq!(model.plain_text(), "two");
    }

    #[test]
    fn delete_word_and_delete_to_end_of_block() {
        let mut model = model_with_text("one two three");
        let key = first_key(&model);
        model.select_in(&key, 3, 3);
        model.delete_word();
        assert_eq!(model.plain_text(), "one three");
        model.delete_to_end_of_block();
        assert_eq!(model.plain_text(), "one");
    }

    #[test]
    fn removing_the_selected_block_moves_the_cursor() {
        let mut model = model_with_text("a");
        model.enter();
        model.insert_text("b");
        let first = first_key(&model);
        model.select_in(&first, 1, 1);
        model.remove_block_at(0);
        assert_eq!(model.plain_text(), "b");
        let key = model.first_block().key().to_owned();
        assert_eq!(model.get_selection().start(), &Position::new(key, 0));
        model.remove_block_at(0);
        assert_eq!(model.blocks().len(), 1);
    }

    #[test]
    fn enter_splits_block_at_cursor() {
        let mut model = model_with_text("abcd");
        let key = first_key(&model);
        model.select_in(&key, 2, 2);
        model.enter();
        assert_eq!(model.plain_text(), "ab\ncd");
        let second = &model.blocks()[1];
        assert_eq!(model.get_selection().start(), &Position::new(second.key(), 0));
    }

    #[test]
    fn enter_at_end_of_heading_starts_unstyled_block() {
        let mut model = model_with_text("Title");
        model.toggle_block_type(BlockType::HeaderOne);
        model.enter();
        assert_eq!(model.blocks()[0].block_type(), BlockType::HeaderOne);
        assert_eq!(model.blocks()[1].block_type(), BlockType::Unstyled);
    }

    #[test]
    fn enter_in_list_item_continues_list() {
        let mut model = model_with_text("item");
        model.toggle_block_type(BlockType::UnorderedListItem);
        model.enter();
        assert_eq!(
            model.blocks()[1].block_type(),
            BlockType::UnorderedListItem
        );
    }

    #[test]
    fn replacing_across_blocks_merges_them() {
        let mut model = model_with_text("one");
        model.enter();
        model.insert_text("two");
        model.enter();
        model.insert_text("three");
        let first = model.blocks()[0].key().to_owned();
        let last = model.blocks()[2].key().to_owned();
        model.select(Position::new(&first, 1), Position::new(&last, 2));
        model.insert_text("-");
        assert_eq!(model.blocks().len(), 1);
        assert_eq!(model.plain_text(), "o-ree");
    }
}
