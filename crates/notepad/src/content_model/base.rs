// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::collections::HashSet;

use super::selection::{Position, Selection};
use crate::utf16::utf16_len;
use crate::{BlockType, StyleSet};

/// A single line of content.
///
/// `styles` holds one entry per UTF-16 code unit of `text`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentBlock {
    pub(crate) key: String,
    pub(crate) text: String,
    pub(crate) block_type: BlockType,
    pub(crate) depth: u32,
    pub(crate) styles: Vec<StyleSet>,
}

impl ContentBlock {
    pub(crate) fn new(key: String, text: &str, block_type: BlockType) -> Self {
        Self {
            key,
            text: text.to_owned(),
            block_type,
            depth: 0,
            styles: vec![StyleSet::new(); utf16_len(text)],
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn block_type(&self) -> BlockType {
        self.block_type
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Length in UTF-16 code units.
    pub fn len_utf16(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Styles of the code unit at `offset`, or the empty set past the end.
    pub fn style_at(&self, offset: usize) -> StyleSet {
        self.styles.get(offset).cloned().unwrap_or_default()
    }
}

/// The document: an ordered list of blocks plus the selection.
///
/// There is always at least one block. Block keys are unique, and the
/// selection always points into existing blocks.
#[derive(Clone, Debug)]
pub struct ContentModel {
    pub(crate) blocks: Vec<ContentBlock>,
    pub(crate) selection: Selection,

    /// Styles toggled while the cursor is collapsed, applied to the next
    /// inserted text.
    pub(crate) style_override: Option<StyleSet>,

    next_key: u64,
}

impl ContentModel {
    /// Create an empty document with a single unstyled block.
    pub fn new() -> Self {
        let mut model = Self {
            blocks: Vec::new(),
            selection: Selection::collapsed(Position::new("", 0)),
            style_override: None,
            next_key: 0,
        };
        let key = model.generate_key();
        model
            .blocks
            .push(ContentBlock::new(key.clone(), "", BlockType::Unstyled));
        model.selection = Selection::collapsed(Position::new(key, 0));
        model
    }

    /// Build a document from decoded blocks. An empty list gets a single
    /// empty block. Callers are responsible for key uniqueness.
    pub(crate) fn from_blocks(blocks: Vec<ContentBlock>) -> Self {
        if blocks.is_empty() {
            return Self::new();
        }
        let first_key = blocks[0].key.clone();
        Self {
            blocks,
            selection: Selection::collapsed(Position::new(first_key, 0)),
            style_override: None,
            next_key: 0,
        }
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn first_block(&self) -> &ContentBlock {
        &self.blocks[0]
    }

    pub fn last_block(&self) -> &ContentBlock {
        &self.blocks[self.blocks.len() - 1]
    }

    pub fn block_for_key(&self, key: &str) -> Option<&ContentBlock> {
        self.blocks.iter().find(|b| b.key == key)
    }

    pub(crate) fn block_index(&self, key: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.key == key)
    }

    /// The block containing the start of the selection.
    pub fn current_block(&self) -> &ContentBlock {
        let idx = self.block_index(&self.selection.start().block_key).unwrap_or(0);
        &self.blocks[idx]
    }

    pub fn has_style_override(&self) -> bool {
        self.style_override.is_some()
    }

    /// All text, one line per block.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// A fresh block key not used by any block in the document.
    pub(crate) fn generate_key(&mut self) -> String {
        let used: HashSet<&str> =
            self.blocks.iter().map(|b| b.key.as_str()).collect();
        loop {
            self.next_key += 1;
            let key = format!("b{:04x}", self.next_key);
            if !used.contains(key.as_str()) {
                return key;
            }
        }
    }

    #[cfg(feature = "assert-invariants")]
    pub(crate) fn assert_invariants(&self) {
        assert!(!self.blocks.is_empty(), "document has no blocks");
        let mut seen = HashSet::new();
        for block in &self.blocks {
            assert!(seen.insert(block.key.as_str()), "duplicate key {}", block.key);
            assert_eq!(
                block.styles.len(),
                utf16_len(&block.text),
                "style count out of step with text in block {}",
                block.key
            );
        }
        for pos in [&self.selection.anchor, &self.selection.focus] {
            let block = self
                .block_for_key(&pos.block_key)
                .expect("selection points at a missing block");
            assert!(pos.offset <= block.len_utf16());
        }
    }

    #[cfg(not(feature = "assert-invariants"))]
    pub(crate) fn assert_invariants(&self) {}
}

impl Default for ContentModel {
    fn default() -> Self {
        Self::new()
    }
}
