// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Flattened, render-ready view of the document.
//!
//! Each block is projected into runs of text sharing one style set. Offsets
//! are UTF-16 code units relative to the start of the block.

use super::base::ContentBlock;
use super::ContentModel;
use crate::{BlockType, StyleSet};

/// A run of text whose code units all carry the same styles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledRun {
    pub start_utf16: usize,
    /// Exclusive.
    pub end_utf16: usize,
    pub text: String,
    pub styles: StyleSet,
}

/// A single block and its styled runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockProjection {
    pub key: String,
    pub block_type: BlockType,
    pub depth: u32,
    pub runs: Vec<StyledRun>,
}

impl ContentModel {
    pub fn block_projections(&self) -> Vec<BlockProjection> {
        self.blocks.iter().map(project_block).collect()
    }
}

pub(crate) fn project_block(block: &ContentBlock) -> BlockProjection {
    let mut runs = Vec::new();
    let mut offset = 0;
    for ch in block.text.chars() {
        let len = ch.len_utf16();
        runs.push(StyledRun {
            start_utf16: offset,
            end_utf16: offset + len,
            text: ch.to_string(),
            styles: block.style_at(offset),
        });
        offset += len;
    }
    merge_adjacent_runs(&mut runs);
    BlockProjection {
        key: block.key.clone(),
        block_type: block.block_type,
        depth: block.depth,
        runs,
    }
}

/// Merge neighbouring runs with identical style sets.
fn merge_adjacent_runs(runs: &mut Vec<StyledRun>) {
    let mut i = 0;
    while i + 1 < runs.len() {
        if runs[i].styles == runs[i + 1].styles {
            let next = runs.remove(i + 1);
            runs[i].text.push_str(&next.text);
            runs[i].end_utf16 = next.end_utf16;
        } else {
            i += 1;
        }
    }
}
