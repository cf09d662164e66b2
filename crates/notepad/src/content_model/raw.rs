// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! The raw snapshot format.
//!
//! This is the JSON shape the browser editor has always written to local
//! storage, so existing saved notes keep loading:
//!
//! ```json
//! {
//!   "blocks": [{
//!     "key": "b0001", "text": "Title", "type": "header-one", "depth": 0,
//!     "inlineStyleRanges": [{ "offset": 0, "length": 5, "style": "BOLD" }],
//!     "entityRanges": [], "data": {}
//!   }],
//!   "entityMap": {}
//! }
//! ```
//!
//! Offsets and lengths are UTF-16 code units. Entities are not modelled;
//! they are accepted on input and written back empty.

use std::collections::{BTreeMap, HashSet};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::base::ContentBlock;
use super::ContentModel;
use crate::utf16::utf16_len;
use crate::{BlockType, InlineStyle, NoteError, Result, StyleSet};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContent {
    #[serde(default)]
    pub blocks: Vec<RawBlock>,
    #[serde(default)]
    pub entity_map: BTreeMap<String, serde_json::Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBlock {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type", default = "unstyled")]
    pub block_type: String,
    #[serde(default)]
    pub depth: u32,
    #[serde(default)]
    pub inline_style_ranges: Vec<RawStyleRange>,
    #[serde(default)]
    pub entity_ranges: Vec<serde_json::Value>,
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStyleRange {
    pub offset: usize,
    pub length: usize,
    pub style: String,
}

fn unstyled() -> String {
    BlockType::Unstyled.to_string()
}

impl RawContent {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl ContentModel {
    /// Snapshot the document in the raw format.
    pub fn to_raw(&self) -> RawContent {
        RawContent {
            blocks: self.blocks.iter().map(encode_block).collect(),
            entity_map: BTreeMap::new(),
        }
    }

    /// Rebuild a document from a raw snapshot. The cursor is placed at the
    /// start of the first block.
    pub fn from_raw(raw: RawContent) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut blocks = Vec::with_capacity(raw.blocks.len());
        let mut missing_keys = Vec::new();
        for (idx, raw_block) in raw.blocks.into_iter().enumerate() {
            if raw_block.key.is_empty() {
                missing_keys.push(idx);
            } else if !seen.insert(raw_block.key.clone()) {
                return Err(NoteError::DuplicateBlockKey(raw_block.key));
            }
            blocks.push(decode_block(raw_block)?);
        }

        let mut model = ContentModel::from_blocks(blocks);
        for idx in missing_keys {
            let key = model.generate_key();
            model.blocks[idx].key = key;
        }
        if let Some(first) = model.blocks.first() {
            let key = first.key.clone();
            model.set_collapsed_selection(super::Position::new(key, 0));
        }
        model.assert_invariants();
        Ok(model)
    }
}

fn encode_block(block: &ContentBlock) -> RawBlock {
    RawBlock {
        key: block.key.clone(),
        text: block.text.clone(),
        block_type: block.block_type.to_string(),
        depth: block.depth,
        inline_style_ranges: encode_style_ranges(&block.styles),
        entity_ranges: Vec::new(),
        data: serde_json::Map::new(),
    }
}

/// One range per maximal run of each style, styles ordered by first
/// appearance.
fn encode_style_ranges(styles: &[StyleSet]) -> Vec<RawStyleRange> {
    let mut order: Vec<InlineStyle> = Vec::new();
    for set in styles {
        for style in set {
            if !order.contains(style) {
                order.push(*style);
            }
        }
    }

    let mut ranges = Vec::new();
    for style in order {
        let mut run_start = None;
        for (offset, set) in styles.iter().enumerate() {
            match (set.contains(&style), run_start) {
                (true, None) => run_start = Some(offset),
                (false, Some(start)) => {
                    ranges.push(style_range(style, start, offset));
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            ranges.push(style_range(style, start, styles.len()));
        }
    }
    ranges
}

fn style_range(style: InlineStyle, start: usize, end: usize) -> RawStyleRange {
    RawStyleRange {
        offset: start,
        length: end - start,
        style: style.to_string(),
    }
}

fn decode_block(raw: RawBlock) -> Result<ContentBlock> {
    let block_type = BlockType::from_str(&raw.block_type)
        .map_err(|_| NoteError::UnknownBlockType(raw.block_type.clone()))?;

    let len = utf16_len(&raw.text);
    let mut block = ContentBlock::new(raw.key, &raw.text, block_type);
    block.depth = raw.depth;
    for range in raw.inline_style_ranges {
        let Ok(style) = InlineStyle::from_str(&range.style) else {
            log::warn!(
                "skipping unknown inline style `{}` in block {}",
                range.style,
                block.key
            );
            continue;
        };
        let start = range.offset.min(len);
        let end = range.offset.saturating_add(range.length).min(len);
        for unit in &mut block.styles[start..end] {
            unit.insert(style);
        }
    }
    Ok(block)
}
