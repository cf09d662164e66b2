// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! [`RichTextEngine`] implementation for [`ContentModel`].

use super::raw::RawContent;
use super::ContentModel;
use crate::{
    BlockType, InlineStyle, Result, RichTextEngine, Selection, TextRange,
};

impl RichTextEngine for ContentModel {
    fn line_text(&self, block_key: &str) -> Option<String> {
        self.block_for_key(block_key).map(|b| b.text().to_owned())
    }

    fn selection(&self) -> Selection {
        self.get_selection().clone()
    }

    fn replace_range(&mut self, range: &TextRange, text: &str) {
        ContentModel::replace_range(self, range, text);
    }

    fn set_block_type(&mut self, block_type: BlockType) {
        self.toggle_block_type(block_type);
    }

    fn toggle_inline_style(&mut self, style: InlineStyle) {
        ContentModel::toggle_inline_style(self, style);
    }

    fn serialize(&self) -> Result<String> {
        self.to_raw().to_json()
    }

    fn deserialize(blob: &str) -> Result<Self> {
        ContentModel::from_raw(RawContent::from_json(blob)?)
    }
}
