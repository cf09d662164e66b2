// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! HTML rendering of the document for display.
//!
//! Consecutive list items of the same kind are wrapped in a single
//! `<ul>`/`<ol>`. Inline styles become `<span style="...">` using the
//! supplied [`StyleMap`].

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::block_projection::BlockProjection;
use super::ContentModel;
use crate::{BlockType, StyleMap};

impl ContentModel {
    pub fn to_html(&self, style_map: &StyleMap) -> String {
        let mut out = String::new();
        let mut open_list: Option<&'static str> = None;

        for block in self.block_projections() {
            let list_tag = list_tag(block.block_type);
            if open_list != list_tag {
                if let Some(tag) = open_list {
                    out.push_str(&format!("</{tag}>"));
                }
                if let Some(tag) = list_tag {
                    out.push_str(&format!("<{tag}>"));
                }
                open_list = list_tag;
            }
            render_block(&block, style_map, &mut out);
        }
        if let Some(tag) = open_list {
            out.push_str(&format!("</{tag}>"));
        }
        out
    }
}

fn list_tag(block_type: BlockType) -> Option<&'static str> {
    match block_type {
        BlockType::UnorderedListItem => Some("ul"),
        BlockType::OrderedListItem => Some("ol"),
        _ => None,
    }
}

fn block_tag(block_type: BlockType) -> &'static str {
    match block_type {
        BlockType::Unstyled | BlockType::Paragraph => "p",
        BlockType::HeaderOne => "h1",
        BlockType::HeaderTwo => "h2",
        BlockType::HeaderThree => "h3",
        BlockType::HeaderFour => "h4",
        BlockType::HeaderFive => "h5",
        BlockType::HeaderSix => "h6",
        BlockType::UnorderedListItem | BlockType::OrderedListItem => "li",
        BlockType::Blockquote => "blockquote",
        BlockType::CodeBlock => "pre",
        BlockType::Atomic => "figure",
    }
}

fn render_block(block: &BlockProjection, style_map: &StyleMap, out: &mut String) {
    let tag = block_tag(block.block_type);
    out.push_str(&format!("<{tag}>"));
    for run in &block.runs {
        let text = encode_text(&run.text);
        match style_map.css_for(&run.styles) {
            Some(css) => out.push_str(&format!(
                "<span style=\"{}\">{text}</span>",
                encode_double_quoted_attribute(&css)
            )),
            None => out.push_str(&text),
        }
    }
    out.push_str(&format!("</{tag}>"));
}
