// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Block types and inline styles.
//!
//! Both are closed enums. Their string names are only used at the edges of
//! the crate: the raw snapshot, key command names and the JS binding.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The structural type of a block.
///
/// | Variant             | Raw name                |
/// |---------------------|-------------------------|
/// | `Unstyled`          | `"unstyled"`            |
/// | `HeaderOne`         | `"header-one"`          |
/// | `UnorderedListItem` | `"unordered-list-item"` |
/// | `CodeBlock`         | `"code-block"`          |
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum BlockType {
    #[default]
    Unstyled,
    Paragraph,
    HeaderOne,
    HeaderTwo,
    HeaderThree,
    HeaderFour,
    HeaderFive,
    HeaderSix,
    UnorderedListItem,
    OrderedListItem,
    Blockquote,
    CodeBlock,
    Atomic,
}

impl BlockType {
    /// Whether pressing enter at the end of this block should start a plain
    /// block rather than continue the same type.
    pub fn resets_on_split(&self) -> bool {
        matches!(
            self,
            Self::HeaderOne
                | Self::HeaderTwo
                | Self::HeaderThree
                | Self::HeaderFour
                | Self::HeaderFive
                | Self::HeaderSix
                | Self::Blockquote
                | Self::Atomic
        )
    }
}

/// An inline style that can be carried by individual characters.
///
/// `RedLine` is the editor's custom style; its presentation comes from the
/// [`StyleMap`](crate::StyleMap).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InlineStyle {
    Bold,
    Italic,
    Underline,
    Code,
    Strikethrough,
    #[strum(serialize = "red-line")]
    #[serde(rename = "red-line")]
    RedLine,
}

/// The set of inline styles applied to a single UTF-16 code unit.
pub type StyleSet = BTreeSet<InlineStyle>;
