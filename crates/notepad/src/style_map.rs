// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Presentation of inline styles as CSS declarations.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{InlineStyle, StyleSet};

static DEFAULT_STYLE_MAP: Lazy<StyleMap> = Lazy::new(|| {
    let mut map = StyleMap::empty();
    map.insert(InlineStyle::Bold, [("font-weight", "bold")]);
    map.insert(InlineStyle::Italic, [("font-style", "italic")]);
    map.insert(InlineStyle::Underline, [("text-decoration", "underline")]);
    map.insert(
        InlineStyle::Code,
        [("font-family", "monospace"), ("word-wrap", "break-word")],
    );
    map.insert(
        InlineStyle::Strikethrough,
        [("text-decoration", "line-through")],
    );
    map.insert(
        InlineStyle::RedLine,
        [("color", "red"), ("text-decoration", "none")],
    );
    map
});

/// Maps each [`InlineStyle`] to the CSS properties used to render it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    entries: BTreeMap<InlineStyle, BTreeMap<String, String>>,
}

impl StyleMap {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replace the declarations for `style`.
    pub fn insert<'a>(
        &mut self,
        style: InlineStyle,
        declarations: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) {
        self.entries.insert(
            style,
            declarations
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        );
    }

    /// Overlay `other` on top of this map. Styles present in `other`
    /// replace their entry entirely.
    pub fn merged_with(&self, other: &StyleMap) -> StyleMap {
        let mut merged = self.clone();
        for (style, decls) in &other.entries {
            merged.entries.insert(*style, decls.clone());
        }
        merged
    }

    pub fn declarations(
        &self,
        style: InlineStyle,
    ) -> Option<&BTreeMap<String, String>> {
        self.entries.get(&style)
    }

    /// The inline `style` attribute value for a set of styles, or `None`
    /// when no style in the set has any declarations.
    ///
    /// Styles are combined in [`InlineStyle`] order, so a later style wins
    /// when two styles set the same property.
    pub fn css_for(&self, styles: &StyleSet) -> Option<String> {
        let mut combined: BTreeMap<&str, &str> = BTreeMap::new();
        for style in styles {
            if let Some(decls) = self.entries.get(style) {
                for (prop, value) in decls {
                    combined.insert(prop.as_str(), value.as_str());
                }
            }
        }
        if combined.is_empty() {
            return None;
        }
        Some(
            combined
                .into_iter()
                .map(|(p, v)| format!("{p}: {v}"))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

/// The built-in style map, including the custom red style.
pub fn default_style_map() -> &'static StyleMap {
    &DEFAULT_STYLE_MAP
}
