// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Markdown-style autoformat shortcuts.
//!
//! When a space is typed on a line whose entire text is one of the trigger
//! markers below, the space is swallowed, the marker is erased and the
//! line is formatted instead:
//!
//! | Line text | Action                        |
//! |-----------|-------------------------------|
//! | `#`       | block type becomes heading 1  |
//! | `*`       | toggle bold                   |
//! | `**`      | toggle the red style          |
//! | `***`     | toggle underline              |
//!
//! Matching is on the whole line, never on a prefix. `*` followed by a
//! space fires immediately, so `**` and `***` only fire when their stars
//! are typed back to back before the space.

use crate::{BlockType, InlineStyle, RichTextEngine, TextRange};

/// Whether an input event was consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputHandling {
    /// The event was consumed; the caller must not apply its default edit.
    Handled,
    /// The caller should carry on with the default edit.
    NotHandled,
}

impl InputHandling {
    /// The string the browser editor's handler callbacks return.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Handled => "handled",
            Self::NotHandled => "not-handled",
        }
    }
}

/// The formatting applied when a trigger fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatAction {
    SetBlockType(BlockType),
    ToggleInlineStyle(InlineStyle),
}

impl FormatAction {
    pub fn apply<E: RichTextEngine>(&self, engine: &mut E) {
        match *self {
            Self::SetBlockType(block_type) => engine.set_block_type(block_type),
            Self::ToggleInlineStyle(style) => engine.toggle_inline_style(style),
        }
    }
}

/// A line text that, followed by a space, fires a [`FormatAction`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trigger {
    pub marker: &'static str,
    pub action: FormatAction,
}

pub static TRIGGERS: [Trigger; 4] = [
    Trigger {
        marker: "#",
        action: FormatAction::SetBlockType(BlockType::HeaderOne),
    },
    Trigger {
        marker: "*",
        action: FormatAction::ToggleInlineStyle(InlineStyle::Bold),
    },
    Trigger {
        marker: "**",
        action: FormatAction::ToggleInlineStyle(InlineStyle::RedLine),
    },
    Trigger {
        marker: "***",
        action: FormatAction::ToggleInlineStyle(InlineStyle::Underline),
    },
];

/// The character that fires a trigger.
pub const TRIGGER_INPUT: &str = " ";

/// Find the trigger whose marker is exactly `line_text`.
pub fn find_trigger(line_text: &str) -> Option<&'static Trigger> {
    TRIGGERS.iter().find(|t| t.marker == line_text)
}

/// Decide whether `incoming` should be inserted normally or consumed by an
/// autoformat trigger on the line holding the selection start.
///
/// When a trigger fires, the whole line text is replaced with nothing and
/// the trigger's action is applied exactly once. Nothing is modified when
/// [`InputHandling::NotHandled`] is returned.
pub fn intercept_input<E: RichTextEngine>(
    engine: &mut E,
    incoming: &str,
) -> InputHandling {
    if incoming != TRIGGER_INPUT {
        return InputHandling::NotHandled;
    }
    let line_key = engine.selection().start().block_key.clone();
    let line_text = engine.line_text(&line_key).unwrap_or_default();
    let Some(trigger) = find_trigger(&line_text) else {
        return InputHandling::NotHandled;
    };

    log::debug!(
        "autoformat trigger {:?} on block {line_key}: {:?}",
        trigger.marker,
        trigger.action
    );
    let whole_line =
        TextRange::in_block(&line_key, 0, line_text.encode_utf16().count());
    engine.replace_range(&whole_line, "");
    trigger.action.apply(engine);
    InputHandling::Handled
}
