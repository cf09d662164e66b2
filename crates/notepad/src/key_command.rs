// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Named editor commands bound to keyboard shortcuts.

use std::str::FromStr;

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::{BlockType, ContentModel, InlineStyle, InputHandling};

/// Commands the host key bindings can send, by their browser names
/// (`"bold"`, `"split-block"`, `"backspace-word"`, ...).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum KeyCommand {
    Bold,
    Italic,
    Underline,
    Code,
    Strikethrough,
    Backspace,
    BackspaceWord,
    BackspaceToStartOfLine,
    Delete,
    DeleteWord,
    DeleteToEndOfBlock,
    SplitBlock,
}

impl KeyCommand {
    /// Parse a command name. Unknown names give `None`.
    pub fn parse(name: &str) -> Option<Self> {
        Self::from_str(name).ok()
    }
}

/// Run the rich-text behaviour of `command`.
///
/// - `bold`, `italic`, `underline` and `strikethrough` toggle their style.
/// - `code` toggles the code-block type when the selection is collapsed or
///   spans blocks, and the `CODE` style on a range within one block.
/// - Any backspace command at offset 0 first removes an atomic block just
///   above, otherwise resets the block type of an empty (or first) block.
/// - Any delete command at the end of a block removes an atomic block just
///   below.
///
/// Everything else is left to the caller's default edit.
pub fn handle_key_command(
    model: &mut ContentModel,
    command: KeyCommand,
) -> InputHandling {
    let handled = match command {
        KeyCommand::Bold => toggle_style(model, InlineStyle::Bold),
        KeyCommand::Italic => toggle_style(model, InlineStyle::Italic),
        KeyCommand::Underline => toggle_style(model, InlineStyle::Underline),
        KeyCommand::Strikethrough => {
            toggle_style(model, InlineStyle::Strikethrough)
        }
        KeyCommand::Code => toggle_code(model),
        KeyCommand::Backspace
        | KeyCommand::BackspaceWord
        | KeyCommand::BackspaceToStartOfLine => on_backspace(model),
        KeyCommand::Delete
        | KeyCommand::DeleteWord
        | KeyCommand::DeleteToEndOfBlock => on_delete(model),
        KeyCommand::SplitBlock => false,
    };
    if handled {
        InputHandling::Handled
    } else {
        InputHandling::NotHandled
    }
}

fn toggle_style(model: &mut ContentModel, style: InlineStyle) -> bool {
    model.toggle_inline_style(style);
    true
}

fn toggle_code(model: &mut ContentModel) -> bool {
    let selection = model.get_selection();
    if selection.is_collapsed()
        || selection.anchor.block_key != selection.focus.block_key
    {
        model.toggle_block_type(BlockType::CodeBlock);
    } else {
        model.toggle_inline_style(InlineStyle::Code);
    }
    true
}

fn on_backspace(model: &mut ContentModel) -> bool {
    let selection = model.get_selection();
    if !selection.is_collapsed() || selection.start().offset != 0 {
        return false;
    }
    let Some(idx) = model.block_index(&selection.start().block_key) else {
        return false;
    };
    if idx > 0 && model.blocks()[idx - 1].block_type() == BlockType::Atomic {
        model.remove_block_at(idx - 1);
        return true;
    }
    try_remove_block_style(model, idx)
}

fn try_remove_block_style(model: &mut ContentModel, idx: usize) -> bool {
    let blocks = model.blocks();
    let block = &blocks[idx];
    if !block.is_empty() && idx != 0 {
        return false;
    }
    if block.block_type() == BlockType::CodeBlock
        && idx > 0
        && blocks[idx - 1].block_type() == BlockType::CodeBlock
        && !blocks[idx - 1].is_empty()
    {
        return false;
    }
    if block.block_type() == BlockType::Unstyled {
        return false;
    }
    model.reset_block_type(BlockType::Unstyled);
    true
}

fn on_delete(model: &mut ContentModel) -> bool {
    let selection = model.get_selection();
    if !selection.is_collapsed() {
        return false;
    }
    let pos = selection.start();
    let Some(idx) = model.block_index(&pos.block_key) else {
        return false;
    };
    let blocks = model.blocks();
    if pos.offset < blocks[idx].len_utf16() {
        return false;
    }
    let next_is_atomic = blocks
        .get(idx + 1)
        .is_some_and(|next| next.block_type() == BlockType::Atomic);
    if !next_is_atomic {
        return false;
    }
    model.remove_block_at(idx + 1);
    true
}
