// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Block-based document model.
//!
//! This module provides [`ContentModel`], the crate's implementation of
//! [`RichTextEngine`](crate::RichTextEngine). A document is a list of
//! blocks; each block stores its text, its block type and one inline style
//! set per UTF-16 code unit. Toggling a style with a collapsed cursor
//! records a pending override that the next insertion consumes.

mod base;
mod block_projection;
mod formatting;
mod html;
mod raw;
mod selection;
mod text_ops;
mod trait_impl;

pub use base::{ContentBlock, ContentModel};
pub use block_projection::{BlockProjection, StyledRun};
pub use raw::{RawBlock, RawContent, RawStyleRange};
pub use selection::{Position, Selection, TextRange};
