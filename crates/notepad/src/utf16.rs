// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Helpers for converting between UTF-16 code unit offsets and byte
//! offsets into Rust strings.

use unicode_segmentation::UnicodeSegmentation;

pub(crate) fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Byte index of the character starting at or after `offset` code units.
/// Offsets past the end map to `s.len()`.
pub(crate) fn byte_index(s: &str, offset: usize) -> usize {
    let mut units = 0;
    for (idx, ch) in s.char_indices() {
        if units >= offset {
            return idx;
        }
        units += ch.len_utf16();
    }
    s.len()
}

/// UTF-16 offset of the byte index `idx`.
pub(crate) fn utf16_offset(s: &str, idx: usize) -> usize {
    utf16_len(&s[..idx])
}

/// Start offset of the grapheme cluster that ends at `offset`.
pub(crate) fn prev_grapheme_start(s: &str, offset: usize) -> usize {
    let idx = byte_index(s, offset);
    s[..idx]
        .grapheme_indices(true)
        .next_back()
        .map(|(start, _)| utf16_offset(s, start))
        .unwrap_or(0)
}

/// End offset of the grapheme cluster that starts at `offset`.
pub(crate) fn next_grapheme_end(s: &str, offset: usize) -> usize {
    let idx = byte_index(s, offset);
    s[idx..]
        .graphemes(true)
        .next()
        .map(|g| utf16_offset(s, idx + g.len()))
        .unwrap_or_else(|| utf16_len(s))
}

/// Start offset of the word before `offset`, skipping whitespace between
/// the word and `offset`.
pub(crate) fn prev_word_start(s: &str, offset: usize) -> usize {
    let idx = byte_index(s, offset);
    let mut start = idx;
    for (i, segment) in s[..idx].split_word_bound_indices().rev() {
        start = i;
        if !is_blank(segment) {
            break;
        }
    }
    utf16_offset(s, start)
}

/// End offset of the word after `offset`, skipping whitespace between
/// `offset` and the word.
pub(crate) fn next_word_end(s: &str, offset: usize) -> usize {
    let idx = byte_index(s, offset);
    let mut end = idx;
    for (i, segment) in s[idx..].split_word_bound_indices() {
        end = idx + i + segment.len();
        if !is_blank(segment) {
            break;
        }
    }
    utf16_offset(s, end)
}

fn is_blank(segment: &str) -> bool {
    segment.chars().all(char::is_whitespace)
}
