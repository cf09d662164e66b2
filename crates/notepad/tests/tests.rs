// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

#![cfg(not(target_arch = "wasm32"))]

use indoc::indoc;
use notepad::{
    intercept_input, BlockType, ContentModel, EditorConfig, FileStore,
    InlineStyle, InputHandling, KeyValueStore, MemoryStore, NoteEditor,
    RichTextEngine, StyleSet,
};
use speculoos::prelude::*;

fn model_with_line(text: &str) -> ContentModel {
    let mut model = ContentModel::new();
    model.insert_text(text);
    model
}

fn type_chars<S: KeyValueStore>(editor: &mut NoteEditor<S>, text: &str) {
    for ch in text.chars() {
        editor.insert_text(&ch.to_string()).unwrap();
    }
}

#[test]
fn hash_then_space_becomes_heading() {
    let mut model = model_with_line("#");
    let handling = intercept_input(&mut model, " ");
    assert_eq!(handling, InputHandling::Handled);
    assert_that(&model.current_block().text()).is_equal_to("");
    assert_eq!(model.current_block().block_type(), BlockType::HeaderOne);
}

#[test]
fn star_then_space_toggles_bold() {
    let mut model = model_with_line("*");
    assert_eq!(intercept_input(&mut model, " "), InputHandling::Handled);
    assert_that(&model.current_block().text()).is_equal_to("");
    assert_eq!(
        model.current_inline_style(),
        StyleSet::from([InlineStyle::Bold])
    );
}

#[test]
fn double_star_then_space_toggles_red() {
    let mut model = model_with_line("**");
    assert_eq!(intercept_input(&mut model, " "), InputHandling::Handled);
    assert_that(&model.current_block().text()).is_equal_to("");
    assert_eq!(
        model.current_inline_style(),
        StyleSet::from([InlineStyle::RedLine])
    );
}

#[test]
fn ordinary_line_is_left_for_normal_insertion() {
    let mut model = model_with_line("hello");
    assert_eq!(intercept_input(&mut model, " "), InputHandling::NotHandled);
    assert_that(&model.current_block().text()).is_equal_to("hello");
}

#[test]
fn marker_followed_by_text_never_matches() {
    for line in ["# ", "#a", "* x", "****", " #"] {
        let mut model = model_with_line(line);
        assert_eq!(
            intercept_input(&mut model, " "),
            InputHandling::NotHandled,
            "line {line:?}"
        );
        assert_that(&model.current_block().text()).is_equal_to(line);
    }
}

#[test]
fn heading_survives_serialize_round_trip() {
    let mut model = model_with_line("Shopping");
    model.toggle_block_type(BlockType::HeaderOne);

    let blob = model.serialize().unwrap();
    let restored = ContentModel::deserialize(&blob).unwrap();

    assert_eq!(restored.blocks().len(), 1);
    let block = restored.first_block();
    assert_eq!(block.block_type(), BlockType::HeaderOne);
    assert_eq!(block.text(), "Shopping");
    assert_eq!(block.key(), model.first_block().key());
}

#[test]
fn styles_survive_serialize_round_trip() {
    let mut model = ContentModel::new();
    model.toggle_inline_style(InlineStyle::RedLine);
    model.insert_text("red");
    model.toggle_inline_style(InlineStyle::RedLine);
    model.insert_text(" plain");

    let restored =
        ContentModel::deserialize(&model.serialize().unwrap()).unwrap();
    assert_eq!(restored.block_projections(), model.block_projections());
}

#[test]
fn browser_snapshot_loads() {
    let blob = indoc! {r#"
        {
          "blocks": [
            {
              "key": "9u7fq",
              "text": "Groceries",
              "type": "header-one",
              "depth": 0,
              "inlineStyleRanges": [],
              "entityRanges": [],
              "data": {}
            },
            {
              "key": "a1b2c",
              "text": "milk and eggs",
              "type": "unstyled",
              "depth": 0,
              "inlineStyleRanges": [
                { "offset": 0, "length": 4, "style": "red-line" },
                { "offset": 9, "length": 4, "style": "BOLD" }
              ],
              "entityRanges": [],
              "data": {}
            }
          ],
          "entityMap": {}
        }
    "#};
    let model = ContentModel::deserialize(blob).unwrap();
    assert_eq!(model.blocks().len(), 2);
    assert_eq!(model.blocks()[0].block_type(), BlockType::HeaderOne);
    let second = &model.blocks()[1];
    assert!(second.style_at(0).contains(&InlineStyle::RedLine));
    assert!(second.style_at(5).is_empty());
    assert!(second.style_at(10).contains(&InlineStyle::Bold));
}

#[test]
fn typed_note_is_restored_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    let mut editor = NoteEditor::new(store, EditorConfig::default());

    type_chars(&mut editor, "# Plan");
    editor.enter().unwrap();
    type_chars(&mut editor, "** urgent");

    let reopened = FileStore::open(dir.path()).unwrap();
    let editor = NoteEditor::load(reopened, EditorConfig::default()).unwrap();
    let blocks = editor.model().blocks();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].block_type(), BlockType::HeaderOne);
    assert_eq!(blocks[0].text(), "Plan");
    assert_eq!(blocks[1].block_type(), BlockType::Unstyled);
    assert_eq!(blocks[1].text(), "urgent");
    assert!(blocks[1].style_at(0).contains(&InlineStyle::RedLine));
    assert_eq!(
        editor.to_html(),
        "<h1>Plan</h1><p><span style=\"color: red; \
         text-decoration: none\">urgent</span></p>"
    );
}

#[test]
fn explicit_save_reports_configured_message() {
    let config = EditorConfig::from_json(indoc! {r#"
        {
          "storage_key": "notes",
          "autosave": false,
          "save_message": "Saved."
        }
    "#})
    .unwrap();
    let mut editor = NoteEditor::new(MemoryStore::new(), config);
    type_chars(&mut editor, "*** done");
    assert_eq!(editor.store().write_count(), 0);

    let confirmation = editor.save().unwrap();
    assert_eq!(confirmation.message, "Saved.");
    assert_that(&editor.store().get("notes").unwrap()).is_some();
}

#[test]
fn unhandled_input_changes_nothing() {
    let mut model = model_with_line("notes");
    let before = model.serialize().unwrap();
    for input in ["a", "  ", "\n", ""] {
        assert_eq!(intercept_input(&mut model, input), InputHandling::NotHandled);
    }
    assert_eq!(model.serialize().unwrap(), before);
}
