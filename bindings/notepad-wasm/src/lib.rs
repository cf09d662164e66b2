// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! JavaScript bindings for the notepad editor model.
//!
//! The host page owns the `contenteditable` element and forwards its
//! `beforeinput` and key-command events here; the model persists itself to
//! `localStorage`.

mod local_storage;

use notepad::{EditorConfig, KeyValueStore, NoteError, Position};
use wasm_bindgen::prelude::*;

pub use crate::local_storage::LocalStorage;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
}

#[wasm_bindgen]
pub struct NoteEditor {
    inner: notepad::NoteEditor<LocalStorage>,
}

#[wasm_bindgen]
impl NoteEditor {
    /// Open the editor on `localStorage`, restoring any saved note.
    /// `config_json` may be omitted to use the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<NoteEditor, JsError> {
        let config = match config_json {
            Some(json) => EditorConfig::from_json(&json).map_err(to_js)?,
            None => EditorConfig::default(),
        };
        let store = LocalStorage::open().map_err(to_js)?;
        let inner = notepad::NoteEditor::load(store, config).map_err(to_js)?;
        log::debug!("note editor ready");
        Ok(Self { inner })
    }

    /// Returns `"handled"` when the input was consumed by an autoformat
    /// trigger, otherwise `"not-handled"`.
    #[wasm_bindgen(js_name = handleBeforeInput)]
    pub fn handle_before_input(&mut self, text: &str) -> Result<String, JsError> {
        let handling = self.inner.handle_before_input(text).map_err(to_js)?;
        Ok(handling.as_str().to_owned())
    }

    #[wasm_bindgen(js_name = handleKeyCommand)]
    pub fn handle_key_command(&mut self, command: &str) -> Result<String, JsError> {
        let handling = self.inner.handle_key_command(command).map_err(to_js)?;
        Ok(handling.as_str().to_owned())
    }

    #[wasm_bindgen(js_name = insertText)]
    pub fn insert_text(&mut self, text: &str) -> Result<(), JsError> {
        self.inner.insert_text(text).map_err(to_js)
    }

    pub fn backspace(&mut self) -> Result<(), JsError> {
        self.inner.backspace().map_err(to_js)
    }

    pub fn delete(&mut self) -> Result<(), JsError> {
        self.inner.delete().map_err(to_js)
    }

    pub fn enter(&mut self) -> Result<(), JsError> {
        self.inner.enter().map_err(to_js)
    }

    /// Offsets are UTF-16 code units within the keyed block.
    pub fn select(
        &mut self,
        anchor_key: &str,
        anchor_offset: usize,
        focus_key: &str,
        focus_offset: usize,
    ) {
        self.inner.select(
            Position::new(anchor_key, anchor_offset),
            Position::new(focus_key, focus_offset),
        );
    }

    /// Save now and return the confirmation message to show.
    pub fn save(&mut self) -> Result<String, JsError> {
        let confirmation = self.inner.save().map_err(to_js)?;
        Ok(confirmation.message)
    }

    /// Forget the stored note. The open document is kept.
    #[wasm_bindgen(js_name = clearStorage)]
    pub fn clear_storage(&mut self) -> Result<(), JsError> {
        let key = self.inner.config().storage_key.clone();
        let mut store = LocalStorage::open().map_err(to_js)?;
        store.remove(&key).map_err(to_js)
    }

    #[wasm_bindgen(js_name = toHtml)]
    pub fn to_html(&self) -> String {
        self.inner.to_html()
    }

    #[wasm_bindgen(js_name = toRaw)]
    pub fn to_raw(&self) -> Result<String, JsError> {
        self.inner.model().to_raw().to_json().map_err(to_js)
    }

    #[wasm_bindgen(js_name = plainText)]
    pub fn plain_text(&self) -> String {
        self.inner.plain_text()
    }
}

fn to_js(err: NoteError) -> JsError {
    JsError::new(&err.to_string())
}
