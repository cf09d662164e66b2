// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use notepad::{KeyValueStore, NoteError, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Storage;

/// The browser's `window.localStorage`.
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self> {
        let storage = web_sys::window()
            .ok_or_else(|| storage_error("", "no global window"))?
            .local_storage()
            .map_err(|e| js_storage_error("", e))?
            .ok_or_else(|| storage_error("", "localStorage is unavailable"))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| js_storage_error(key, e))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| js_storage_error(key, e))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| js_storage_error(key, e))
    }
}

fn storage_error(key: &str, message: &str) -> NoteError {
    NoteError::Storage {
        key: key.to_owned(),
        message: message.to_owned(),
    }
}

// Quota errors arrive as DOMException values
fn js_storage_error(key: &str, value: JsValue) -> NoteError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"));
    storage_error(key, &message)
}
