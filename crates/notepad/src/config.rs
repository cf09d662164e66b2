// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Editor configuration.
//!
//! Every field has a default, so a config file only needs to name what it
//! changes:
//!
//! ```json
//! { "storage_key": "notes", "autosave": false,
//!   "custom_styles": { "red-line": { "color": "crimson" } } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{default_style_map, NoteError, Result, StyleMap};

/// Storage key the browser editor has always used.
pub const DEFAULT_STORAGE_KEY: &str = "draftEditorContent";

pub const DEFAULT_SAVE_MESSAGE: &str = "Content saved!";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Key the document snapshot is stored under.
    pub storage_key: String,
    /// Persist after every change, not only on explicit save.
    pub autosave: bool,
    /// Confirmation shown after an explicit save.
    pub save_message: String,
    /// Per-style overrides layered on the built-in style map.
    pub custom_styles: StyleMap,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            autosave: true,
            save_message: DEFAULT_SAVE_MESSAGE.to_owned(),
            custom_styles: StyleMap::empty(),
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| NoteError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file. A missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)
            .map_err(|e| NoteError::io(path, e))?;
        Self::from_json(&json)
    }

    /// The built-in style map with this config's overrides applied.
    pub fn style_map(&self) -> StyleMap {
        default_style_map().merged_with(&self.custom_styles)
    }

    fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(NoteError::Config("storage_key must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InlineStyle, StyleSet};

    #[test]
    fn defaults_match_the_browser_editor() {
        let config = EditorConfig::default();
        assert_eq!(config.storage_key, "draftEditorContent");
        assert!(config.autosave);
        assert_eq!(config.save_message, "Content saved!");
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = EditorConfig::from_json(r#"{"autosave": false}"#).unwrap();
        assert!(!config.autosave);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn custom_styles_override_built_ins() {
        let config = EditorConfig::from_json(
            r#"{"custom_styles": {"red-line": {"color": "crimson"}}}"#,
        )
        .unwrap();
        let css = config
            .style_map()
            .css_for(&StyleSet::from([InlineStyle::RedLine]));
        assert_eq!(css.as_deref(), Some("color: crimson"));
    }

    #[test]
    fn empty_storage_key_is_rejected() {
        let err = EditorConfig::from_json(r#"{"storage_key": " "}"#).unwrap_err();
        assert!(matches!(err, NoteError::Config(_)));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = EditorConfig::from_json("{").unwrap_err();
        assert!(matches!(err, NoteError::Config(_)));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = EditorConfig::load(&dir.path().join("none.json")).unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn config_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notepad.json");
        std::fs::write(&path, r#"{"storage_key": "notes"}"#).unwrap();
        let config = EditorConfig::load(&path).unwrap();
        assert_eq!(config.storage_key, "notes");
    }
}
