// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! The note editor application state.
//!
//! [`NoteEditor`] owns the one document and the store it persists to. Host
//! UIs drive it with input events; each event first goes through the
//! autoformat or key-command hook and, if the hook does not consume it,
//! the default edit is applied. Every change is written back to the store
//! when autosave is on.

use log::{debug, info};

use crate::autoformat::intercept_input;
use crate::key_command::handle_key_command;
use crate::{
    ContentModel, EditorConfig, InputHandling, KeyCommand, KeyValueStore,
    Position, Result, RichTextEngine, StyleMap,
};

/// Returned by an explicit save.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveConfirmation {
    pub storage_key: String,
    pub bytes_written: usize,
    pub message: String,
}

pub struct NoteEditor<S: KeyValueStore> {
    model: ContentModel,
    store: S,
    config: EditorConfig,
    style_map: StyleMap,
}

impl<S: KeyValueStore> NoteEditor<S> {
    /// Start with an empty document, ignoring anything already stored.
    pub fn new(store: S, config: EditorConfig) -> Self {
        let style_map = config.style_map();
        Self {
            model: ContentModel::new(),
            store,
            config,
            style_map,
        }
    }

    /// Restore the document stored under the configured key, or start
    /// empty when nothing (or an empty string) is stored. A corrupt
    /// snapshot is an error.
    pub fn load(store: S, config: EditorConfig) -> Result<Self> {
        let mut editor = Self::new(store, config);
        let stored = editor
            .store
            .get(&editor.config.storage_key)?
            .filter(|blob| !blob.is_empty());
        if let Some(blob) = stored {
            editor.model = ContentModel::deserialize(&blob)?;
            info!(
                "restored note from `{}` ({} blocks)",
                editor.config.storage_key,
                editor.model.blocks().len()
            );
        } else {
            debug!("nothing stored under `{}`", editor.config.storage_key);
        }
        Ok(editor)
    }

    pub fn model(&self) -> &ContentModel {
        &self.model
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Give the store back, e.g. to reopen the editor on it.
    pub fn into_store(self) -> S {
        self.store
    }

    // -----------------------------------------------------------------------
    // Hooks
    // -----------------------------------------------------------------------

    /// The before-input hook on its own: runs the autoformat triggers and
    /// reports whether `text` was consumed. The caller inserts `text` itself
    /// on [`InputHandling::NotHandled`].
    pub fn handle_before_input(&mut self, text: &str) -> Result<InputHandling> {
        let handling = intercept_input(&mut self.model, text);
        if handling == InputHandling::Handled {
            self.changed()?;
        }
        Ok(handling)
    }

    /// The key-command hook on its own, by command name. Unknown commands
    /// are not handled.
    pub fn handle_key_command(&mut self, name: &str) -> Result<InputHandling> {
        let Some(command) = KeyCommand::parse(name) else {
            debug!("ignoring unknown key command `{name}`");
            return Ok(InputHandling::NotHandled);
        };
        let handling = handle_key_command(&mut self.model, command);
        if handling == InputHandling::Handled {
            self.changed()?;
        }
        Ok(handling)
    }

    // -----------------------------------------------------------------------
    // Input events (hook, then default edit)
    // -----------------------------------------------------------------------

    /// Type `text` at the cursor.
    pub fn insert_text(&mut self, text: &str) -> Result<()> {
        if intercept_input(&mut self.model, text) == InputHandling::NotHandled {
            self.model.insert_text(text);
        }
        self.changed()
    }

    /// Run a key command, falling back to its default edit.
    pub fn key_command(&mut self, command: KeyCommand) -> Result<()> {
        if handle_key_command(&mut self.model, command) == InputHandling::NotHandled
        {
            match command {
                KeyCommand::Backspace => self.model.backspace(),
                KeyCommand::BackspaceWord => self.model.backspace_word(),
                KeyCommand::BackspaceToStartOfLine => {
                    self.model.backspace_to_start_of_line()
                }
                KeyCommand::Delete => self.model.delete(),
                KeyCommand::DeleteWord => self.model.delete_word(),
                KeyCommand::DeleteToEndOfBlock => {
                    self.model.delete_to_end_of_block()
                }
                KeyCommand::SplitBlock => self.model.enter(),
                // Style commands are always handled by the hook
                KeyCommand::Bold
                | KeyCommand::Italic
                | KeyCommand::Underline
                | KeyCommand::Code
                | KeyCommand::Strikethrough => return Ok(()),
            }
        }
        self.changed()
    }

    pub fn backspace(&mut self) -> Result<()> {
        self.key_command(KeyCommand::Backspace)
    }

    pub fn delete(&mut self) -> Result<()> {
        self.key_command(KeyCommand::Delete)
    }

    pub fn enter(&mut self) -> Result<()> {
        self.key_command(KeyCommand::SplitBlock)
    }

    /// Move the selection. Selection changes are not persisted.
    pub fn select(&mut self, anchor: Position, focus: Position) {
        self.model.select(anchor, focus);
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Write the document now, regardless of autosave.
    pub fn save(&mut self) -> Result<SaveConfirmation> {
        let bytes_written = self.persist()?;
        info!(
            "saved note to `{}` ({bytes_written} bytes)",
            self.config.storage_key
        );
        Ok(SaveConfirmation {
            storage_key: self.config.storage_key.clone(),
            bytes_written,
            message: self.config.save_message.clone(),
        })
    }

    fn changed(&mut self) -> Result<()> {
        if self.config.autosave {
            self.persist()?;
        }
        Ok(())
    }

    fn persist(&mut self) -> Result<usize> {
        let blob = self.model.serialize()?;
        self.store.set(&self.config.storage_key, &blob)?;
        debug!("persisted {} bytes", blob.len());
        Ok(blob.len())
    }

    // -----------------------------------------------------------------------
    // Output
    // -----------------------------------------------------------------------

    pub fn to_html(&self) -> String {
        self.model.to_html(&self.style_map)
    }

    pub fn plain_text(&self) -> String {
        self.model.plain_text()
    }
}
