use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SinkError;
use crate::message::MESSAGE_CAPACITY;

/// Title of a fresh Notepad document on an English system.
pub const PRIMARY_TITLE: &str = "Untitled - Notepad";
/// Same document once it has unsaved edits; Notepad prefixes the title with `*`.
pub const UNSAVED_TITLE: &str = "*Untitled - Notepad";
/// Window class of the text area inside Notepad.
pub const EDIT_CONTROL_CLASS: &str = "Edit";

/// Where and how messages are delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SinkConfig {
    /// Exact top-level window titles, tried in order.
    pub titles: Vec<String>,
    /// Class name of the child control that receives the text.
    pub control_class: String,
    /// Message buffer size in bytes, terminator slot included.
    pub capacity: usize,
    /// Ask the editor to record the insert as an undoable edit.
    pub undoable: bool,
    /// Prefix each message with the local wall-clock time.
    pub timestamp: bool,
    /// Report dropped messages through `app_log!`.
    pub diagnostics: bool,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            titles: vec![PRIMARY_TITLE.into(), UNSAVED_TITLE.into()],
            control_class: EDIT_CONTROL_CLASS.into(),
            capacity: MESSAGE_CAPACITY,
            undoable: true,
            timestamp: false,
            diagnostics: false,
        }
    }
}

impl SinkConfig {
    pub fn from_json(json: &str) -> Result<Self, SinkError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        if config.diagnostics {
            crate::app_log!(
                "[config] loaded {} titles={:?} class={} capacity={}",
                path.display(),
                config.titles,
                config.control_class,
                config.capacity
            );
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SinkError> {
        if self.titles.is_empty() {
            return Err(SinkError::Config("at least one window title is required".into()));
        }
        if self.titles.iter().any(|t| t.is_empty()) {
            return Err(SinkError::Config("window titles must not be empty".into()));
        }
        if self.control_class.is_empty() {
            return Err(SinkError::Config("control class must not be empty".into()));
        }
        if self.capacity < 2 {
            return Err(SinkError::Config(format!(
                "capacity {} leaves no room for text",
                self.capacity
            )));
        }
        Ok(())
    }
}
