#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(not(target_os = "windows"))]
pub mod unsupported;

use std::fmt;

use crate::config::SinkConfig;
use crate::error::SinkError;
use crate::message::Message;

#[cfg(target_os = "windows")]
pub type PlatformWindows = self::windows::Win32Windows;

#[cfg(not(target_os = "windows"))]
pub type PlatformWindows = self::unsupported::UnsupportedWindows;

/// Anything that accepts finished log text.
pub trait MessageSink {
    /// Deliver `text` as is. No terminator is added.
    fn write(&self, text: &str) -> Result<(), SinkError>;
}

/// The slice of a desktop windowing system needed to reach an editor's text area.
pub trait WindowSystem {
    type Handle: Copy;

    /// Top-level window whose title equals `title` exactly.
    fn find_window(&self, title: &str) -> Option<Self::Handle>;

    /// First child of `parent` with window class `class`.
    fn find_child(&self, parent: Self::Handle, class: &str) -> Option<Self::Handle>;

    /// Replace the selection (or insert at the caret) in `control`.
    fn replace_selection(
        &self,
        control: Self::Handle,
        text: &str,
        undoable: bool,
    ) -> Result<(), SinkError>;
}

/// Appends messages to an open, untitled Notepad document.
pub struct NotepadSink<W: WindowSystem = PlatformWindows> {
    windows: W,
    config: SinkConfig,
}

impl NotepadSink<PlatformWindows> {
    pub fn new() -> Self {
        Self {
            windows: PlatformWindows::default(),
            config: SinkConfig::default(),
        }
    }

    pub fn with_config(config: SinkConfig) -> Result<Self, SinkError> {
        Self::with_window_system(PlatformWindows::default(), config)
    }
}

impl Default for NotepadSink<PlatformWindows> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: WindowSystem> NotepadSink<W> {
    pub fn with_window_system(windows: W, config: SinkConfig) -> Result<Self, SinkError> {
        config.validate()?;
        Ok(Self { windows, config })
    }

    pub fn config(&self) -> &SinkConfig {
        &self.config
    }

    /// Format `args` into a bounded message and append it to the editor.
    pub fn log(&self, args: fmt::Arguments<'_>) -> Result<(), SinkError> {
        let message = self.render(args);
        let result = self.write(message.as_str());
        if let Err(e) = &result {
            if self.config.diagnostics {
                crate::app_log!("[sink] dropped {} byte message: {e}", message.len());
            }
        }
        result
    }

    fn render(&self, args: fmt::Arguments<'_>) -> Message {
        if !self.config.timestamp {
            return Message::format(self.config.capacity, args);
        }
        let prefix = format!("[{}] ", chrono::Local::now().format("%H:%M:%S%.3f"));
        Message::format_prefixed(self.config.capacity, &prefix, args)
    }

    /// Titles are tried in configured order; the first hit wins.
    fn find_target_window(&self) -> Option<W::Handle> {
        self.config
            .titles
            .iter()
            .find_map(|title| self.windows.find_window(title))
    }
}

impl<W: WindowSystem> MessageSink for NotepadSink<W> {
    fn write(&self, text: &str) -> Result<(), SinkError> {
        // No window means nothing to send to; never hand the platform a null target.
        let window = self
            .find_target_window()
            .ok_or_else(|| SinkError::WindowNotFound(self.config.titles.join(", ")))?;
        let control = self
            .windows
            .find_child(window, &self.config.control_class)
            .ok_or_else(|| SinkError::ControlNotFound(self.config.control_class.clone()))?;
        self.windows
            .replace_selection(control, text, self.config.undoable)
    }
}
