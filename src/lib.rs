//! Debug output into an open, untitled Notepad window.
//!
//! Open Notepad, then call [`notepad_log!`] anywhere in the program under
//! investigation; each call appends one line to the document. When no
//! matching window is open the call does nothing. Do not leave calls in
//! shipping binaries: users who happen to have Notepad open will see them.

pub mod config;
pub mod error;
pub mod logger;
pub mod message;
pub mod sink;

use std::fmt;
use std::sync::OnceLock;

pub use config::SinkConfig;
pub use error::SinkError;
pub use message::{Message, MESSAGE_CAPACITY};
pub use sink::{MessageSink, NotepadSink, WindowSystem};

/// Append `format!`-style text plus CR LF to the untitled Notepad document.
#[macro_export]
macro_rules! notepad_log {
    ($($arg:tt)*) => {
        $crate::notepad_log(format_args!($($arg)*))
    };
}

/// Function form of [`notepad_log!`]. Errors are swallowed.
pub fn notepad_log(args: fmt::Arguments<'_>) {
    let _ = default_sink().log(args);
}

fn default_sink() -> &'static NotepadSink {
    static SINK: OnceLock<NotepadSink> = OnceLock::new();
    SINK.get_or_init(NotepadSink::new)
}
