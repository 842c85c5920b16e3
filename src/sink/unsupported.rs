use crate::error::SinkError;

use super::WindowSystem;

/// Stand-in for targets without Notepad. Finds nothing, so every message is dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedWindows;

impl WindowSystem for UnsupportedWindows {
    type Handle = ();

    fn find_window(&self, _title: &str) -> Option<()> {
        None
    }

    fn find_child(&self, _parent: (), _class: &str) -> Option<()> {
        None
    }

    fn replace_selection(
        &self,
        _control: (),
        _text: &str,
        _undoable: bool,
    ) -> Result<(), SinkError> {
        Err(SinkError::Send("Unsupported platform".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{MessageSink, NotepadSink};

    #[test]
    fn test_platform_sink_is_a_silent_noop() {
        let sink: NotepadSink = NotepadSink::new();
        assert!(matches!(sink.write("hello\r\n"), Err(SinkError::WindowNotFound(_))));
        crate::notepad_log!("Message: '{}'", "hello");
    }
}
