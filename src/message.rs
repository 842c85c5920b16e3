use std::fmt;

/// Buffer size of a single log message, in bytes.
pub const MESSAGE_CAPACITY: usize = 1000;

pub const LINE_TERMINATOR: &str = "\r\n";

/// A bounded log line. Content beyond the capacity is dropped silently.
///
/// One byte of the capacity is held back as the string terminator slot, so at
/// most `capacity - 1` bytes of text are kept. Truncation never splits a UTF-8
/// character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    buf: String,
    limit: usize,
    truncated: bool,
}

impl Message {
    pub fn new(capacity: usize) -> Self {
        let limit = capacity.saturating_sub(1);
        Self {
            buf: String::with_capacity(limit),
            limit,
            truncated: false,
        }
    }

    /// Render `args` followed by CR LF, both subject to truncation.
    pub fn format(capacity: usize, args: fmt::Arguments<'_>) -> Self {
        Self::format_prefixed(capacity, "", args)
    }

    /// Like [`Message::format`], with `prefix` written first. The prefix takes
    /// its share of the capacity before the formatted text does.
    pub fn format_prefixed(capacity: usize, prefix: &str, args: fmt::Arguments<'_>) -> Self {
        let mut message = Self::new(capacity);
        message.push_truncating(prefix);
        let _ = fmt::Write::write_fmt(&mut message, args);
        message.terminate();
        message
    }

    /// Append as much of CR LF as still fits.
    ///
    /// Unlike formatted text this is attempted even after truncation, so a
    /// buffer that stopped short of the limit at a character boundary still
    /// gets its line break.
    pub fn terminate(&mut self) {
        let room = self.remaining();
        let end = LINE_TERMINATOR.len().min(room);
        self.buf.push_str(&LINE_TERMINATOR[..end]);
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Whether any formatted text was dropped.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    fn remaining(&self) -> usize {
        self.limit - self.buf.len()
    }

    fn push_truncating(&mut self, text: &str) {
        if self.truncated {
            return;
        }
        let room = self.remaining();
        if text.len() <= room {
            self.buf.push_str(text);
            return;
        }
        let mut end = room;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        self.buf.push_str(&text[..end]);
        self.truncated = true;
    }
}

impl fmt::Write for Message {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_truncating(s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_message_gets_crlf() {
        let msg = Message::format(MESSAGE_CAPACITY, format_args!("Message: '{}'", "hello"));
        assert_eq!(msg.as_str(), "Message: 'hello'\r\n");
        assert_eq!(msg.len(), 18);
        // Plus the terminator slot, the C buffer would hold 19 bytes.
        assert_eq!(msg.len() + 1, 19);
        assert!(!msg.is_truncated());
    }

    #[test]
    fn test_oversized_message_is_cut_at_capacity() {
        let long = "x".repeat(5000);
        let msg = Message::format(MESSAGE_CAPACITY, format_args!("{long}"));
        assert_eq!(msg.len(), MESSAGE_CAPACITY - 1);
        assert!(msg.is_truncated());
        assert!(msg.as_str().bytes().all(|b| b == b'x'));
    }

    #[test]
    fn test_999_chars_leaves_no_room_for_terminator() {
        let text = "a".repeat(999);
        let msg = Message::format(MESSAGE_CAPACITY, format_args!("{text}"));
        assert_eq!(msg.len(), 999);
        assert!(!msg.as_str().ends_with('\r'));
        assert!(!msg.as_str().ends_with('\n'));
    }

    #[test]
    fn test_998_chars_keeps_only_carriage_return() {
        let text = "a".repeat(998);
        let msg = Message::format(MESSAGE_CAPACITY, format_args!("{text}"));
        assert_eq!(msg.len(), 999);
        assert!(msg.as_str().ends_with("a\r"));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // 4 usable bytes, "é" is two bytes wide
        let msg = Message::format(5, format_args!("aaaé"));
        assert!(msg.is_truncated());
        assert_eq!(msg.as_str(), "aaa\r");
    }

    #[test]
    fn test_pieces_after_truncation_are_dropped() {
        let mut msg = Message::new(6);
        let _ = fmt::Write::write_str(&mut msg, "abcdef");
        let _ = fmt::Write::write_str(&mut msg, "z");
        assert_eq!(msg.as_str(), "abcde");
    }

    #[test]
    fn test_prefix_is_written_before_text() {
        let msg = Message::format_prefixed(MESSAGE_CAPACITY, "[t] ", format_args!("{}", 42));
        assert_eq!(msg.as_str(), "[t] 42\r\n");
    }

    #[test]
    fn test_prefix_counts_toward_capacity() {
        let msg = Message::format_prefixed(8, "[t] ", format_args!("abcdef"));
        assert_eq!(msg.as_str(), "[t] abc");
        assert!(msg.is_truncated());
    }

    #[test]
    fn test_tiny_capacity_does_not_panic() {
        let msg = Message::format(0, format_args!("anything"));
        assert!(msg.is_empty());
        let msg = Message::format(1, format_args!("anything"));
        assert!(msg.is_empty());
    }
}
