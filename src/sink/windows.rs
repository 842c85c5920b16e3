use std::ffi::OsStr;
use std::iter::once;
use std::os::windows::ffi::OsStrExt;

use windows::core::PCWSTR;
use windows::Win32::Foundation::{HWND, LPARAM, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    FindWindowExW, FindWindowW, IsWindow, SendMessageW,
};

use crate::error::SinkError;

use super::WindowSystem;

// EM_REPLACESEL = 0x00C2 (winuser.h)
const EM_REPLACESEL: u32 = 0x00C2;

/// Win32 backend. Only the wide-character API is used so titles and message
/// text are never reinterpreted through the ANSI code page.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Windows;

impl WindowSystem for Win32Windows {
    type Handle = HWND;

    fn find_window(&self, title: &str) -> Option<HWND> {
        let title = to_wide(title);
        let hwnd = unsafe { FindWindowW(PCWSTR::null(), PCWSTR::from_raw(title.as_ptr())) };
        hwnd.ok().filter(|h| !h.is_invalid())
    }

    fn find_child(&self, parent: HWND, class: &str) -> Option<HWND> {
        let class = to_wide(class);
        let hwnd = unsafe {
            FindWindowExW(
                parent,
                HWND::default(),
                PCWSTR::from_raw(class.as_ptr()),
                PCWSTR::null(),
            )
        };
        hwnd.ok().filter(|h| !h.is_invalid())
    }

    fn replace_selection(
        &self,
        control: HWND,
        text: &str,
        undoable: bool,
    ) -> Result<(), SinkError> {
        // Notepad may have been closed between lookup and send.
        if !unsafe { IsWindow(control) }.as_bool() {
            return Err(SinkError::Send("Target control closed before send".into()));
        }
        let payload = to_wide(text);
        unsafe {
            SendMessageW(
                control,
                EM_REPLACESEL,
                WPARAM(usize::from(undoable)),
                LPARAM(payload.as_ptr() as isize),
            );
        }
        Ok(())
    }
}

/// NUL-terminated UTF-16. An interior NUL ends the string early, as it would
/// for any C string consumer.
fn to_wide(s: &str) -> Vec<u16> {
    OsStr::new(s)
        .encode_wide()
        .take_while(|&unit| unit != 0)
        .chain(once(0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_wide_is_nul_terminated() {
        let wide = to_wide("Untitled - Notepad");
        assert_eq!(wide.len(), "Untitled - Notepad".len() + 1);
        assert_eq!(wide.last(), Some(&0));
    }

    #[test]
    fn test_to_wide_stops_at_interior_nul() {
        assert_eq!(to_wide("ab\0cd"), vec![u16::from(b'a'), u16::from(b'b'), 0]);
    }

    #[test]
    fn test_missing_window_is_none() {
        let windows = Win32Windows;
        assert!(windows
            .find_window("notepad-log test window that does not exist")
            .is_none());
    }
}
