//! Text output.
//!
//! Each call writes and flushes before returning so that text emitted before a fault is
//! not lost in a buffer. Write and flush errors are discarded.

use std::ffi::{c_char, CStr};
use std::io::{self, Write};

pub fn write_text<W: Write + ?Sized>(out: &mut W, text: &[u8]) {
    if !text.is_empty() {
        let _ = out.write_all(text);
    }
    let _ = out.flush();
}

pub fn write_line<W: Write + ?Sized>(out: &mut W, text: &[u8]) {
    let _ = out.write_all(text);
    let _ = out.write_all(b"\n");
    let _ = out.flush();
}

pub fn write_newline<W: Write + ?Sized>(out: &mut W) {
    write_text(out, b"\n");
}

/// Bytes of a NUL-terminated string, without the terminator. Null reads as empty.
///
/// `s` must be null or point to a NUL-terminated string that outlives `'a`.
pub unsafe fn c_str_bytes<'a>(s: *const c_char) -> &'a [u8] {
    if s.is_null() {
        return &[];
    }
    CStr::from_ptr(s).to_bytes()
}

pub fn stdout_text(text: &[u8]) {
    write_text(&mut io::stdout().lock(), text);
}

pub fn stdout_line(text: &[u8]) {
    write_line(&mut io::stdout().lock(), text);
}

pub fn stdout_newline() {
    write_newline(&mut io::stdout().lock());
}
