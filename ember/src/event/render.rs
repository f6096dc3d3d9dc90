//! Bounded rendering of events into caller-supplied buffers.
//!
//! Output is length-delimited UTF-8: at most `buffer.len()` bytes are
//! written, a character is never split, and the returned count is the number
//! of bytes actually written. A count shorter than the event's full
//! `Display` output is the only sign of truncation.

use std::fmt::{self, Write};

use crate::event::Event;

const FALLBACK_NAME: &str = "Event";

/// Renders `event` into `buffer`. Returns 0 without writing when there is no
/// buffer or it has no room.
pub fn render(event: &dyn Event, buffer: Option<&mut [u8]>) -> usize {
    match buffer {
        Some(buffer) => render_bounded(event, buffer),
        None => 0,
    }
}

pub fn render_bounded<T: fmt::Display + ?Sized>(value: &T, buffer: &mut [u8]) -> usize {
    if buffer.is_empty() {
        return 0;
    }

    let mut writer = BoundedWriter::new(buffer);
    // An error here only means the output was cut short.
    write!(writer, "{}", value).ok();
    writer.written()
}

/// The shared renderer for variants without a payload: just the name.
pub fn write_default(f: &mut fmt::Formatter, name: &str) -> fmt::Result {
    f.write_str(if name.is_empty() { FALLBACK_NAME } else { name })
}

struct BoundedWriter<'a> {
    buffer: &'a mut [u8],
    written: usize,
}

impl<'a> BoundedWriter<'a> {
    fn new(buffer: &'a mut [u8]) -> Self {
        Self {
            buffer,
            written: 0,
        }
    }

    fn written(&self) -> usize {
        self.written
    }
}

impl Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let remaining = self.buffer.len() - self.written;

        let mut length = s.len().min(remaining);
        while !s.is_char_boundary(length) {
            length -= 1;
        }

        self.buffer[self.written..self.written + length].copy_from_slice(&s.as_bytes()[..length]);
        self.written += length;

        if length < s.len() {
            Err(fmt::Error)
        } else {
            Ok(())
        }
    }
}
