//! Character sources feeding the cursor.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Sequential character supply. `None` means the source is exhausted.
pub trait CharSource {
    fn read_char(&mut self) -> Option<char>;
}

impl<I: Iterator<Item = char>> CharSource for I {
    fn read_char(&mut self) -> Option<char> {
        self.next()
    }
}

/// Characters decoded one at a time from a buffered byte stream, usually a
/// named file.
///
/// Bytes that are not valid UTF-8 come out as `U+FFFD`, so they are still
/// scanned (and skipped inside comments). A read failure is logged and ends
/// the stream.
#[derive(Debug)]
pub struct FileSource<R = BufReader<File>> {
    reader: R,
    done: bool,
}

impl FileSource {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path.as_ref())?;
        log::debug!("opened {}", path.as_ref().display());
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> FileSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }

    fn peek_byte(&mut self) -> Option<u8> {
        if self.done {
            return None;
        }
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return buf.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    log::warn!("source read failed: {e}");
                    self.done = true;
                    return None;
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for FileSource<R> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let lead = self.peek_byte()?;
        self.reader.consume(1);
        let width = match lead {
            0x00..=0x7F => return Some(char::from(lead)),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Some(char::REPLACEMENT_CHARACTER),
        };
        let mut bytes = [lead, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            // a non-continuation byte starts the next character
            match self.peek_byte() {
                Some(b) if b & 0xC0 == 0x80 => {
                    self.reader.consume(1);
                    *slot = b;
                }
                _ => return Some(char::REPLACEMENT_CHARACTER),
            }
        }
        let ch = std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Some(ch)
    }
}
