use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::sink::Sink;

/// Extension given to the transcript written next to a source file.
pub const TRANSCRIPT_EXT: &str = ".out";

/// Derive the transcript path for `source`.
///
/// Only the final path component is inspected: a name without `.` gets
/// `ext` appended, otherwise everything from the last `.` onward is replaced.
///
/// ```
/// use std::path::Path;
/// use diagnostics::transcript_path;
///
/// assert_eq!(transcript_path(Path::new("decls.mod"), ".out"), Path::new("decls.out"));
/// assert_eq!(transcript_path(Path::new("decls"), ".out"), Path::new("decls.out"));
/// ```
pub fn transcript_path(source: &Path, ext: &str) -> PathBuf {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = match name.rfind('.') {
        Some(i) => &name[..i],
        None => name.as_str(),
    };
    source.with_file_name(format!("{stem}{ext}"))
}

/// A [`Sink`] writing into any `Write`.
///
/// Write failures do not interrupt scanning; the first one is kept and
/// handed back by [`Sink::close`]. Lines always start on a fresh line, even
/// when the echoed input did not end with a newline.
pub struct Transcript<W: Write> {
    out: W,
    error: Option<io::Error>,
    closed: bool,
    at_line_start: bool,
}

impl Transcript<BufWriter<File>> {
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        log::debug!("writing transcript to {}", path.display());
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> Transcript<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            error: None,
            closed: false,
            at_line_start: true,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        if self.closed || self.error.is_some() {
            return;
        }
        if let Err(e) = self.out.write_all(bytes) {
            log::warn!("transcript write failed: {e}");
            self.error = Some(e);
            return;
        }
        if let Some(&last) = bytes.last() {
            self.at_line_start = last == b'\n';
        }
    }
}

impl<W: Write> Sink for Transcript<W> {
    fn echo(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.write_bytes(ch.encode_utf8(&mut buf).as_bytes());
    }

    fn write_line(&mut self, line: &str) {
        if !self.at_line_start {
            self.write_bytes(b"\n");
        }
        self.write_bytes(line.as_bytes());
        self.write_bytes(b"\n");
    }

    fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()
    }
}
