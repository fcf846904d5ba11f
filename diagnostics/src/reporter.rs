use std::io::{self, Write};

use crate::sink::Sink;

/// Writes diagnostics to the console and to the transcript sink.
///
/// The reporter never terminates the process; `abort` only finishes the
/// transcript so the caller can pick an exit code.
pub struct Reporter<C: Write, K: Sink> {
    console: C,
    sink: K,
}

impl<C: Write, K: Sink> Reporter<C, K> {
    pub fn new(console: C, sink: K) -> Self {
        Self { console, sink }
    }

    /// The sink gets the line even when the console write fails.
    pub fn report(&mut self, message: &str) -> io::Result<()> {
        self.sink.write_line(message);
        writeln!(self.console, "{message}")
    }

    /// Report a fatal diagnostic and close the sink.
    ///
    /// The sink is closed whatever happens on the console; a sink error
    /// takes precedence over a console error.
    pub fn abort(&mut self, message: &str) -> io::Result<()> {
        log::debug!("aborting: {message}");
        let console = self
            .report(message)
            .and_then(|()| self.console.flush());
        let sink = self.sink.close();
        sink.and(console)
    }

    pub fn into_parts(self) -> (C, K) {
        (self.console, self.sink)
    }
}
