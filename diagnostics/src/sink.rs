use std::io;

/// Destination for echoed input characters and whole diagnostic lines.
pub trait Sink {
    /// Mirror one consumed input character.
    fn echo(&mut self, ch: char);

    /// Append a complete line (a newline is added).
    fn write_line(&mut self, line: &str);

    /// Flush and release the underlying resource.
    fn close(&mut self) -> io::Result<()>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn echo(&mut self, ch: char) {
        (**self).echo(ch)
    }

    fn write_line(&mut self, line: &str) {
        (**self).write_line(line)
    }

    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

/// A sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl Sink for NullSink {
    fn echo(&mut self, _ch: char) {}

    fn write_line(&mut self, _line: &str) {}

    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        text: String,
        closed: bool,
    }

    impl Sink for Recorder {
        fn echo(&mut self, ch: char) {
            self.text.push(ch);
        }

        fn write_line(&mut self, line: &str) {
            self.text.push_str(line);
            self.text.push('\n');
        }

        fn close(&mut self) -> io::Result<()> {
            self.closed = true;
            Ok(())
        }
    }

    fn feed<S: Sink>(mut sink: S) {
        sink.echo('a');
        sink.write_line("b");
        sink.close().unwrap();
    }

    #[test]
    fn forwarding_through_mut_ref() {
        let mut rec = Recorder::default();
        feed(&mut rec);
        assert_eq!(rec.text, "ab\n");
        assert!(rec.closed);
    }

    #[test]
    fn null_sink_accepts_everything() {
        feed(NullSink);
    }
}
