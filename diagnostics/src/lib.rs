//! Output side of the m2decl pipeline.
//!
//! Every character the scanner consumes is echoed into a [`Sink`], and
//! diagnostics are written both to the console and to that same sink, so the
//! transcript file ends up as an annotated copy of the input.

pub mod reporter;
pub mod sink;
pub mod transcript;

pub use reporter::Reporter;
pub use sink::{NullSink, Sink};
pub use transcript::{transcript_path, Transcript, TRANSCRIPT_EXT};
