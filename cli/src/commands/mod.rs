use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use diagnostics::{transcript_path, Reporter, Sink, Transcript, TRANSCRIPT_EXT};
use m2decl_parser::{FileSource, ParseError};

pub mod check;
pub mod tokens;

/// How a run ended when no I/O failure got in the way.
#[derive(Debug)]
pub enum Outcome {
    Accepted,
    Rejected(ParseError),
}

impl Outcome {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::Accepted => ExitCode::SUCCESS,
            Outcome::Rejected(_) => ExitCode::FAILURE,
        }
    }
}

/// Open `path` for scanning and create its transcript alongside it.
///
/// Refuses a source that is its own transcript, which would otherwise be
/// truncated before it is read.
fn open(path: &Path) -> Result<(FileSource, Transcript<BufWriter<File>>)> {
    let source =
        FileSource::open(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let out_path = transcript_path(path, TRANSCRIPT_EXT);
    if same_file(path, &out_path) {
        bail!(
            "Refusing to overwrite {}: the transcript would replace the source",
            path.display()
        );
    }
    let transcript = Transcript::create(&out_path)
        .with_context(|| format!("Failed to create transcript {}", out_path.display()))?;
    Ok((source, transcript))
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Close the transcript, reporting the error first if there was one.
fn finish<K: Sink>(result: Result<(), ParseError>, mut transcript: K) -> Result<Outcome> {
    match result {
        Ok(()) => {
            transcript.close().context("Failed to write transcript")?;
            Ok(Outcome::Accepted)
        }
        Err(err) => {
            log::info!("rejected: {err}");
            let mut reporter = Reporter::new(io::stderr(), transcript);
            reporter
                .abort(&err.to_string())
                .context("Failed to report diagnostic")?;
            Ok(Outcome::Rejected(err))
        }
    }
}
