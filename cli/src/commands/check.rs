use std::io::Write;
use std::path::Path;

use anyhow::Result;

use super::{finish, open, Outcome};

/// Parse the declarations in `path`, echoing the input to `<path>.out`.
///
/// A syntax or lexical error is not an `Err`: it is reported on stderr and in
/// the transcript, and comes back as [`Outcome::Rejected`].
pub fn check_file(path: &Path, out: &mut impl Write) -> Result<Outcome> {
    let (source, mut transcript) = open(path)?;
    let result = m2decl_parser::check(source, &mut transcript);
    if result.is_ok() {
        writeln!(out, "Parsed correctly")?;
    }
    finish(result, transcript)
}
