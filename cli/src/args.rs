use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "m2decl", version)]
#[command(about = "Check Modula-2 TYPE and VAR declarations", long_about = None)]
pub struct Cli {
    /// Source file to check; the transcript is written next to it as <name>.out
    pub path: PathBuf,
    /// Print the token stream (kind code and lexeme) instead of parsing
    #[arg(long)]
    pub tokens: bool,
}
