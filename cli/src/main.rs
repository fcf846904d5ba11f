use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod args;

use args::Cli;
use cli::commands::{check, tokens};

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut stdout = io::stdout().lock();
    let outcome = if cli.tokens {
        tokens::dump_tokens(&cli.path, &mut stdout)?
    } else {
        check::check_file(&cli.path, &mut stdout)?
    };
    Ok(outcome.exit_code())
}
