//! `cman`: print a command cheatsheet laid out for the terminal.

use std::io::{self, ErrorKind, Write};

use anyhow::{Context, Result};
use clap::Parser;

use cman::error::CmanError;
use cman::exit_codes;
use cman::io::terminal::Terminal;
use cman::logging;
use cman::show::show;

#[derive(Parser)]
#[command(
    name = "cman",
    version,
    about = "Show a command cheatsheet laid out for the terminal"
)]
struct Cli {
    /// Cheatsheet to show; `<NAME>.json` is read from the current directory.
    name: String,
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    let code = match run(&cli) {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> Result<()> {
    let root = std::env::current_dir().context("resolve working directory")?;
    let rendered = show(&root, &cli.name, &Terminal)?;
    write_rendered(&mut io::stdout().lock(), &rendered)
}

/// Write the rendered sheet plus a final newline. A reader that stops early
/// (`cman git | head`) ends the run normally.
fn write_rendered<W: Write>(out: &mut W, rendered: &str) -> Result<()> {
    match writeln!(out, "{rendered}").and_then(|()| out.flush()) {
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        result => result.context("write cheatsheet"),
    }
}

/// Map an error chain to its exit code; untyped failures are `INVALID`.
fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CmanError>()
        .map_or(exit_codes::INVALID, CmanError::exit_code)
}
