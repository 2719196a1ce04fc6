//! Interactive prompt: one command line per input line.

use anyhow::{Context, Result};
use decli::Program;
use std::io::{BufRead, Write};

use crate::print_stdout;

pub const EXIT_WORD: &str = "exit";

/// Read lines until EOF or `exit`, dispatching each through `program`.
///
/// Failing actions are logged and the loop keeps going.
pub fn run<R, W>(program: &mut Program, mut input: R, mut out: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(out, "> ")?;
        out.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read input")? == 0 {
            writeln!(out)?;
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == EXIT_WORD {
            break;
        }

        match program.exec(line) {
            Ok(response) => {
                if let Some(value) = &response.stdout {
                    print_stdout(&mut out, value)?;
                }
            }
            Err(err) => tracing::error!("{err:#}"),
        }
    }
    Ok(())
}
