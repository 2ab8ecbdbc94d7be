//! Interactive command surface.
//!
//! Reads lines, turns them into [`Command`]s and applies them to a
//! [`Session`]. All search work is delegated to the library core.

pub mod commands;
pub mod session;

pub use commands::Command;
pub use session::{Reply, Session, HELP};

use anyhow::Result;
use std::io::{BufRead, Write};

/// Run the read-eval-print loop until `:quit` or end of input.
///
/// A prompt is written before each line is read.
pub fn run_repl<R: BufRead, W: Write>(session: &mut Session, input: R, mut output: W) -> Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output, "\nBye.")?;
            break;
        };

        let reply = session.handle(&line?);
        for text in &reply.lines {
            writeln!(output, "{}", text)?;
        }
        if reply.quit {
            break;
        }
    }

    tracing::debug!("Session ended: {:?}", session.metrics().summary());
    Ok(())
}
