use std::io::{self, Write};

use colored::*;
use kasir_common::confirmation::ConfirmationChannel;

use crate::terminal::colors;

/// Asks the operator on the terminal and waits for one line on stdin.
pub struct StdinConfirmation;

impl ConfirmationChannel for StdinConfirmation {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt.color(colors::ACCENT))?;
        stdout.flush()?;

        let mut answer = String::new();
        if io::stdin().read_line(&mut answer)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed before an answer was given",
            ));
        }
        Ok(answer)
    }
}
