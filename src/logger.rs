use colored::*;
use dialoguer::Confirm;
use std::io::{self, Write};

/// Line-oriented sink for everything a command tells the user.
///
/// Progress and notices go to stderr; `output` is reserved for values a
/// caller may capture (addresses, passwords, tables) and goes to stdout.
pub trait Logger: Send + Sync {
    fn step(&self, message: &str);

    fn println(&self, message: &str);

    /// Writes `text` to stdout. A failed write is an error.
    fn output(&self, text: &str) -> io::Result<()>;

    /// Asks a yes/no question. Non-interactive sinks answer `false`.
    fn prompt(&self, question: &str) -> bool;
}

#[derive(Debug, Default)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for ConsoleLogger {
    fn step(&self, message: &str) {
        tracing::debug!(step = message);
        eprintln!("{} {}", "step:".blue().bold(), message);
    }

    fn println(&self, message: &str) {
        tracing::debug!(notice = message);
        eprintln!("{}", message);
    }

    fn output(&self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", text)?;
        stdout.flush()
    }

    fn prompt(&self, question: &str) -> bool {
        match Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }
}
