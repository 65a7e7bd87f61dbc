use crate::command::Command;
use crate::simulation::SimulationEngine;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Prefix for every message written to the error stream
pub const ERROR_PREFIX: &str = "Error, ";

/// Reads commands line by line and runs them against the engine
#[derive(Debug)]
pub struct CommandHandler {
    engine: SimulationEngine,
    running: bool,
}

impl CommandHandler {
    /// Create a handler around an engine; it starts stopped
    pub fn new(engine: SimulationEngine) -> Self {
        Self {
            engine,
            running: false,
        }
    }

    /// The engine driven by this handler
    #[inline]
    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    /// Run until the input ends or a command asks to quit.
    ///
    /// The quit flag is checked before each read, so nothing past the
    /// quitting line is consumed.
    pub fn run<R, W, E>(&mut self, mut input: R, out: &mut W, err: &mut E) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        self.running = true;
        let mut buf = Vec::new();

        while self.running {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            // invalid UTF-8 becomes U+FFFD and is rejected by the parser
            let line = String::from_utf8_lossy(&buf);
            self.handle_line(line.trim_end_matches(['\n', '\r']), out, err)?;
        }

        self.running = false;
        debug!(steps = self.engine.total_steps(), "command loop finished");
        Ok(())
    }

    /// Parse and run a single line. Failures go to `err` and leave the
    /// engine untouched.
    pub fn handle_line<W, E>(&mut self, line: &str, out: &mut W, err: &mut E) -> io::Result<()>
    where
        W: Write,
        E: Write,
    {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => {
                debug!(line, error = %e, "rejected command");
                writeln!(err, "{}{}", ERROR_PREFIX.red(), e)?;
                return Ok(());
            }
        };

        let response = command.execute(&mut self.engine);
        if let Some(output) = response.output {
            writeln!(out, "{output}")?;
        }
        if response.quit {
            self.running = false;
        }
        Ok(())
    }
}
