//! Sources of operator input.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Blocking line-oriented input from whoever is standing at the machine.
pub trait OperatorInput {
    /// Show `message` and return the entered line without its line ending.
    ///
    /// Returns `UnexpectedEof` when no more input will ever arrive.
    fn prompt_line(&mut self, message: &str) -> io::Result<String>;
}

/// Prompts on a writer and reads answers from a buffered reader.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInput<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> OperatorInput for ConsoleInput<R, W> {
    fn prompt_line(&mut self, message: &str) -> io::Result<String> {
        write!(self.writer, "{message}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "operator input closed",
            ));
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

/// Answers queued up front. Useful for tests and unattended runs.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Every prompt shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl OperatorInput for ScriptedInput {
    fn prompt_line(&mut self, message: &str) -> io::Result<String> {
        self.prompts.push(message.to_string());
        self.lines.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted")
        })
    }
}
