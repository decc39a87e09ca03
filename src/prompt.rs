//! Interactive prompts over an injectable line source.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::error::NxError;

/// Something that yields input lines; `None` at end of input.
pub trait LineSource {
    fn next_line(&mut self) -> Result<Option<String>>;
}

impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf))
    }
}

/// Print `question`, then read lines until one is non-blank.
///
/// Each attempt is preceded by a `-> ` marker. The answer is returned
/// without surrounding whitespace or line terminator.
pub fn prompt_non_empty(
    input: &mut dyn LineSource,
    out: &mut dyn Write,
    question: &str,
) -> Result<String> {
    writeln!(out, "{question}")?;
    loop {
        write!(out, "-> ")?;
        out.flush()?;
        let Some(line) = input.next_line()? else {
            return Err(NxError::EndOfInput(question.to_string()).into());
        };
        let answer = line.trim();
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
        tracing::debug!(question, "empty answer, asking again");
    }
}
