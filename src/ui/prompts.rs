//! ui::prompts
//!
//! Interactive line-oriented prompts.
//!
//! # Design
//!
//! Every prompt writes its message to stdout (no trailing newline, flushed)
//! and reads exactly one line, trimmed of surrounding whitespace. There is
//! no re-prompting on empty input; validation belongs to the caller.
//!
//! The core routine is generic over `BufRead` so tests can drive it from a
//! string; [`input`] is the stdin-backed convenience wrapper.

use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed before a line was read")]
    Eof,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Prompt on stdout and read one trimmed line from stdin.
pub fn input(message: &str) -> Result<String, PromptError> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    input_from(message, &mut reader)
}

/// Prompt on stdout and read one trimmed line from `reader`.
pub fn input_from<R: BufRead>(message: &str, reader: &mut R) -> Result<String, PromptError> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", message)?;
    stdout.flush()?;

    let mut line = String::new();
    let read = reader.read_line(&mut line)?;
    if read == 0 {
        return Err(PromptError::Eof);
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_one_trimmed_line() {
        let mut reader = Cursor::new("  https://gitlab.example.com/  \n");
        let value = input_from("Enter URL: ", &mut reader).unwrap();
        assert_eq!(value, "https://gitlab.example.com/");
    }

    #[test]
    fn strips_trailing_newline_only_line() {
        let mut reader = Cursor::new("tok123\n");
        assert_eq!(input_from(": ", &mut reader).unwrap(), "tok123");
    }

    #[test]
    fn last_line_without_newline_is_accepted() {
        let mut reader = Cursor::new("42");
        assert_eq!(input_from(": ", &mut reader).unwrap(), "42");
    }

    #[test]
    fn empty_line_yields_empty_string() {
        let mut reader = Cursor::new("\n");
        assert_eq!(input_from(": ", &mut reader).unwrap(), "");
    }

    #[test]
    fn closed_input_is_eof() {
        let mut reader = Cursor::new("");
        let result = input_from(": ", &mut reader);
        assert!(matches!(result, Err(PromptError::Eof)));
    }

    #[test]
    fn consecutive_prompts_consume_lines_in_order() {
        let mut reader = Cursor::new("first\nsecond\nthird\n");
        assert_eq!(input_from("a: ", &mut reader).unwrap(), "first");
        assert_eq!(input_from("b: ", &mut reader).unwrap(), "second");
        assert_eq!(input_from("c: ", &mut reader).unwrap(), "third");
    }
}
