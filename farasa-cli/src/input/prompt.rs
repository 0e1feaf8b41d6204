//! Interactive prompting for missing arguments

use crate::error::CliError;
use anyhow::{Context, Result};
use std::io::{self, BufRead, IsTerminal, Stderr, StdinLock, Write};

/// Asks the user for values that were not given on the command line
pub struct Prompt<R, W> {
    reader: R,
    writer: W,
    interactive: bool,
}

impl Prompt<StdinLock<'static>, Stderr> {
    /// Prompt on the terminal; refuses to ask when stdin is not a terminal
    pub fn terminal() -> Self {
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();
        Self::new(stdin.lock(), io::stderr(), interactive)
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Create a prompt over arbitrary streams
    pub fn new(reader: R, writer: W, interactive: bool) -> Self {
        Self {
            reader,
            writer,
            interactive,
        }
    }

    /// Ask `question` and return the trimmed answer
    ///
    /// `flag` names the command-line option in the error raised when no
    /// answer can be obtained.
    pub fn ask(&mut self, question: &str, flag: &str) -> Result<String> {
        if !self.interactive {
            return Err(CliError::MissingArgument(flag.to_string()).into());
        }

        write!(self.writer, "{question}: ")?;
        self.writer.flush()?;

        let mut answer = String::new();
        self.reader
            .read_line(&mut answer)
            .context("Failed to read from stdin")?;

        let answer = answer.trim();
        if answer.is_empty() {
            return Err(CliError::MissingArgument(flag.to_string()).into());
        }
        Ok(answer.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_returns_trimmed_answer() {
        let mut output = Vec::new();
        let mut prompt = Prompt::new(Cursor::new("  test.txt \n"), &mut output, true);

        let answer = prompt.ask("Input path", "--inpath").unwrap();
        assert_eq!(answer, "test.txt");
        assert_eq!(String::from_utf8(output).unwrap(), "Input path: ");
    }

    #[test]
    fn test_non_interactive_fails_without_asking() {
        let mut output = Vec::new();
        let mut prompt = Prompt::new(Cursor::new("segment\n"), &mut output, false);

        let err = prompt.ask("Function", "--func").unwrap_err();
        assert_eq!(err.to_string(), "Missing argument: --func");
        assert!(output.is_empty());
    }

    #[test]
    fn test_empty_answer_is_missing_argument() {
        let mut prompt = Prompt::new(Cursor::new("\n"), Vec::new(), true);
        let err = prompt.ask("Output path", "--outpath").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::MissingArgument(flag)) if flag == "--outpath"
        ));
    }

    #[test]
    fn test_end_of_input_is_missing_argument() {
        let mut prompt = Prompt::new(Cursor::new(""), Vec::new(), true);
        assert!(prompt.ask("Function", "--func").is_err());
    }
}
