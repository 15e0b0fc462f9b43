/// Line-oriented console used by every interactive flow
///
/// Prompts are written to the output, then one line is read from the input.
/// Running out of input while a prompt is waiting is an error, so an
/// exhausted stdin ends the run instead of re-prompting forever.

use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Errors raised while talking to the user
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Input ended while waiting for an answer")]
    EndOfInput,

    #[error("Console IO error: {0}")]
    Io(#[from] io::Error),
}

/// Console reading answers from `R` and writing prompts to `W`
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show `prompt` and return the next line without its line terminator
    ///
    /// No other trimming happens here; callers decide whether surrounding
    /// whitespace matters.
    pub fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::debug!("Input closed during prompt {:?}", prompt);
            return Err(PromptError::EndOfInput);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Print one line of output
    pub fn say(&mut self, message: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Consume the console and hand back its output (handy for tests)
    pub fn into_output(self) -> W {
        self.output
    }
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}
