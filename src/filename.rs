//! Title checks against portable (Windows-safe) file naming rules, and the
//! interactive loop that asks for a replacement when a headline fails them.

use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::warn;

const MAX_FILENAME_LEN: usize = 255;
const RESERVED_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

#[derive(Error, Debug)]
pub enum FilenameError {
    #[error("input closed before a valid filename was entered")]
    InputClosed,

    #[error("reading filename: {0}")]
    Io(#[from] std::io::Error),
}

/// Whether `name` can be used as a file name on every common filesystem.
pub fn is_valid_filename(name: &str) -> bool {
    let len = name.chars().count();
    if len == 0 || len > MAX_FILENAME_LEN {
        return false;
    }

    if name
        .chars()
        .any(|c| RESERVED_CHARS.contains(&c) || c.is_control())
    {
        return false;
    }

    !(name.ends_with(' ') || name.ends_with('.'))
}

/// Supplies a replacement for a title that cannot be used as a file name.
pub trait TitleCorrector {
    fn correct(&mut self, rejected: &str) -> Result<String, FilenameError>;
}

/// Line-oriented prompt, usually stdin/stdout.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompt<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> TitleCorrector for LinePrompt<R, W> {
    fn correct(&mut self, rejected: &str) -> Result<String, FilenameError> {
        writeln!(
            self.output,
            "Article title '{rejected}' is not a valid Windows filename"
        )?;

        loop {
            write!(self.output, "Please enter a valid filename: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(FilenameError::InputClosed);
            }

            let candidate = line.trim();
            if is_valid_filename(candidate) {
                return Ok(candidate.to_string());
            }

            warn!(candidate, "rejected filename");
            writeln!(
                self.output,
                "The entered filename is still not valid. Please try again."
            )?;
        }
    }
}
