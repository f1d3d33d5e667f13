use std::io::{self, BufRead, Write};

/// Source of operator input
pub trait LineReader {
    /// Show `prompt` and return the next line without its terminator
    ///
    /// # Errors
    ///
    /// Will return `Err` on I/O failure or when input is exhausted
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

impl<R: LineReader + ?Sized> LineReader for &mut R {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        (**self).read_line(prompt)
    }
}

/// Prompt on stdout, read from stdin
#[derive(Debug, Default)]
pub struct StdinReader;

impl StdinReader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LineReader for StdinReader {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        read_line_from(&mut io::stdin().lock())
    }
}

/// Reads a single line, keeping everything but the trailing `\n` / `\r\n`
///
/// # Errors
///
/// Will return `Err` with `UnexpectedEof` if nothing is left to read
pub fn read_line_from<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();

    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no input, expected a bucket name",
        ));
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}
