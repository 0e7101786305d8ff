use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

pub const WEIGHT_PROMPT: &str = "Weight (lbs)";
pub const HEIGHT_PROMPT: &str = "Height (cm)";

#[mockall::automock]
pub trait InputSource {
    /// Shows `prompt` and returns the next line of input, or `None` once the
    /// input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Prompts on a writer and reads answers line by line from a reader.
pub struct LineSource<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineSource<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl LineSource<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> InputSource for LineSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}: ", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_owned()))
    }
}
