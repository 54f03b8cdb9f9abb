use std::{
    io::{BufRead, Write},
    path::Path,
};

use log::debug;

use crate::{error::Result, scanner::Scanner};

/// Feeds source text to the scanner and prints the resulting tokens.
pub struct Lox<Out, ErrOut> {
    out: Out,
    err_out: ErrOut,
}

impl <Out: Write, ErrOut: Write> Lox<Out, ErrOut> {
    pub fn new(out: Out, err_out: ErrOut) -> Self {
        Self { out, err_out }
    }

    pub fn run_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        debug!("running {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        self.run(contents.as_str())
    }

    /// Scans each line of `input` on its own until it runs dry.
    ///
    /// Lexical errors are reported to the error sink and the prompt carries
    /// on. I/O errors end the session.
    pub fn run_prompt<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        let mut buffer = String::new();

        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            buffer.clear();

            let num_bytes = input.read_line(&mut buffer)?;
            if num_bytes == 0 { break };

            let line = buffer.trim_end_matches(&['\n', '\r'][..]);
            if let Err(e) = self.run(line) {
                if !e.is_lexical() {
                    return Err(e);
                }
                debug!("{}", e);
                writeln!(self.err_out, "{}", e)?;
            }
        }

        Ok(())
    }

    /// Prints the debug text of every token in `source`, one per line.
    ///
    /// Nothing is printed if the source fails to scan.
    pub fn run(&mut self, source: &str) -> Result<()> {
        let tokens = Scanner::new(source).scan_tokens()?;
        debug!("scanned {} tokens", tokens.len());

        for token in tokens.iter() {
            writeln!(self.out, "{}", token)?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> (Out, ErrOut) {
        (self.out, self.err_out)
    }
}
