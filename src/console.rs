use std::{
    collections::VecDeque,
    fmt::Display,
    io::{self, BufRead, Write},
    str::FromStr,
};

use crate::error::MenuError;

/// Blocking terminal endpoint: whitespace-delimited tokens in, text out.
pub struct Console<'a> {
    input: Box<dyn BufRead + 'a>,
    output: Box<dyn Write + 'a>,
    pending: VecDeque<String>,
}

impl<'a> Console<'a> {
    pub fn new(input: impl BufRead + 'a, output: impl Write + 'a) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
            pending: VecDeque::new(),
        }
    }

    pub fn line(&mut self, text: impl Display) -> Result<(), MenuError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Writes `text` without a newline and flushes so it shows before a read.
    pub fn prompt(&mut self, text: &str) -> Result<(), MenuError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    pub fn report(&mut self, err: &MenuError) -> Result<(), MenuError> {
        log::debug!("recoverable input error: {err}");
        self.line(format_args!("Error: {err}"))
    }

    pub fn next_token(&mut self) -> Result<String, MenuError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut buf = Vec::new();
            let read = self.input.read_until(b'\n', &mut buf)?;
            if read == 0 {
                return Err(MenuError::InputClosed);
            }
            let line = String::from_utf8(buf).map_err(|e| {
                MenuError::MalformedInput(
                    String::from_utf8_lossy(e.as_bytes()).trim().to_string(),
                )
            })?;
            self.pending
                .extend(line.split_whitespace().map(|t| t.to_string()));
        }
    }

    /// Drops whatever is left of the current input line.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }

    /// Reads one token and parses it; a bad token drops the rest of its line.
    pub fn read_number<T: FromStr>(&mut self) -> Result<T, MenuError> {
        let token = self.next_token()?;
        match token.parse::<T>() {
            Ok(v) => Ok(v),
            Err(_) => {
                self.discard_line();
                Err(MenuError::MalformedInput(token))
            }
        }
    }

    /// Prompts until a well-formed number arrives.
    pub fn ask_number<T: FromStr>(&mut self, prompt: &str) -> Result<T, MenuError> {
        loop {
            self.prompt(prompt)?;
            match self.read_number() {
                Ok(v) => return Ok(v),
                Err(e) if e.is_recoverable() => self.report(&e)?,
                Err(e) => return Err(e),
            }
        }
    }
}

impl Console<'static> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}
