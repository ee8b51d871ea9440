//! Line-oriented console I/O.

pub mod render;

use crate::error::AppError;
use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Prompt reader and printer over any line source and sink.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, line: impl Display) -> Result<(), AppError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Next input line, trimmed. End of input is [`AppError::InputClosed`].
    fn read_line(&mut self) -> Result<String, AppError> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(buf.trim().to_string())
    }

    fn ask(&mut self, message: &str) -> Result<String, AppError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        self.read_line()
    }

    /// May return an empty string.
    pub fn prompt_optional(&mut self, message: &str) -> Result<String, AppError> {
        self.ask(message)
    }

    /// Re-asks until the answer is non-empty.
    pub fn prompt_required(&mut self, message: &str) -> Result<String, AppError> {
        loop {
            let text = self.ask(message)?;
            if !text.is_empty() {
                return Ok(text);
            }
            self.say("[ERROR] Este campo es obligatorio.")?;
        }
    }

    /// Re-asks until the answer parses as an integer.
    pub fn prompt_int(&mut self, message: &str) -> Result<i64, AppError> {
        loop {
            match self.ask(message)?.parse::<i64>() {
                Ok(n) => return Ok(n),
                Err(_) => self.say("[ERROR] Debe ingresar un número válido.")?,
            }
        }
    }

    pub fn prompt_int_in_range(&mut self, message: &str, min: i64, max: i64) -> Result<i64, AppError> {
        loop {
            let n = self.prompt_int(message)?;
            if (min..=max).contains(&n) {
                return Ok(n);
            }
            self.say(format!("[ERROR] El valor debe estar entre {} y {}.", min, max))?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn prompt_int_reasks_on_garbage() {
        let mut c = console("abc\n\n 42 \n");
        assert_eq!(c.prompt_int("n: ").unwrap(), 42);
        let out = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(out.matches("Debe ingresar un número válido").count(), 2);
    }

    #[test]
    fn prompt_required_skips_blank_lines() {
        let mut c = console("   \nAna\n");
        assert_eq!(c.prompt_required("Nombre: ").unwrap(), "Ana");
    }

    #[test]
    fn prompt_in_range_rejects_bounds() {
        let mut c = console("0\n11\n10\n");
        assert_eq!(c.prompt_int_in_range("t: ", 1, 10).unwrap(), 10);
        let out = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(out.matches("entre 1 y 10").count(), 2);
    }

    #[test]
    fn eof_is_input_closed() {
        let mut c = console("");
        assert_eq!(c.prompt_optional("x: ").unwrap_err().code(), "INPUT_CLOSED");
    }
}
