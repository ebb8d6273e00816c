//! Interactive prompt loop: ask, validate, re-ask until the answer passes.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Ask `query` on stdout and read lines from stdin until one passes every
/// validator. Validation failures print their message and re-prompt; the
/// accepted answer is returned trimmed.
pub fn ask(
    query: &str,
    validators: &[&dyn Fn(&str) -> std::result::Result<(), String>],
) -> Result<String> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "{query}")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed before an answer was accepted",
            )));
        }
        let answer = line.trim();

        let failure = validators.iter().find_map(|v| v(answer).err());
        match failure {
            Some(message) => println!("{message}"),
            None => return Ok(answer.to_string()),
        }
    }
}

/// The answer must name an existing directory.
pub fn is_dir(text: &str) -> std::result::Result<(), String> {
    if Path::new(text).is_dir() {
        Ok(())
    } else {
        Err("input must be a valid directory".to_string())
    }
}

/// The answer must be a whole non-negative number.
pub fn is_numeric(text: &str) -> std::result::Result<(), String> {
    if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err("input must be numeric".to_string())
    }
}
