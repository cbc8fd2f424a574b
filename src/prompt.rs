//! Prompt loop primitives.
//!
//! Every prompt reads whole lines and recovers from bad input by asking
//! again; invalid input is never surfaced as an error. The functions are
//! generic over the reader and writer so tests can drive them with
//! in-memory buffers.

use std::io::{self, BufRead, ErrorKind, Write};

use crate::error::AppError;

/// Read one line, stripping only the trailing newline (and a preceding
/// carriage return). No other trimming: the answer is kept verbatim.
fn read_line<R: BufRead>(input: &mut R) -> Result<String, AppError> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line)?;
    if bytes == 0 {
        return Err(io::Error::new(
            ErrorKind::UnexpectedEof,
            "input closed while waiting for an answer",
        )
        .into());
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, AppError> {
    write!(output, "{prompt}")?;
    output.flush()?;
    read_line(input)
}

/// Prompt until the user supplies non-empty text; the first non-empty
/// answer is returned as typed.
pub fn read_required<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, AppError> {
    loop {
        let value = ask(input, output, prompt)?;
        if !value.is_empty() {
            return Ok(value);
        }
        writeln!(output, "This field is required.")?;
    }
}

/// Prompt once; an empty answer is accepted as-is.
pub fn read_optional<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, AppError> {
    ask(input, output, prompt)
}

/// Prompt until the user answers yes or no, in any casing.
pub fn read_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<bool, AppError> {
    loop {
        let answer = ask(input, output, &format!("{prompt} (yes/no): "))?.to_lowercase();
        match answer.as_str() {
            "yes" => return Ok(true),
            "no" => return Ok(false),
            _ => writeln!(output, "Please answer 'yes' or 'no'.")?,
        }
    }
}
