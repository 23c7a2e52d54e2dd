//! Console input scanning
//!
//! Splits console input into whitespace-separated tokens, so a user may type
//! a selection and its operands on one line or spread over several. A token
//! that fails to parse is consumed, never re-read.

use crate::error::{CalcError, Result};
use std::collections::VecDeque;
use std::io::BufRead;

/// Whitespace token reader over a buffered source
#[derive(Debug)]
pub struct TokenReader<R> {
    source: R,
    pending: VecDeque<String>,
    line_buffer: String,
}

impl<R: BufRead> TokenReader<R> {
    /// Create a token reader over `source`
    pub fn new(source: R) -> Self {
        Self {
            source,
            pending: VecDeque::new(),
            line_buffer: String::new(),
        }
    }

    /// Next token, reading further lines as needed
    pub fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            self.line_buffer.clear();
            if self.source.read_line(&mut self.line_buffer)? == 0 {
                return Err(CalcError::InputClosed);
            }
            self.pending
                .extend(self.line_buffer.split_whitespace().map(str::to_string));
        }
    }

    /// Next token as a menu selection
    pub fn next_int(&mut self) -> Result<i32> {
        let token = self.next_token()?;
        token
            .parse::<i32>()
            .map_err(|_| CalcError::InvalidSelectionFormat(token))
    }

    /// Next token as an operand
    pub fn next_real(&mut self) -> Result<f64> {
        let token = self.next_token()?;
        parse_real(&token).ok_or(CalcError::InvalidOperand(token))
    }
}

/// Parse an operand, accepting `Infinity` and `NaN` as printed by the calculator
fn parse_real(token: &str) -> Option<f64> {
    match token {
        "Infinity" | "+Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        _ if token.chars().any(|c| c.is_ascii_digit()) => token.parse().ok(),
        _ => None,
    }
}
