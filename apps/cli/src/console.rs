//! # Console Prompts
//!
//! Line-based prompts over any `BufRead`/`Write` pair.
//!
//! ## Re-prompt Loop
//! ```text
//! prompter.int("Qty: ", "quantity", Some(1), None)
//!      │
//!      ▼
//! "Qty: " ──► read line ──► parse_int(...) ──► Ok(3) ──► return 3
//!      ▲                          │
//!      │                          ▼ Err(BelowMinimum)
//!      └──── "[!] quantity must be at least 1"
//! ```
//!
//! End of input is the only way out of a re-prompt loop without a valid
//! answer; it surfaces as [`ErrorCode::InputClosed`](crate::error::ErrorCode).

use std::fmt::Display;
use std::io::{BufRead, Write};

use kasir_core::validation::{parse_int, parse_money, validate_required, ValidationResult};
use kasir_core::Money;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Width of the `=====` rule between menu sections.
pub const RULE_WIDTH: usize = 70;

/// Prompts on `output`, reads answers from `input`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Where to write everything that isn't a prompt.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Shows `prompt` and returns the next line, trimmed.
    pub fn ask(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::input_closed());
        }
        Ok(line.trim().to_string())
    }

    /// Asks until `parse` accepts the answer.
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> ValidationResult<T>,
    ) -> AppResult<T> {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(error = %err, "Input rejected");
                    self.warn(err)?;
                }
            }
        }
    }

    /// Non-empty free text.
    pub fn non_empty(&mut self, prompt: &str, field: &str) -> AppResult<String> {
        self.ask_until(prompt, |answer| validate_required(field, answer))
    }

    /// Whole number within optional inclusive bounds.
    pub fn int(
        &mut self,
        prompt: &str,
        field: &str,
        min: Option<i64>,
        max: Option<i64>,
    ) -> AppResult<i64> {
        self.ask_until(prompt, |answer| parse_int(field, answer, min, max))
    }

    /// Decimal amount with an optional lower bound.
    pub fn money(&mut self, prompt: &str, field: &str, min: Option<Money>) -> AppResult<Money> {
        self.ask_until(prompt, |answer| parse_money(field, answer, min))
    }

    /// `y`/`Y` is yes, anything else is no.
    pub fn confirm(&mut self, prompt: &str) -> AppResult<bool> {
        Ok(self.ask(prompt)?.eq_ignore_ascii_case("y"))
    }

    pub fn warn(&mut self, message: impl Display) -> AppResult<()> {
        writeln!(self.output, "[!] {}", message)?;
        Ok(())
    }

    pub fn success(&mut self, message: impl Display) -> AppResult<()> {
        writeln!(self.output, "[✓] {}", message)?;
        Ok(())
    }

    pub fn title(&mut self, title: &str) -> AppResult<()> {
        writeln!(self.output, "\n=== {} ===", title)?;
        Ok(())
    }

    pub fn rule(&mut self) -> AppResult<()> {
        writeln!(self.output, "{}", "=".repeat(RULE_WIDTH))?;
        Ok(())
    }
}
