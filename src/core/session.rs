use crate::core::scanner::TokenScanner;
use crate::domain::model::Calculation;
use crate::utils::error::Result;
use crate::utils::validation::{validate_operand, validate_operator};
use std::io::{BufRead, Write};

pub const FIRST_OPERAND_PROMPT: &str = "Enter the first number: ";
pub const OPERATOR_PROMPT: &str = "Enter the operator (+, -, *, /): ";
pub const SECOND_OPERAND_PROMPT: &str = "Enter the second number: ";

/// One prompt-read-compute dialogue over a reader and a writer.
///
/// The session owns the input for its whole lifetime; [`run`](Self::run)
/// consumes it, so the input is released whichever way the run ends.
pub struct CalculatorSession<R: BufRead, W: Write> {
    input: TokenScanner<R>,
    output: W,
}

impl<R: BufRead, W: Write> CalculatorSession<R, W> {
    pub fn new(reader: R, output: W) -> Self {
        Self {
            input: TokenScanner::new(reader),
            output,
        }
    }

    /// Runs the dialogue to completion. Calculator errors are printed to the
    /// output before being returned; I/O errors are only returned.
    pub fn run(mut self) -> Result<Calculation> {
        let outcome = self.evaluate();

        if let Err(e) = &outcome {
            tracing::debug!("Session ended with {:?}", e);
            if e.is_user_facing() {
                writeln!(self.output, "{}", e)?;
                self.output.flush()?;
            }
        }

        outcome
    }

    fn evaluate(&mut self) -> Result<Calculation> {
        self.prompt(FIRST_OPERAND_PROMPT)?;
        let lhs = validate_operand(self.input.next_token()?.as_deref())?;
        tracing::debug!("First operand: {}", lhs);

        self.prompt(OPERATOR_PROMPT)?;
        // Reported only after the second operand has been read.
        let operator = validate_operator(self.input.next_token()?.as_deref());
        tracing::debug!("Operator: {:?}", operator);

        self.prompt(SECOND_OPERAND_PROMPT)?;
        let rhs = validate_operand(self.input.next_token()?.as_deref())?;
        tracing::debug!("Second operand: {}", rhs);

        let calculation = Calculation::evaluate(lhs, operator?, rhs)?;
        writeln!(self.output, "{}", calculation)?;
        self.output.flush()?;

        Ok(calculation)
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }
}
