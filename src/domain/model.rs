use crate::utils::error::{CalcError, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Subtract => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            // -0.0 compares equal to 0.0
            Operator::Divide if rhs == 0.0 => Err(CalcError::DivisionByZero),
            Operator::Divide => Ok(lhs / rhs),
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    fn try_from(symbol: char) -> Result<Self> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            other => Err(CalcError::InvalidOperator {
                symbol: Some(other),
            }),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A successfully evaluated `lhs <op> rhs`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub lhs: f64,
    pub operator: Operator,
    pub rhs: f64,
    pub result: f64,
}

impl Calculation {
    pub fn evaluate(lhs: f64, operator: Operator, rhs: f64) -> Result<Self> {
        let result = operator.apply(lhs, rhs)?;
        Ok(Self {
            lhs,
            operator,
            rhs,
            result,
        })
    }
}

/// Shortest round-trip rendering that keeps a fractional part on integral
/// values, e.g. `5.0`, `0.1`, `1e21`.
pub fn format_number(value: f64) -> String {
    format!("{:?}", value)
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            format_number(self.lhs),
            self.operator,
            format_number(self.rhs),
            format_number(self.result)
        )
    }
}
