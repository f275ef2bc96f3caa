use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Error: That's not a valid number.")]
    InvalidNumber { token: Option<String> },

    #[error("Error! Division by zero is not allowed.")]
    DivisionByZero,

    #[error("Error! '{}' is an invalid operator.", display_symbol(.symbol))]
    InvalidOperator { symbol: Option<char> },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

fn display_symbol(symbol: &Option<char>) -> String {
    symbol.map(String::from).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Arithmetic,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::InvalidNumber { .. } | CalcError::InvalidOperator { .. } => {
                ErrorCategory::Input
            }
            CalcError::DivisionByZero => ErrorCategory::Arithmetic,
            CalcError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Arithmetic => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Errors the session reports on stdout itself, as opposed to failures of
    /// the terminal.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, CalcError::IoError(_))
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::InvalidNumber { .. } => {
                "Enter a decimal number such as 42, -3.5 or 1e3"
            }
            CalcError::DivisionByZero => "Use a non-zero divisor",
            CalcError::InvalidOperator { .. } => "Use one of +, -, * or /",
            CalcError::IoError(_) => "Check that stdin and stdout are connected",
        }
    }

    /// Process exit code. Calculator errors exit cleanly unless `strict` is set.
    pub fn exit_code(&self, strict: bool) -> u8 {
        match (self.severity(), strict) {
            (ErrorSeverity::Critical, _) => 1,
            (_, false) => 0,
            (ErrorSeverity::Medium, true) => 2,
            (ErrorSeverity::High, true) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
