#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, LogFormat};

pub use self::core::{scanner::TokenScanner, session::CalculatorSession};
pub use domain::model::{Calculation, Operator};
pub use utils::error::{CalcError, Result};
