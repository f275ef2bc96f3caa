use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "basic-calc")]
#[command(about = "Reads two numbers and an operator from stdin and prints the result")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Exit with a non-zero code on invalid input (2) or division by zero (1)
    #[arg(long)]
    pub strict_exit: bool,

    /// Log formatter used on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
