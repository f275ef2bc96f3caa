pub mod scanner;
pub mod session;
