//! A small line-oriented desk calculator with two modes: Fibonacci numbers
//! computed by bottom-up tabulation, and integer arithmetic expressions
//! evaluated by the [expr_eval] engine.
//!
//! ```
//! assert_eq!(calcline::fib::compute(10).unwrap(), 55);
//! ```

/// Configuration related items
pub mod config;
/// Fibonacci tabulation related items
pub mod fib;
/// Interactive session related items
pub mod session;

use std::io;

use flexstr::SharedStr;

// *** Error ***

/// This error is returned if any issues arise while running the calculator
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input token could not be parsed as an integer
    #[error("The input could not be parsed as an integer: '{0}'")]
    NotAnInteger(SharedStr),

    /// A negative value was supplied where a non-negative one is required
    #[error("Fibonacci numbers are not defined for negative input: {0}")]
    NegativeInput(i64),

    /// The requested entry is past what the 64-bit table representation holds
    #[error("Fibonacci({0}) is not supported (the largest supported input is {1})")]
    InputTooLarge(i64, u32),

    /// The configured cap exceeds what the table representation supports
    #[error("The configured 'max_n' ({0}) is larger than the largest supported input ({1})")]
    BadLimit(u32, u32),

    /// The input stream ended before a value was read
    #[error("The input ended before a value was read")]
    UnexpectedEof,

    /// An expression could not be lexed, parsed, or evaluated
    #[error(transparent)]
    ExprError(#[from] expr_eval::Error),

    /// A general I/O error occurred
    #[error(transparent)]
    IOError(#[from] io::Error),

    /// A TOML syntax error occurred
    #[error(transparent)]
    TOMLError(#[from] toml::de::Error),
}
