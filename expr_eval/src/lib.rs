//! An integer arithmetic expression engine: a lexer, a recursive-descent
//! parser, and a checked 64-bit evaluator for the classic calculator grammar
//! (`+`, `-`, `*`, `/`, unary minus, and parentheses).
//!
//! ```
//! assert_eq!(expr_eval::eval_str("1 + 2 * 3").unwrap(), 7);
//! assert_eq!(expr_eval::eval_str("(1 + 2) * 3").unwrap(), 9);
//! ```

#![warn(missing_docs)]

/// Expression tree and evaluation related items
pub mod ast;
/// Lexer related items
pub mod lexer;
/// Parser related items
pub mod parser;
/// Token related items
pub mod token;

use flexstr::SharedStr;

use crate::ast::Expr;
use crate::parser::Parser;

// *** Error ***

/// This error is returned if any issues arise while lexing, parsing, or
/// evaluating an expression
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// A character that cannot start a token was found
    #[error("Unexpected character '{0}' at column {1}")]
    UnexpectedChar(char, usize),

    /// An integer literal too large for the 64-bit representation was found
    #[error("The number literal '{0}' at column {1} does not fit in 64 bits")]
    NumberTooLarge(SharedStr, usize),

    /// A token was found where the grammar does not allow it
    #[error("Unexpected token '{0}' at column {1}")]
    UnexpectedToken(SharedStr, usize),

    /// Input was left over after a complete expression was parsed
    #[error("Trailing input '{0}' at column {1} after a complete expression")]
    TrailingInput(SharedStr, usize),

    /// The input ended before the expression was complete
    #[error("The expression ended before it was complete")]
    UnexpectedEnd,

    /// The right-hand side of a division evaluated to zero
    #[error("Division by zero")]
    DivideByZero,

    /// An intermediate or final result does not fit in 64 bits
    #[error("The result does not fit in a signed 64-bit integer")]
    Overflow,
}

// *** Entry points ***

/// Parses one line into an expression tree. The entire input must form a
/// single complete expression.
#[inline]
pub fn parse_str(src: &str) -> Result<Expr, Error> {
    Parser::new(src).parse()
}

/// Parses and evaluates one line
#[inline]
pub fn eval_str(src: &str) -> Result<i64, Error> {
    parse_str(src)?.eval()
}
