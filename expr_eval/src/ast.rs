use std::fmt;

use crate::Error;

// *** BinOp ***

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BinOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/` (truncating integer division)
    Div,
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinOp::Add => f.write_str("+"),
            BinOp::Sub => f.write_str("-"),
            BinOp::Mul => f.write_str("*"),
            BinOp::Div => f.write_str("/"),
        }
    }
}

// *** Expr ***

/// A parsed arithmetic expression tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expr {
    /// An integer literal
    Number(i64),
    /// A negated sub-expression
    Neg(Box<Expr>),
    /// A binary operation on two sub-expressions
    Bin(BinOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Evaluates the expression with checked 64-bit arithmetic. Division by
    /// zero and any overflow of the intermediate or final result are reported
    /// as errors.
    pub fn eval(&self) -> Result<i64, Error> {
        match self {
            Expr::Number(n) => Ok(*n),
            Expr::Neg(inner) => inner.eval()?.checked_neg().ok_or(Error::Overflow),
            Expr::Bin(op, lhs, rhs) => {
                let lhs = lhs.eval()?;
                let rhs = rhs.eval()?;

                match op {
                    BinOp::Add => lhs.checked_add(rhs).ok_or(Error::Overflow),
                    BinOp::Sub => lhs.checked_sub(rhs).ok_or(Error::Overflow),
                    BinOp::Mul => lhs.checked_mul(rhs).ok_or(Error::Overflow),
                    BinOp::Div if rhs == 0 => Err(Error::DivideByZero),
                    BinOp::Div => lhs.checked_div(rhs).ok_or(Error::Overflow),
                }
            }
        }
    }
}
