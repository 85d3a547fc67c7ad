use std::iter::Peekable;

use flexstr::ToSharedStr;

use crate::ast::{BinOp, Expr};
use crate::lexer::Lexer;
use crate::token::Token;
use crate::Error;

/// A recursive-descent parser for the calculator grammar:
///
/// ```text
/// expr   := term (('+' | '-') term)*
/// term   := factor (('*' | '/') factor)*
/// factor := NUMBER | '-' factor | '(' expr ')'
/// ```
///
/// Binary operators are left associative.
pub struct Parser<'src> {
    tokens: Peekable<Lexer<'src>>,
}

impl<'src> Parser<'src> {
    /// Creates a new `Parser` over the given line
    #[inline]
    pub fn new(src: &'src str) -> Parser<'src> {
        Parser {
            tokens: Lexer::new(src).peekable(),
        }
    }

    /// Parses the full line into an expression tree. The entire input must be
    /// consumed - anything left over after a complete expression is an error.
    pub fn parse(mut self) -> Result<Expr, Error> {
        let expr = self.expr()?;

        match self.tokens.next() {
            None => Ok(expr),
            Some(Ok((token, col))) => {
                Err(Error::TrailingInput(token.to_string().to_shared_str(), col))
            }
            Some(Err(err)) => Err(err),
        }
    }

    fn next_token(&mut self) -> Result<(Token, usize), Error> {
        match self.tokens.next() {
            Some(Ok(pair)) => Ok(pair),
            Some(Err(err)) => Err(err),
            None => Err(Error::UnexpectedEnd),
        }
    }

    fn peek_token(&mut self) -> Result<Option<Token>, Error> {
        match self.tokens.peek() {
            Some(Ok((token, _))) => Ok(Some(*token)),
            Some(Err(err)) => Err(err.clone()),
            None => Ok(None),
        }
    }

    fn expr(&mut self) -> Result<Expr, Error> {
        let mut lhs = self.term()?;

        loop {
            let op = match self.peek_token()? {
                Some(Token::Plus) => BinOp::Add,
                Some(Token::Minus) => BinOp::Sub,
                _ => return Ok(lhs),
            };

            self.tokens.next();
            let rhs = self.term()?;
            lhs = Expr::Bin(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn term(&mut self) -> Result<Expr, Error> {
        let mut lhs = self.factor()?;

        loop {
            let op = match self.peek_token()? {
                Some(Token::Star) => BinOp::Mul,
                Some(Token::Slash) => BinOp::Div,
                _ => return Ok(lhs),
            };

            self.tokens.next();
            let rhs = self.factor()?;
            lhs = Expr::Bin(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn factor(&mut self) -> Result<Expr, Error> {
        let (token, col) = self.next_token()?;

        match token {
            Token::Number(n) => Ok(Expr::Number(n)),
            Token::Minus => Ok(Expr::Neg(Box::new(self.factor()?))),
            Token::LParen => {
                let expr = self.expr()?;

                match self.next_token()? {
                    (Token::RParen, _) => Ok(expr),
                    (token, col) => Err(Error::UnexpectedToken(
                        token.to_string().to_shared_str(),
                        col,
                    )),
                }
            }
            token => Err(Error::UnexpectedToken(
                token.to_string().to_shared_str(),
                col,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use flexstr::shared_str;
    use pretty_assertions::assert_eq;

    use crate::ast::BinOp::*;
    use crate::ast::Expr::{self, Bin, Neg, Number};
    use crate::parser::Parser;
    use crate::Error;

    fn parse(src: &str) -> Result<Expr, Error> {
        Parser::new(src).parse()
    }

    fn num(n: i64) -> Box<Expr> {
        Box::new(Number(n))
    }

    #[test]
    fn precedence() {
        let expected = Bin(Add, num(1), Box::new(Bin(Mul, num(2), num(3))));
        assert_eq!(parse("1 + 2 * 3").unwrap(), expected);
    }

    #[test]
    fn parens_override_precedence() {
        let expected = Bin(Mul, Box::new(Bin(Add, num(1), num(2))), num(3));
        assert_eq!(parse("(1 + 2) * 3").unwrap(), expected);
    }

    #[test]
    fn left_associativity() {
        let expected = Bin(Sub, Box::new(Bin(Sub, num(1), num(2))), num(3));
        assert_eq!(parse("1 - 2 - 3").unwrap(), expected);

        let expected = Bin(Div, Box::new(Bin(Div, num(8), num(4))), num(2));
        assert_eq!(parse("8 / 4 / 2").unwrap(), expected);
    }

    #[test]
    fn unary_minus() {
        let expected = Bin(Mul, Box::new(Neg(num(1))), num(2));
        assert_eq!(parse("-1 * 2").unwrap(), expected);

        // Double negation nests
        assert_eq!(parse("--3").unwrap(), Neg(Box::new(Neg(num(3)))));
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse(""), Err(Error::UnexpectedEnd));
    }

    #[test]
    fn dangling_operator() {
        assert_eq!(parse("1 +"), Err(Error::UnexpectedEnd));
    }

    #[test]
    fn unclosed_paren() {
        assert_eq!(parse("(1 + 2"), Err(Error::UnexpectedEnd));
    }

    #[test]
    fn misplaced_operator() {
        assert_eq!(
            parse("* 2"),
            Err(Error::UnexpectedToken(shared_str!("*"), 0))
        );
    }

    #[test]
    fn trailing_input() {
        assert_eq!(
            parse("1 + 2 3"),
            Err(Error::TrailingInput(shared_str!("3"), 6))
        );
        assert_eq!(
            parse("1)"),
            Err(Error::TrailingInput(shared_str!(")"), 1))
        );
    }
}
