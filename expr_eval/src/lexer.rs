use std::iter::Peekable;
use std::str::CharIndices;

use flexstr::ToSharedStr;

use crate::token::Token;
use crate::Error;

/// Splits an expression line into [Token]s paired with the byte column where
/// each one starts. Whitespace separates tokens and is otherwise ignored.
pub struct Lexer<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
}

impl<'src> Lexer<'src> {
    /// Creates a new `Lexer` over the given line
    #[inline]
    pub fn new(src: &'src str) -> Lexer<'src> {
        Lexer {
            src,
            chars: src.char_indices().peekable(),
        }
    }

    fn lex_number(&mut self, start: usize) -> Result<Token, Error> {
        let mut end = start + 1;

        while let Some(&(idx, c)) = self.chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            end = idx + 1;
            self.chars.next();
        }

        let text = &self.src[start..end];
        match text.parse::<i64>() {
            Ok(value) => Ok(Token::Number(value)),
            Err(_) => Err(Error::NumberTooLarge(text.to_shared_str(), start)),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<(Token, usize), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        // consume input until we find a token
        loop {
            let (idx, c) = self.chars.next()?;
            let token = match c {
                c if c.is_whitespace() => continue,
                c if c.is_ascii_digit() => {
                    return Some(self.lex_number(idx).map(|token| (token, idx)))
                }
                '+' => Token::Plus,
                '-' => Token::Minus,
                '*' => Token::Star,
                '/' => Token::Slash,
                '(' => Token::LParen,
                ')' => Token::RParen,
                c => return Some(Err(Error::UnexpectedChar(c, idx))),
            };
            return Some(Ok((token, idx)));
        }
    }
}
