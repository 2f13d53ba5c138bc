//! Whitespace tokenizer producing the atoms the WKT grammar is built from.

use std::iter::Peekable;
use std::str::Chars;

use crate::error::SfgeoWktError;

/// Splits text into whitespace-delimited tokens, treating `(`, `)` and `,` as single-character
/// tokens regardless of surrounding whitespace.
///
/// One token of lookahead is available through [`TextReader::peek_token`].
pub struct TextReader<'a> {
    chars: Peekable<Chars<'a>>,
    peeked: Option<String>,
}

fn is_punctuation(c: char) -> bool {
    matches!(c, '(' | ')' | ',')
}

impl<'a> TextReader<'a> {
    /// Creates a reader over the given text.
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
            peeked: None,
        }
    }

    /// Reads the next token, or `None` at the end of the text.
    pub fn next_token(&mut self) -> Option<String> {
        if let Some(token) = self.peeked.take() {
            return Some(token);
        }
        self.scan_token()
    }

    /// Returns the next token without consuming it, or `None` at the end of the text.
    pub fn peek_token(&mut self) -> Option<&str> {
        if self.peeked.is_none() {
            self.peeked = self.scan_token();
        }
        self.peeked.as_deref()
    }

    /// Reads the next token and parses it as an `f64`.
    ///
    /// `NaN`, `Infinity` and `-Infinity` (case-insensitive) are valid numbers.
    pub fn next_double(&mut self) -> Result<f64, SfgeoWktError> {
        let token = self.next_token().ok_or(SfgeoWktError::UnexpectedEnd)?;
        token
            .parse()
            .map_err(|_| SfgeoWktError::InvalidNumber(token))
    }

    fn scan_token(&mut self) -> Option<String> {
        while self.chars.peek().is_some_and(|c| c.is_whitespace()) {
            self.chars.next();
        }

        let first = self.chars.next()?;
        if is_punctuation(first) {
            return Some(first.to_string());
        }

        let mut token = String::new();
        token.push(first);
        while let Some(&c) = self.chars.peek() {
            if c.is_whitespace() || is_punctuation(c) {
                break;
            }
            token.push(c);
            self.chars.next();
        }

        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        let mut reader = TextReader::new(text);
        let mut result = vec![];
        while let Some(token) = reader.next_token() {
            result.push(token);
        }
        result
    }

    #[test]
    fn punctuation_splits_without_whitespace() {
        assert_eq!(
            tokens("POINT(1.5 -2.5)"),
            vec!["POINT", "(", "1.5", "-2.5", ")"]
        );
        assert_eq!(
            tokens("LINESTRING (0 0,1 1)"),
            vec!["LINESTRING", "(", "0", "0", ",", "1", "1", ")"]
        );
    }

    #[test]
    fn peek_does_not_consume() {
        let mut reader = TextReader::new("POINT Z");
        assert_eq!(reader.peek_token(), Some("POINT"));
        assert_eq!(reader.peek_token(), Some("POINT"));
        assert_eq!(reader.next_token().as_deref(), Some("POINT"));
        assert_eq!(reader.next_token().as_deref(), Some("Z"));
        assert_eq!(reader.peek_token(), None);
        assert_eq!(reader.next_token(), None);
    }

    #[test]
    fn doubles_with_sign_and_exponent() {
        let mut reader = TextReader::new("1.5 -2.5e3 +7");
        assert_eq!(reader.next_double(), Ok(1.5));
        assert_eq!(reader.next_double(), Ok(-2500.0));
        assert_eq!(reader.next_double(), Ok(7.0));
    }

    #[test]
    fn non_finite_doubles() {
        let mut reader = TextReader::new("NaN Infinity -Infinity");
        assert!(reader.next_double().is_ok_and(|v| v.is_nan()));
        assert_eq!(reader.next_double(), Ok(f64::INFINITY));
        assert_eq!(reader.next_double(), Ok(f64::NEG_INFINITY));
    }

    #[test]
    fn invalid_double_is_an_error() {
        let mut reader = TextReader::new("abc");
        assert_eq!(
            reader.next_double(),
            Err(SfgeoWktError::InvalidNumber("abc".into()))
        );

        let mut empty = TextReader::new("  ");
        assert_eq!(empty.next_double(), Err(SfgeoWktError::UnexpectedEnd));
    }
}
