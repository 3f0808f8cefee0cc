//! Splits WKT text into a single-token lookahead stream.

use std::fmt;

use crate::error::{CrsError, Result};

/// A lexical token.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    /// The contents of a `"..."` string, without the quotes.
    QuotedString(String),
    /// A bare identifier matching `[A-Za-z]\w*`: a keyword or an enumeration value.
    TypeString(String),
    Number(f64),
    Comma,
    /// `(` or `[`.
    Begin,
    /// `)` or `]`.
    End,
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::QuotedString(value) => write!(f, "\"{}\"", value),
            Token::TypeString(value) => f.write_str(value),
            Token::Number(value) => f.write_str(&crate::wkt::format_number(*value)),
            Token::Comma => f.write_str("','"),
            Token::Begin => f.write_str("opening bracket"),
            Token::End => f.write_str("closing bracket"),
            Token::Eof => f.write_str("end of input"),
        }
    }
}

fn is_numeric_char(c: u8) -> bool {
    c.is_ascii_digit() || matches!(c, b'+' | b'-' | b'.' | b'e' | b'E')
}

/// A cursor over WKT text that always holds the token at the cursor.
///
/// Round and square brackets are interchangeable at every depth, so `GEOGCS("x",...]` is
/// accepted.
pub(crate) struct Tokenizer {
    input: String,
    offset: usize,
    current: Token,
}

impl Tokenizer {
    /// Create a tokenizer positioned on the first token of `input`.
    pub(crate) fn new(input: impl Into<String>) -> Result<Self> {
        let mut tokenizer = Self {
            input: input.into(),
            offset: 0,
            current: Token::Eof,
        };
        tokenizer.next_token()?;
        Ok(tokenizer)
    }

    /// The token under the cursor.
    pub(crate) fn current(&self) -> &Token {
        &self.current
    }

    /// Advance to the next token and return the one that was current.
    pub(crate) fn next_token(&mut self) -> Result<Token> {
        let token = self.scan()?;
        Ok(std::mem::replace(&mut self.current, token))
    }

    fn scan(&mut self) -> Result<Token> {
        let bytes = self.input.as_bytes();
        while self.offset < bytes.len() && bytes[self.offset].is_ascii_whitespace() {
            self.offset += 1;
        }
        let start = self.offset;
        let Some(&c) = bytes.get(start) else {
            return Ok(Token::Eof);
        };

        match c {
            b',' => {
                self.offset += 1;
                Ok(Token::Comma)
            }
            b'(' | b'[' => {
                self.offset += 1;
                Ok(Token::Begin)
            }
            b')' | b']' => {
                self.offset += 1;
                Ok(Token::End)
            }
            b'"' => {
                let body = start + 1;
                match self.input[body..].find('"') {
                    Some(len) => {
                        self.offset = body + len + 1;
                        Ok(Token::QuotedString(self.input[body..body + len].to_string()))
                    }
                    None => Err(CrsError::parse(format!(
                        "Unterminated string starting at offset {}",
                        start
                    ))),
                }
            }
            c if c.is_ascii_alphabetic() => {
                let mut end = start + 1;
                while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_')
                {
                    end += 1;
                }
                self.offset = end;
                Ok(Token::TypeString(self.input[start..end].to_string()))
            }
            c if is_numeric_char(c) => {
                let mut end = start + 1;
                while end < bytes.len() && is_numeric_char(bytes[end]) {
                    end += 1;
                }
                self.offset = end;
                let text = &self.input[start..end];
                match lexical_core::parse::<f64>(text.as_bytes()) {
                    Ok(value) if value.is_finite() => Ok(Token::Number(value)),
                    _ => Err(CrsError::parse(format!(
                        "Bad number \"{}\" at offset {}",
                        text, start
                    ))),
                }
            }
            _ => {
                let ch = self.input[start..].chars().next().unwrap_or_default();
                Err(CrsError::parse(format!(
                    "Unexpected character '{}' at offset {}",
                    ch, start
                )))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn tokens(input: &str) -> Result<Vec<Token>> {
        let mut tokenizer = Tokenizer::new(input)?;
        let mut out = vec![];
        loop {
            let token = tokenizer.next_token()?;
            if token == Token::Eof {
                return Ok(out);
            }
            out.push(token);
        }
    }

    #[test]
    fn token_kinds() {
        assert_eq!(
            tokens(r#" AXIS[ "N" , NORTH ] "#).unwrap(),
            vec![
                Token::TypeString("AXIS".to_string()),
                Token::Begin,
                Token::QuotedString("N".to_string()),
                Token::Comma,
                Token::TypeString("NORTH".to_string()),
                Token::End,
            ]
        );
    }

    #[test]
    fn brackets_are_interchangeable() {
        assert_eq!(
            tokens("A(]B[)").unwrap(),
            vec![
                Token::TypeString("A".to_string()),
                Token::Begin,
                Token::End,
                Token::TypeString("B".to_string()),
                Token::Begin,
                Token::End,
            ]
        );
    }

    #[test]
    fn numbers() {
        assert_eq!(
            tokens("0.0174532925199433,-100000,1e-7,6.5E3").unwrap(),
            vec![
                Token::Number(0.0174532925199433),
                Token::Comma,
                Token::Number(-100000.0),
                Token::Comma,
                Token::Number(1e-7),
                Token::Comma,
                Token::Number(6500.0),
            ]
        );
    }

    #[test]
    fn identifiers_take_digits_and_underscores() {
        assert_eq!(
            tokens("VERT_CS LOCAL_DATUM2").unwrap(),
            vec![
                Token::TypeString("VERT_CS".to_string()),
                Token::TypeString("LOCAL_DATUM2".to_string()),
            ]
        );
    }

    #[test]
    fn malformed_number() {
        let err = tokens("UNIT[\"m\",1.2.3]").unwrap_err();
        assert!(matches!(err, CrsError::Parse(msg) if msg.contains("1.2.3")));
        assert!(tokens("-").is_err());
        assert!(tokens("1e").is_err());
    }

    #[test]
    fn numbers_must_be_finite() {
        let err = tokens("PARAMETER[\"a\",1e400]").unwrap_err();
        assert_eq!(
            err,
            CrsError::Parse("Bad number \"1e400\" at offset 14".to_string())
        );
        assert!(tokens("-1e400").is_err());
    }

    #[test]
    fn unterminated_string() {
        assert!(tokens("AXIS[\"N").is_err());
    }

    #[test]
    fn unexpected_character() {
        let err = tokens("AXIS{").unwrap_err();
        assert!(matches!(err, CrsError::Parse(msg) if msg.contains("offset 4")));
    }

    #[test]
    fn empty_input() {
        let tokenizer = Tokenizer::new("   ").unwrap();
        assert_eq!(tokenizer.current(), &Token::Eof);
    }
}
