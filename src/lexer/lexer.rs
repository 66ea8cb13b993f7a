use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// The kind of multi-character lexeme currently being accumulated.
///
/// `Colon`, `Slash` and `Star` exist because `:=`, `//` and `**` need one
/// character of lookahead beyond the character that opened them; no token in
/// the language is longer than two characters, so one character is always
/// enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexemeClass {
    None,
    Number,
    Identifier,
    Colon,
    Slash,
    Star,
}

pub struct Lexer {
    tokens: Vec<Token>,
    buffer: String,
    class: LexemeClass,
    lexeme_start: u32,
    pos: u32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("<input>"))
        };

        Lexer {
            tokens: vec![],
            buffer: String::new(),
            class: LexemeClass::None,
            lexeme_start: 0,
            pos: 0,
            file: file_name,
        }
    }

    fn position(&self, at: u32) -> Position {
        Position(at, Rc::clone(&self.file))
    }

    fn span(&self, start: u32, end: u32) -> Span {
        Span {
            start: self.position(start),
            end: self.position(end),
        }
    }

    fn push(&mut self, kind: TokenKind, value: String, start: u32, end: u32) {
        let span = self.span(start, end);
        self.tokens.push(MK_TOKEN!(kind, value, span));
    }

    fn open(&mut self, class: LexemeClass, c: char) {
        self.class = class;
        self.lexeme_start = self.pos;
        self.buffer.clear();
        self.buffer.push(c);
    }

    /// Emits a synthetic two-character token (`:=`, `//` or `**`) whose
    /// second character is the one currently being scanned.
    fn push_pair(&mut self, kind: TokenKind, value: &str) {
        let start = self.lexeme_start;
        self.push(kind, String::from(value), start, start + 2);
        self.class = LexemeClass::None;
        self.buffer.clear();
    }

    /// Converts the accumulated buffer into a finished token and returns the
    /// scanner to the idle class. Each accumulating class has its own
    /// finalization rule; `Colon` never closes through here because a lone
    /// `:` is not a token.
    fn close(&mut self) {
        let value = std::mem::take(&mut self.buffer);
        let end = self.lexeme_start + value.len() as u32;

        let kind = match self.class {
            LexemeClass::Number => {
                if value.contains('.') {
                    TokenKind::Float
                } else {
                    TokenKind::Integer
                }
            }
            LexemeClass::Identifier => *RESERVED_LOOKUP
                .get(value.as_str())
                .unwrap_or(&TokenKind::Variable),
            LexemeClass::Slash | LexemeClass::Star => TokenKind::Operator,
            LexemeClass::None | LexemeClass::Colon => return,
        };

        self.push(kind, value, self.lexeme_start, end);
        self.class = LexemeClass::None;
    }

    /// Processes one input character: first decides whether it continues the
    /// in-progress lexeme, closing it if not, then classifies the character
    /// as the start of a fresh lexeme.
    fn step(&mut self, c: char) -> Result<(), Error> {
        match self.class {
            LexemeClass::Number => {
                if c.is_ascii_digit() {
                    self.buffer.push(c);
                    return Ok(());
                }
                if c == '.' {
                    if self.buffer.contains('.') {
                        return Err(Error::new(
                            ErrorImpl::SecondDecimalPoint {
                                token: format!("{}.", self.buffer),
                            },
                            self.position(self.pos),
                        ));
                    }
                    self.buffer.push(c);
                    return Ok(());
                }
                self.close();
            }
            LexemeClass::Identifier => {
                if c.is_ascii_lowercase() {
                    self.buffer.push(c);
                    return Ok(());
                }
                // A non-letter closes the identifier and opens a new lexeme;
                // it is not an error by itself.
                self.close();
            }
            LexemeClass::Colon => {
                if c == '=' {
                    self.push_pair(TokenKind::Assignment, ":=");
                    return Ok(());
                }
                return Err(Error::new(
                    ErrorImpl::IncompleteAssignment {
                        token: String::from(":"),
                    },
                    self.position(self.lexeme_start),
                ));
            }
            LexemeClass::Slash => {
                if c == '/' {
                    self.push_pair(TokenKind::Operator, "//");
                    return Ok(());
                }
                self.close();
            }
            LexemeClass::Star => {
                if c == '*' {
                    self.push_pair(TokenKind::Operator, "**");
                    return Ok(());
                }
                self.close();
            }
            LexemeClass::None => {}
        }

        self.open_from(c)
    }

    /// Classifies a character with no lexeme in progress.
    fn open_from(&mut self, c: char) -> Result<(), Error> {
        match c {
            ' ' | '\t' | '\n' | '\r' => Ok(()),
            '0'..='9' => {
                self.open(LexemeClass::Number, c);
                Ok(())
            }
            'a'..='z' => {
                self.open(LexemeClass::Identifier, c);
                Ok(())
            }
            ':' => {
                self.open(LexemeClass::Colon, c);
                Ok(())
            }
            '/' => {
                self.open(LexemeClass::Slash, c);
                Ok(())
            }
            '*' => {
                self.open(LexemeClass::Star, c);
                Ok(())
            }
            '(' => {
                self.push(TokenKind::LeftParen, String::from("("), self.pos, self.pos + 1);
                Ok(())
            }
            ')' => {
                self.push(TokenKind::RightParen, String::from(")"), self.pos, self.pos + 1);
                Ok(())
            }
            '{' => {
                self.push(TokenKind::LeftCurly, String::from("{"), self.pos, self.pos + 1);
                Ok(())
            }
            '}' => {
                self.push(TokenKind::RightCurly, String::from("}"), self.pos, self.pos + 1);
                Ok(())
            }
            // None of these is a prefix of a longer operator, so they emit
            // without an accumulation phase.
            '+' | '-' | '%' => {
                self.push(TokenKind::Operator, c.to_string(), self.pos, self.pos + 1);
                Ok(())
            }
            '.' => Err(Error::new(
                ErrorImpl::LeadingDecimalPoint {
                    token: String::from("."),
                },
                self.position(self.pos),
            )),
            _ => Err(Error::new(
                ErrorImpl::UnrecognisedCharacter {
                    character: c.to_string(),
                },
                self.position(self.pos),
            )),
        }
    }
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(file);

    // A trailing sentinel space forces the final lexeme to flush.
    for c in source.chars().chain(std::iter::once(' ')) {
        lex.step(c)?;
        lex.pos += 1;
    }

    Ok(lex.tokens)
}
