use std::fmt;
use std::ops::Range;

use chumsky::error::Simple;
use chumsky::primitive::{choice, end, filter, just};
use chumsky::text::TextParser;
use chumsky::Parser;
use thiserror::Error;

use checker::formula::Ctl;

/// Longest accepted atom name, in bytes.
pub const MAX_ATOM_LEN: usize = 63;

/// Syntax error in a CTL formula. Positions are byte offsets into the
/// formula text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormulaError {
    #[error("unexpected character at offset {pos}")]
    UnexpectedCharacter { pos: usize },
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: &'static str, found: Token },
    #[error("trailing input at offset {pos} after a complete formula")]
    TrailingInput { pos: usize },
    #[error("atom at offset {pos} exceeds the {MAX_ATOM_LEN}-byte limit")]
    AtomTooLong { pos: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Atom(String),
    Not,
    And,
    Or,
    EX,
    AX,
    EF,
    AF,
    EG,
    AG,
    E,
    A,
    U,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Eof,
}

impl Token {
    // Keywords are matched exactly and before identifier treatment, so an
    // atom can never carry one of these names.
    fn classify(word: String) -> Token {
        match word.as_str() {
            "NOT" => Token::Not,
            "AND" => Token::And,
            "OR" => Token::Or,
            "EX" => Token::EX,
            "AX" => Token::AX,
            "EF" => Token::EF,
            "AF" => Token::AF,
            "EG" => Token::EG,
            "AG" => Token::AG,
            "E" => Token::E,
            "A" => Token::A,
            "U" => Token::U,
            _ => Token::Atom(word),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lexeme = match self {
            Token::Atom(name) => return write!(f, "'{name}'"),
            Token::Eof => return f.write_str("end of input"),
            Token::Not => "NOT",
            Token::And => "AND",
            Token::Or => "OR",
            Token::EX => "EX",
            Token::AX => "AX",
            Token::EF => "EF",
            Token::AF => "AF",
            Token::EG => "EG",
            Token::AG => "AG",
            Token::E => "E",
            Token::A => "A",
            Token::U => "U",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::LBracket => "[",
            Token::RBracket => "]",
        };
        write!(f, "'{lexeme}'")
    }
}

// expr      := or_expr
// or_expr   := and_expr ( "OR" and_expr )*
// and_expr  := unary ( "AND" unary )*
// unary     := "NOT" unary
//            | "EX" unary | "AX" unary
//            | "EF" unary | "AF" unary
//            | "EG" unary | "AG" unary
//            | "E" "[" expr "U" expr "]"
//            | "A" "[" expr "U" expr "]"
//            | "(" expr ")"
//            | IDENTIFIER
/// Parses a CTL formula.
///
/// The twelve keywords `NOT AND OR EX AX EF AF EG AG E A U` are reserved:
/// classification happens before identifier treatment, so an atomic
/// proposition can never carry one of these exact names. Matching is
/// case-sensitive; `not` or `af` are ordinary atoms.
pub fn parse_ctl(source: &str) -> Result<Ctl, FormulaError> {
    // The only way the lexer fails is a character outside the alphabet.
    let tokens = lex(source).map_err(|errors| {
        let pos = errors.iter().map(|e| e.span().start).min().unwrap_or(0);
        FormulaError::UnexpectedCharacter { pos }
    })?;

    for (token, pos) in &tokens {
        if let Token::Atom(name) = token {
            if name.len() > MAX_ATOM_LEN {
                return Err(FormulaError::AtomTooLong { pos: *pos });
            }
        }
    }

    let mut tokens = Tokens { tokens, pos: 0 };
    let formula = tokens.expr()?;
    match tokens.leftover() {
        Some(pos) => Err(FormulaError::TrailingInput { pos }),
        None => Ok(formula),
    }
}

// Whitespace-separated tokens, each tagged with its starting byte offset.
// A maximal alphanumeric/underscore run is one word; classification into
// keyword or atom happens on the whole word.
fn lex(source: &str) -> Result<Vec<(Token, usize)>, Vec<Simple<char>>> {
    let punct = choice((
        just('(').to(Token::LParen),
        just(')').to(Token::RParen),
        just('[').to(Token::LBracket),
        just(']').to(Token::RBracket),
    ));
    let word = filter(|c: &char| c.is_ascii_alphanumeric() || *c == '_')
        .repeated()
        .at_least(1)
        .collect::<String>()
        .map(Token::classify);
    let token = punct.or(word).map_with_span(|token, span: Range<usize>| (token, span.start));

    token.padded().repeated().then_ignore(end()).parse(source)
}

struct Tokens {
    tokens: Vec<(Token, usize)>,
    pos: usize,
}

impl Tokens {
    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|(token, _)| token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        match self.tokens.get(self.pos) {
            Some((token, _)) => {
                self.pos += 1;
                token.clone()
            }
            None => Token::Eof,
        }
    }

    fn expect(&mut self, expected: Token, description: &'static str) -> Result<(), FormulaError> {
        let found = self.advance();
        if found == expected {
            Ok(())
        } else {
            Err(FormulaError::UnexpectedToken { expected: description, found })
        }
    }

    fn leftover(&self) -> Option<usize> {
        self.tokens.get(self.pos).map(|&(_, pos)| pos)
    }

    fn expr(&mut self) -> Result<Ctl, FormulaError> {
        self.or_expr()
    }

    fn or_expr(&mut self) -> Result<Ctl, FormulaError> {
        let mut node = self.and_expr()?;
        while *self.peek() == Token::Or {
            self.advance();
            node = Ctl::Or(Box::new(node), Box::new(self.and_expr()?));
        }
        Ok(node)
    }

    fn and_expr(&mut self) -> Result<Ctl, FormulaError> {
        let mut node = self.unary()?;
        while *self.peek() == Token::And {
            self.advance();
            node = Ctl::And(Box::new(node), Box::new(self.unary()?));
        }
        Ok(node)
    }

    fn unary(&mut self) -> Result<Ctl, FormulaError> {
        match self.advance() {
            Token::Not => Ok(Ctl::Not(Box::new(self.unary()?))),
            Token::EX => Ok(Ctl::EX(Box::new(self.unary()?))),
            Token::AX => Ok(Ctl::AX(Box::new(self.unary()?))),
            Token::EF => Ok(Ctl::EF(Box::new(self.unary()?))),
            Token::AF => Ok(Ctl::AF(Box::new(self.unary()?))),
            Token::EG => Ok(Ctl::EG(Box::new(self.unary()?))),
            Token::AG => Ok(Ctl::AG(Box::new(self.unary()?))),
            Token::E => self.until(false),
            Token::A => self.until(true),
            Token::LParen => {
                let inner = self.expr()?;
                self.expect(Token::RParen, "')'")?;
                Ok(inner)
            }
            Token::Atom(name) => Ok(Ctl::Atom(name)),
            found => Err(FormulaError::UnexpectedToken { expected: "a formula", found }),
        }
    }

    // The path quantifier has already been consumed.
    fn until(&mut self, universal: bool) -> Result<Ctl, FormulaError> {
        self.expect(Token::LBracket, "'[' after the path quantifier")?;
        let left = Box::new(self.expr()?);
        self.expect(Token::U, "'U'")?;
        let right = Box::new(self.expr()?);
        self.expect(Token::RBracket, "']'")?;
        Ok(if universal { Ctl::AU(left, right) } else { Ctl::EU(left, right) })
    }
}
