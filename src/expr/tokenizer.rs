//! Splits an input line into calculator tokens.

use crate::error::SyntaxError;
use crate::number::{self, Rational};
use crate::parsing::source::SourceOffset;
use crate::parsing::tokenizer::TokenizerState;

use regex::Regex;
use once_cell::sync::Lazy;

use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub data: TokenData,
  pub pos: SourceOffset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenData {
  Number(Rational),
  LeftParen,
  RightParen,
  Plus,
  Minus,
  Times,
  Divide,
  /// `'`
  Feet,
  /// `"`
  Inches,
  End,
}

/// A fraction, or else any run of digits and decimal points. Runs
/// that are not valid decimals are rejected after matching.
static NUMBER_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^(?:[0-9]+/[0-9]+|[0-9.]+)").unwrap());

/// Splits `input` into tokens, always ending with a
/// [`TokenData::End`] token positioned at the end of the input.
///
/// A fraction that directly follows a plain number is added into it,
/// so `1 1/2` is the single number 3/2.
pub fn tokenize(input: &str) -> Result<Vec<Token>, SyntaxError> {
  let mut state = TokenizerState::new(input);
  let mut tokens: Vec<Token> = Vec::new();
  let mut merge_fraction = false;

  loop {
    state.consume_spaces();
    let pos = state.current_pos();
    let Some(ch) = state.peek() else {
      break;
    };

    if ch.is_ascii_digit() || ch == '.' {
      let Some(m) = state.read_regex(&NUMBER_RE) else {
        return Err(SyntaxError::new(pos, "malformed number"));
      };
      let text = m.as_str();
      let value = number::parse_literal(text)
        .map_err(|_| SyntaxError::new(m.start(), "malformed number"))?;
      let is_fraction = text.contains('/');

      if is_fraction && merge_fraction {
        if let Some(Token { data: TokenData::Number(prev), .. }) = tokens.last_mut() {
          *prev += value;
          merge_fraction = false;
          continue;
        }
      }
      merge_fraction = !is_fraction;
      tokens.push(Token::new(TokenData::Number(value), m.start()));
      continue;
    }
    merge_fraction = false;

    let data = match ch {
      '(' => TokenData::LeftParen,
      ')' => TokenData::RightParen,
      '+' => TokenData::Plus,
      '-' => TokenData::Minus,
      '*' => TokenData::Times,
      '/' => TokenData::Divide,
      '\'' => TokenData::Feet,
      '"' => TokenData::Inches,
      _ => return Err(SyntaxError::new(pos, "unexpected token")),
    };
    state.advance_char();
    tokens.push(Token::new(data, pos));
  }

  tokens.push(Token::new(TokenData::End, state.current_pos()));
  Ok(tokens)
}

impl Token {
  pub fn new(data: TokenData, pos: SourceOffset) -> Self {
    Self { data, pos }
  }
}

impl TokenData {
  pub fn is_end(&self) -> bool {
    matches!(self, TokenData::End)
  }

  /// Short description for error messages: `end`, `number`, or the
  /// quoted punctuation character.
  pub fn describe(&self) -> String {
    match self {
      TokenData::End => "end".to_owned(),
      TokenData::Number(_) => "number".to_owned(),
      other => format!("`{other}`"),
    }
  }
}

impl Display for TokenData {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      TokenData::Number(n) => write!(f, "{n}"),
      TokenData::LeftParen => write!(f, "("),
      TokenData::RightParen => write!(f, ")"),
      TokenData::Plus => write!(f, "+"),
      TokenData::Minus => write!(f, "-"),
      TokenData::Times => write!(f, "*"),
      TokenData::Divide => write!(f, "/"),
      TokenData::Feet => write!(f, "'"),
      TokenData::Inches => write!(f, "\""),
      TokenData::End => Ok(()),
    }
  }
}
