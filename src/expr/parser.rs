//! Recursive-descent parser that evaluates as it parses.
//!
//! Grammar, from lowest to highest precedence:
//!
//! ```text
//! expr    := add_expr END
//! add_expr := mul_expr (('+' | '-') mul_expr)*
//! mul_expr := num_expr (('*' | '/') num_expr)*
//! num_expr := '(' add_expr ')' | number | '-' num_expr
//! number  := N | N '\'' [N '"'] | N '"'
//! ```

use super::diagnostics::Diagnostics;
use super::tokenizer::{Token, TokenData};
use crate::error::{EvalError, MathError, SyntaxError};
use crate::number::Rational;
use crate::parsing::source::SourceOffset;
use crate::value::Value;

/// Deepest nesting of parentheses and unary minus accepted before
/// parsing gives up.
pub const MAX_DEPTH: usize = 128;

/// Parser over a token stream produced by
/// [`tokenize`](super::tokenizer::tokenize).
#[derive(Debug, Clone)]
pub struct Parser<'a> {
  tokens: &'a [Token],
  cursor: usize,
  /// Number of `num_expr` calls currently active.
  depth: usize,
  /// Returned for any lookahead past the last token.
  end: Token,
  diagnostics: Diagnostics,
}

/// Everything a parse produced. `value` is only meaningful when both
/// error slots are empty.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
  pub value: Value,
  pub syntax_error: Option<SyntaxError>,
  pub math_error: Option<MathError>,
}

impl<'a> Parser<'a> {
  pub fn new(tokens: &'a [Token]) -> Self {
    let end_pos = tokens.last().map_or(SourceOffset(0), |t| t.pos);
    Self {
      tokens,
      cursor: 0,
      depth: 0,
      end: Token::new(TokenData::End, end_pos),
      diagnostics: Diagnostics::new(),
    }
  }

  /// Parses and evaluates a whole expression.
  pub fn parse(mut self) -> ParseOutcome {
    let value = self.add_expr();
    let trailing = self.peek();
    if !trailing.data.is_end() {
      let pos = trailing.pos;
      self.syntax_error(pos, "expected end");
    }
    let (syntax_error, math_error) = self.diagnostics.into_parts();
    ParseOutcome { value, syntax_error, math_error }
  }

  fn add_expr(&mut self) -> Value {
    let mut x = self.mul_expr();
    while !self.diagnostics.has_syntax_error() {
      let op = self.peek();
      let (pos, negate) = match op.data {
        TokenData::Plus => (op.pos, false),
        TokenData::Minus => (op.pos, true),
        _ => break,
      };
      self.advance();
      let mut y = self.mul_expr();
      if negate {
        y = -y;
      }
      let sum = x.checked_add(&y).map_err(|err| err.at(pos));
      x = self.diagnostics.unwrap_math_or_else(sum, || x);
    }
    x
  }

  fn mul_expr(&mut self) -> Value {
    let mut x = self.num_expr();
    while !self.diagnostics.has_syntax_error() {
      let op = self.peek();
      let (pos, divide) = match op.data {
        TokenData::Times => (op.pos, false),
        TokenData::Divide => (op.pos, true),
        _ => break,
      };
      self.advance();
      let y = self.num_expr();
      x = if divide {
        let quotient = x.checked_div(&y).map_err(|err| err.at(pos));
        self.diagnostics.unwrap_math_or_else(quotient, || x)
      } else {
        x * y
      };
    }
    x
  }

  fn num_expr(&mut self) -> Value {
    if self.depth > MAX_DEPTH {
      let pos = self.peek().pos;
      self.syntax_error(pos, "expression too deeply nested");
      return Value::zero();
    }
    self.depth += 1;
    let value = self.operand();
    self.depth -= 1;
    value
  }

  fn operand(&mut self) -> Value {
    let tok = self.peek().clone();
    match tok.data {
      TokenData::End => {
        self.syntax_error(tok.pos, "unexpected end");
        Value::zero()
      }
      TokenData::LeftParen => {
        self.advance();
        let x = self.add_expr();
        let close = self.peek();
        if matches!(close.data, TokenData::RightParen) {
          self.advance();
        } else {
          let pos = close.pos;
          self.syntax_error(pos, "expected `)`");
        }
        x
      }
      TokenData::Number(n) => {
        self.advance();
        self.number(n)
      }
      TokenData::Minus => {
        self.advance();
        -self.num_expr()
      }
      other => {
        self.syntax_error(tok.pos, format!("unexpected {}", other.describe()));
        Value::zero()
      }
    }
  }

  /// Continues a number literal whose leading `N` has already been
  /// consumed.
  fn number(&mut self, n: Rational) -> Value {
    match self.peek().data {
      TokenData::Feet => {
        self.advance();
        match self.inches_after_feet() {
          Some(inches) => {
            self.advance();
            self.advance();
            Value::imperial_length(&n, &inches)
          }
          None => Value::feet(&n),
        }
      }
      TokenData::Inches => {
        self.advance();
        Value::inches(&n)
      }
      _ => Value::dimensionless(n),
    }
  }

  /// The `N` of a following `N "` pair, if present.
  fn inches_after_feet(&self) -> Option<Rational> {
    match (&self.peek_nth(0).data, &self.peek_nth(1).data) {
      (TokenData::Number(inches), TokenData::Inches) => Some(inches.clone()),
      _ => None,
    }
  }

  fn peek(&self) -> &Token {
    self.peek_nth(0)
  }

  fn peek_nth(&self, n: usize) -> &Token {
    self.tokens.get(self.cursor + n).unwrap_or(&self.end)
  }

  /// Moves past the current token. The cursor never moves past an
  /// end token.
  fn advance(&mut self) {
    if !self.peek().data.is_end() {
      self.cursor += 1;
    }
  }

  fn syntax_error(&mut self, pos: SourceOffset, message: impl Into<String>) {
    self.diagnostics.syntax_error(SyntaxError::new(pos, message));
  }
}

impl ParseOutcome {
  pub fn into_result(self) -> Result<Value, EvalError> {
    match (self.syntax_error, self.math_error) {
      (Some(err), _) => Err(err.into()),
      (None, Some(err)) => Err(err.into()),
      (None, None) => Ok(self.value),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::MathErrorKind;
  use crate::expr::tokenizer::tokenize;

  fn outcome(input: &str) -> ParseOutcome {
    let tokens = tokenize(input).unwrap();
    Parser::new(&tokens).parse()
  }

  fn p(input: &str, want: &str) {
    let value = outcome(input).into_result().unwrap_or_else(|err| panic!("parse({input:?}) failed: {err}"));
    assert_eq!(value.format(false), want, "parse({input:?})");
  }

  fn syntax(input: &str, pos: usize, message: &str) {
    let outcome = outcome(input);
    assert_eq!(
      outcome.syntax_error,
      Some(SyntaxError::new(SourceOffset(pos), message)),
      "parse({input:?})",
    );
  }

  #[test]
  fn test_parse_number() {
    p("0", "0");
    p("1", "1");
    p("1/2", "1/2");
    p("1 1/2", "3/2");
    p("2.5", "5/2");
  }

  #[test]
  fn test_parse_imperial() {
    p("1'", "1'");
    p("1\"", "1\"");
    p("1' 1\"", "1' 1\"");
    p("0'", "0\"");
    p("1 1/2\"", "1 1/2\"");
    p("6' 13\"", "7' 1\"");
  }

  #[test]
  fn test_parse_order() {
    p("1 + 2 * 3", "7");
    p("2 * 3 + 4", "10");
    p("2 * (3 + 4)", "14");
    p("(((1)))", "1");
  }

  #[test]
  fn test_parse_associativity() {
    p("5 - 1 - 1", "3");
    p("12 / 4 / 3", "1");
    p("2 / 4 * 2", "1");
  }

  #[test]
  fn test_parse_unary() {
    p("-1", "-1");
    p("--1", "1");
    p("1 + -1", "0");
    p("-(1)", "-1");
    p("-1 * 2", "-2");
    p("- 2 - -3", "1");
  }

  #[test]
  fn test_parse_units() {
    p("9' - 20\"", "7' 4\"");
    p("8' 1 1/2\" / 2", "4' 3/4\"");
    p("2 * 3'", "6'");
    p("3' * 2", "6'");
    p("1' / 1\"", "12");
    p("(1' + 6\") / 3", "6\"");
  }

  #[test]
  fn test_parse_unit_products() {
    p("1' * 1'", "1 ft^2");
    p("3' * 6\"", "3/2 ft^2");
    p("1 / 2'", "1/2 /ft");
    p("1' * 1' / 1'", "1'");
  }

  #[test]
  fn test_syntax_errors() {
    syntax("1 1", 2, "expected end");
    syntax("1 +", 3, "unexpected end");
    syntax("(1", 2, "expected `)`");
    syntax("1 + +", 4, "unexpected `+`");
    syntax(")", 0, "unexpected `)`");
    syntax("", 0, "unexpected end");
    syntax("2 * '", 4, "unexpected `'`");
    syntax("(1 +", 4, "unexpected end");
  }

  #[test]
  fn test_feet_then_bare_fraction_is_not_inches() {
    syntax("1' 1/2", 3, "expected end");
  }

  #[test]
  fn test_feet_then_number_without_inches_mark() {
    syntax("1' 6", 3, "expected end");
  }

  #[test]
  fn test_math_errors() {
    let outcome = outcome("1' + 1");
    assert_eq!(outcome.syntax_error, None);
    let err = outcome.math_error.unwrap();
    assert_eq!(err.to_string(), "cannot add dimensions with different units: 1' and 1");
    assert_eq!(err.offset, Some(SourceOffset(3)));

    let err = self::outcome("1 / 0").math_error.unwrap();
    assert_eq!(err.kind, MathErrorKind::DivisionByZero);
    assert_eq!(err.offset, Some(SourceOffset(2)));

    let err = self::outcome("1 / (2 - 2)").math_error.unwrap();
    assert_eq!(err.kind, MathErrorKind::DivisionByZero);
  }

  #[test]
  fn test_first_math_error_is_kept() {
    let err = outcome("1 / 0 + 1'").math_error.unwrap();
    assert_eq!(err.kind, MathErrorKind::DivisionByZero);
    assert_eq!(err.offset, Some(SourceOffset(2)));
  }

  #[test]
  fn test_math_error_does_not_hide_later_syntax_error() {
    let outcome = outcome("1 / 0 )");
    assert_eq!(outcome.math_error.map(|e| e.kind), Some(MathErrorKind::DivisionByZero));
    assert_eq!(outcome.syntax_error, Some(SyntaxError::new(SourceOffset(6), "expected end")));
    assert!(matches!(
      self::outcome("1' + 1 1").into_result(),
      Err(EvalError::Syntax(_)),
    ));
  }

  #[test]
  fn test_nesting_at_limit() {
    let input = format!("{}1{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
    p(&input, "1");
    p(&format!("{}1", "-".repeat(MAX_DEPTH)), "1");
  }

  #[test]
  fn test_deep_parens() {
    let input = format!("{}1{}", "(".repeat(50_000), ")".repeat(50_000));
    syntax(&input, MAX_DEPTH + 1, "expression too deeply nested");
  }

  #[test]
  fn test_deep_unary_minus() {
    let input = format!("{}1", "-".repeat(100_000));
    syntax(&input, MAX_DEPTH + 1, "expression too deeply nested");
    syntax(&format!("1 + {input}"), MAX_DEPTH + 5, "expression too deeply nested");
  }

  #[test]
  fn test_empty_token_stream() {
    let outcome = Parser::new(&[]).parse();
    assert_eq!(outcome.syntax_error, Some(SyntaxError::new(SourceOffset(0), "unexpected end")));
    assert_eq!(outcome.math_error, None);
  }
}
