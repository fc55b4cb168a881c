//! Terminal rendering of evaluation errors.

use crate::error::EvalError;

/// Formats an evaluation error for the terminal. When the error has a
/// source position, the input is echoed with a caret under the
/// offending character.
pub fn render_error(input: &str, err: &EvalError) -> String {
  let mut out = format!("error: {err}");
  if let Some(offset) = err.offset() {
    let spaces = " ".repeat(offset.column_in(input));
    out.push_str(&format!("\n\t{input}\n\t{spaces}^"));
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::{MathError, MathErrorKind, SyntaxError};
  use crate::parsing::source::SourceOffset;

  #[test]
  fn test_syntax_error_caret() {
    let err = EvalError::from(SyntaxError::new(SourceOffset(2), "expected end"));
    assert_eq!(render_error("1 1", &err), "error: expected end\n\t1 1\n\t  ^");
  }

  #[test]
  fn test_caret_counts_characters() {
    let err = EvalError::from(SyntaxError::new(SourceOffset(6), "unexpected token"));
    assert_eq!(render_error("1 ≈ ~", &err), "error: unexpected token\n\t1 ≈ ~\n\t    ^");
  }

  #[test]
  fn test_math_error_without_offset() {
    let err = EvalError::from(MathError::new(MathErrorKind::DivisionByZero));
    assert_eq!(render_error("1 / 0", &err), "error: division by zero");
  }
}
