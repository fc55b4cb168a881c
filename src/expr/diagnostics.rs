//! Error bookkeeping for a single parse.

use crate::error::{MathError, SyntaxError};

/// Error accumulator threaded through the parser. It holds at most one
/// error per channel:
///
/// * the syntax error at the greatest source offset seen so far, and
/// * the first math error seen.
///
/// Recording an error never aborts the parse, so parsing can keep
/// going after a math error and still find later syntax errors.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
  syntax: Option<SyntaxError>,
  math: Option<MathError>,
}

impl Diagnostics {
  pub fn new() -> Self {
    Self::default()
  }

  /// Records `error` unless a syntax error at the same or a later
  /// offset is already recorded.
  pub fn syntax_error(&mut self, error: SyntaxError) {
    if let Some(existing) = &self.syntax {
      if existing.offset >= error.offset {
        tracing::trace!(kept = %existing, dropped = %error, "ignoring earlier syntax error");
        return;
      }
    }
    tracing::trace!(offset = ?error.offset, message = %error, "syntax error");
    self.syntax = Some(error);
  }

  /// Records `error` unless a math error is already recorded.
  pub fn math_error(&mut self, error: MathError) {
    if self.math.is_none() {
      tracing::trace!(message = %error, "math error");
      self.math = Some(error);
    }
  }

  /// Unwraps a math result, recording the error and falling back to
  /// `default` on failure.
  pub fn unwrap_math_or_else<T, F>(&mut self, result: Result<T, MathError>, default: F) -> T
  where F: FnOnce() -> T {
    match result {
      Ok(x) => x,
      Err(err) => {
        self.math_error(err);
        default()
      }
    }
  }

  pub fn has_syntax_error(&self) -> bool {
    self.syntax.is_some()
  }

  pub fn into_parts(self) -> (Option<SyntaxError>, Option<MathError>) {
    (self.syntax, self.math)
  }
}
