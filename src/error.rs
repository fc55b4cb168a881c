//! Error types for evaluation: syntax errors and math errors.

use crate::parsing::source::SourceOffset;

use thiserror::Error;

/// A structural failure in the input: an unexpected character or
/// token, an unmatched parenthesis, or leftover input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct SyntaxError {
  pub offset: SourceOffset,
  pub message: String,
}

/// A semantic failure while evaluating a well-formed expression.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{kind}")]
pub struct MathError {
  pub kind: MathErrorKind,
  /// Position of the operator that failed, when known.
  pub offset: Option<SourceOffset>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum MathErrorKind {
  #[error("cannot add dimensions with different units: {left} and {right}")]
  DifferentUnits {
    left: String,
    right: String,
  },
  #[error("division by zero")]
  DivisionByZero,
}

/// The reason an expression produced no value. Syntax errors are
/// reported in preference to math errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
  #[error(transparent)]
  Syntax(#[from] SyntaxError),
  #[error(transparent)]
  Math(#[from] MathError),
}

impl SyntaxError {
  pub fn new(offset: SourceOffset, message: impl Into<String>) -> Self {
    Self { offset, message: message.into() }
  }
}

impl MathError {
  pub fn new(kind: MathErrorKind) -> Self {
    Self { kind, offset: None }
  }

  /// Attaches a source position to the error.
  pub fn at(self, offset: SourceOffset) -> Self {
    Self { offset: Some(offset), ..self }
  }
}

impl From<MathErrorKind> for MathError {
  fn from(kind: MathErrorKind) -> Self {
    MathError::new(kind)
  }
}

impl EvalError {
  pub fn offset(&self) -> Option<SourceOffset> {
    match self {
      EvalError::Syntax(err) => Some(err.offset),
      EvalError::Math(err) => err.offset,
    }
  }

  pub fn is_syntax_error(&self) -> bool {
    matches!(self, EvalError::Syntax(_))
  }
}
