//! Expression evaluation: tokenize a line, then parse and evaluate it
//! in a single pass.

pub mod diagnostics;
pub mod parser;
pub mod tokenizer;

use crate::error::EvalError;
use crate::value::Value;
use parser::Parser;

/// Tokenizes and evaluates `input`.
///
/// A syntax error takes priority over a math error when both are
/// found.
pub fn parse(input: &str) -> Result<Value, EvalError> {
  let tokens = tokenizer::tokenize(input)?;
  tracing::trace!(count = tokens.len(), "tokenized input");
  let result = Parser::new(&tokens).parse().into_result();
  match &result {
    Ok(value) => tracing::debug!(%value, "evaluated {input:?}"),
    Err(err) => tracing::debug!(error = %err, offset = ?err.offset(), "failed to evaluate {input:?}"),
  }
  result
}

/// Evaluates `input` and renders the result.
pub fn evaluate(input: &str, verbose: bool) -> Result<String, EvalError> {
  parse(input).map(|value| value.format(verbose))
}
