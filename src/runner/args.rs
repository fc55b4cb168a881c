//! Command-line arguments.

use clap::Parser;

/// Architectural calculator: exact arithmetic over feet, inches and
/// plain numbers.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "ac", version, about)]
pub struct Args {
  /// Show approximations and total inches alongside results.
  #[arg(short, long)]
  pub verbose: bool,

  /// Expression to evaluate. Words are joined with spaces. Starts an
  /// interactive session when omitted.
  #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
  pub expression: Vec<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_args() {
    let args = Args::try_parse_from(["ac", "-v", "9'", "-", "20\""]).unwrap();
    assert!(args.verbose);
    assert_eq!(args.expression, vec!["9'", "-", "20\""]);
  }

  #[test]
  fn test_leading_negative() {
    let args = Args::try_parse_from(["ac", "-1", "+", "2"]).unwrap();
    assert!(!args.verbose);
    assert_eq!(args.expression, vec!["-1", "+", "2"]);
  }

  #[test]
  fn test_no_expression() {
    let args = Args::try_parse_from(["ac"]).unwrap();
    assert!(args.expression.is_empty());
  }
}
