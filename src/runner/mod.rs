//! Command-line entry point for the `ac` binary.

pub mod args;
pub mod interactive;
pub mod logging;
pub mod report;

use args::Args;
use crate::error::EvalError;
use crate::expr;

use clap::Parser;

use std::process::ExitCode;

/// Main entry-point, called from the `ac` binary.
pub fn run_application() -> ExitCode {
  let args = Args::parse();
  logging::init_logging();
  match run(&args) {
    Ok(code) => code,
    Err(err) => {
      eprintln!("error: {err:#}");
      ExitCode::FAILURE
    }
  }
}

/// Evaluates the expression given on the command line, or starts an
/// interactive session if there is none.
pub fn run(args: &Args) -> anyhow::Result<ExitCode> {
  if args.expression.is_empty() {
    interactive::run_session(args.verbose)?;
    return Ok(ExitCode::SUCCESS);
  }
  let line = args.expression.join(" ");
  if evaluate_and_print(&line, args.verbose) {
    Ok(ExitCode::SUCCESS)
  } else {
    Ok(ExitCode::FAILURE)
  }
}

/// Evaluates one line of input. Blank lines evaluate to nothing.
pub fn evaluate_line(line: &str, verbose: bool) -> Option<Result<String, EvalError>> {
  if line.trim().is_empty() {
    return None;
  }
  Some(expr::evaluate(line, verbose))
}

/// Evaluates `line`, printing the result on stdout or the diagnostic
/// on stderr. Returns false if evaluation failed.
pub fn evaluate_and_print(line: &str, verbose: bool) -> bool {
  match evaluate_line(line, verbose) {
    None => true,
    Some(Ok(text)) => {
      println!("{text}");
      true
    }
    Some(Err(err)) => {
      eprintln!("{}", report::render_error(line, &err));
      false
    }
  }
}
