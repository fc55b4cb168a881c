//! Line-editing interactive session.

use super::evaluate_and_print;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

pub const PROMPT: &str = "➤ ";

/// Reads and evaluates lines until end-of-input or interrupt.
/// Evaluation errors are reported and the session continues.
pub fn run_session(verbose: bool) -> anyhow::Result<()> {
  let mut editor = DefaultEditor::new()?;
  loop {
    match editor.readline(PROMPT) {
      Ok(line) => {
        editor.add_history_entry(line.as_str())?;
        evaluate_and_print(&line, verbose);
      }
      Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
        println!();
        return Ok(());
      }
      Err(err) => return Err(err.into()),
    }
  }
}
