//! The `ac` binary.

use std::process::ExitCode;

fn main() -> ExitCode {
  ac::runner::run_application()
}
