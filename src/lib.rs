//! `ac`: an architectural calculator over exact rationals, with
//! lengths shown in feet and inches.

pub mod display;
pub mod error;
pub mod expr;
pub mod number;
pub mod parsing;
pub mod runner;
pub mod units;
pub mod value;

pub use error::EvalError;
pub use expr::{evaluate, parse};
pub use value::Value;
