//! Miscellaneous utilities for scanning input strings.

pub mod source;
pub mod tokenizer;
