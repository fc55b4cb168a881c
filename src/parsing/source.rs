//! Positions within the evaluated input.

use std::ops::AddAssign;

/// Thin wrapper around `usize` that represents a byte position in the
/// evaluated input string. Used to place the caret under a faulty
/// character when reporting errors.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceOffset(pub usize);

impl SourceOffset {
  /// The number of characters (not bytes) in `input` that precede
  /// this offset. Offsets past the end, or inside a multi-byte
  /// character, count the whole prefix that is still valid.
  pub fn column_in(self, input: &str) -> usize {
    let mut end = self.0.min(input.len());
    while !input.is_char_boundary(end) {
      end -= 1;
    }
    input[..end].chars().count()
  }
}

impl AddAssign<usize> for SourceOffset {
  fn add_assign(&mut self, rhs: usize) {
    self.0 += rhs
  }
}
