//! Forward-only cursor over an input string.

use super::source::SourceOffset;

use regex::Regex;
use once_cell::sync::Lazy;

/// Cursor over an input string. The cursor only ever moves forward,
/// and it always sits on a character boundary.
#[derive(Debug, Clone)]
pub struct TokenizerState<'a> {
  input: &'a str,
  position: SourceOffset,
}

/// A substring consumed by a [`TokenizerState`], together with the
/// position at which it started.
#[derive(Debug, Clone)]
pub struct TokenizerMatch<'a> {
  matched_str: &'a str,
  start: SourceOffset,
}

/// Only ASCII whitespace separates tokens; anything else is an
/// unexpected character.
static ASCII_SPACES_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[\t\n\x0B\x0C\r ]*").unwrap());

impl<'a> TokenizerState<'a> {
  pub fn new(input: &'a str) -> Self {
    Self {
      input,
      position: SourceOffset(0),
    }
  }

  pub fn peek(&self) -> Option<char> {
    self.input.chars().next()
  }

  pub fn current_pos(&self) -> SourceOffset {
    self.position
  }

  /// Advances the position of `self` by `amount` bytes, returning the
  /// skipped portion. This method never advances beyond the end of
  /// the input. `amount` must land on a character boundary.
  pub fn advance(&mut self, amount: usize) -> TokenizerMatch<'a> {
    let amount = amount.min(self.input.len());
    let start = self.position;
    let (prefix, suffix) = self.input.split_at(amount);
    self.position += amount;
    self.input = suffix;
    TokenizerMatch { matched_str: prefix, start }
  }

  /// Consumes the next character, if any.
  pub fn advance_char(&mut self) -> Option<TokenizerMatch<'a>> {
    let ch = self.peek()?;
    Some(self.advance(ch.len_utf8()))
  }

  /// If the current position of the string matches the given regex,
  /// returns the matched string and advances the tokenizer state. If
  /// not, returns `None`.
  ///
  /// The regex MUST be anchored at the start of the input. A match
  /// anywhere else is treated as no match.
  pub fn read_regex(&mut self, regex: &Regex) -> Option<TokenizerMatch<'a>> {
    let m = regex.find(self.input)?;
    if m.start() != 0 {
      return None;
    }
    Some(self.advance(m.end()))
  }

  pub fn consume_spaces(&mut self) {
    self.read_regex(&ASCII_SPACES_RE);
  }
}

impl<'h> TokenizerMatch<'h> {
  pub fn as_str(&self) -> &'h str {
    self.matched_str
  }

  pub fn start(&self) -> SourceOffset {
    self.start
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_advance_positions() {
    let mut state = TokenizerState::new("abcdefg");

    let m = state.advance(3);
    assert_eq!(m.as_str(), "abc");
    assert_eq!(m.start(), SourceOffset(0));
    assert_eq!(state.current_pos(), SourceOffset(3));

    let m = state.advance(99);
    assert_eq!(m.as_str(), "defg");
    assert_eq!(m.start(), SourceOffset(3));
    assert_eq!(state.current_pos(), SourceOffset(7));

    let m = state.advance(99);
    assert_eq!(m.as_str(), "");
    assert_eq!(m.start(), SourceOffset(7));
    assert_eq!(state.peek(), None);
  }

  #[test]
  fn test_advance_char_multibyte() {
    let mut state = TokenizerState::new("≈1");
    let m = state.advance_char().unwrap();
    assert_eq!(m.as_str(), "≈");
    assert_eq!(state.current_pos(), SourceOffset(3));
    assert_eq!(state.peek(), Some('1'));
    state.advance_char().unwrap();
    assert!(state.advance_char().is_none());
  }

  #[test]
  fn test_read_regex() {
    let re = Regex::new(r"^[0-9]+").unwrap();
    let mut state = TokenizerState::new("123 456");
    let m = state.read_regex(&re).unwrap();
    assert_eq!(m.as_str(), "123");
    assert_eq!(state.current_pos(), SourceOffset(3));

    // Unanchored hits further along do not count.
    let re = Regex::new(r"[0-9]+").unwrap();
    assert!(state.read_regex(&re).is_none());
    assert_eq!(state.current_pos(), SourceOffset(3));
  }

  #[test]
  fn test_consume_spaces() {
    let mut state = TokenizerState::new(" \t\r\n\x0B\x0Cabc  def");
    state.consume_spaces();
    assert_eq!(state.current_pos(), SourceOffset(6));

    // Second one has no effect, since there are no spaces to consume.
    state.consume_spaces();
    assert_eq!(state.current_pos(), SourceOffset(6));
  }

  #[test]
  fn test_consume_spaces_ascii_only() {
    // U+00A0 is whitespace to Unicode but not to the calculator.
    let mut state = TokenizerState::new("\u{A0}1");
    state.consume_spaces();
    assert_eq!(state.current_pos(), SourceOffset(0));
  }
}
