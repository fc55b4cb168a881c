//! Feet-and-inches rendering for imperial lengths.
//!
//! A length is shown as whole feet, whole inches and a reduced
//! fraction of an inch, e.g. `7' 4 1/2"`. Verbose output adds the
//! total in inches and the nearest 1/32 inch.

use crate::number::{Rational, RationalExt};
use crate::units::conversion::{INCHES_PER_FOOT, INCHES_TO_BASE};

use num::{BigInt, One, Signed, Zero};

/// Verbose output rounds to this fraction of an inch.
pub const ROUNDING_DENOMINATOR: i64 = 32;

/// Renders a length, given in base units, as feet and inches.
pub fn format_imperial_length(magnitude: &Rational, verbose: bool) -> String {
  let inches = magnitude / &*INCHES_TO_BASE;
  if inches.is_zero() {
    return "0\"".to_owned();
  }
  let negative = inches.is_negative();
  let inches = inches.abs();

  let mut out = String::new();
  if negative {
    out.push('-');
  }
  push_feet_and_inches(&mut out, &inches);
  if !verbose {
    return out;
  }

  if inches >= Rational::from_integer(BigInt::from(INCHES_PER_FOOT)) {
    out.push_str(" = ");
    if negative {
      out.push('-');
    }
    push_whole_and_fraction(&mut out, &inches);
    out.push('"');
  }

  let grid = Rational::from_integer(BigInt::from(ROUNDING_DENOMINATOR));
  let ticks = &inches * &grid;
  if !ticks.is_integer() {
    let half = Rational::new(BigInt::one(), BigInt::from(2));
    let rounded = (ticks + half).floor() / &grid;
    out.push_str(" ≈ ");
    if negative && !rounded.is_zero() {
      out.push('-');
    }
    push_whole_and_fraction(&mut out, &rounded);
    out.push('"');
  }

  out
}

/// `inches` must be positive.
fn push_feet_and_inches(out: &mut String, inches: &Rational) {
  debug_assert!(inches.is_positive(), "expected a positive length, got {inches}");
  let (feet, remainder) = inches.div_mod(&Rational::from_integer(BigInt::from(INCHES_PER_FOOT)));
  if feet.is_positive() {
    out.push_str(&feet.to_string());
    out.push('\'');
    if remainder.is_zero() {
      return;
    }
    out.push(' ');
  }
  push_whole_and_fraction(out, &remainder);
  out.push('"');
}

/// Writes a non-negative value as `<whole> <n>/<d>`, leaving out
/// whichever part is zero. Zero itself is written as `0`.
fn push_whole_and_fraction(out: &mut String, value: &Rational) {
  let (whole, fraction) = value.div_mod(&Rational::one());
  if whole.is_positive() {
    out.push_str(&whole.to_string());
    if fraction.is_zero() {
      return;
    }
    out.push(' ');
  }
  out.push_str(&fraction.to_string());
}

#[cfg(test)]
mod tests {
  use super::*;

  fn inches(text: &str) -> Rational {
    let (numer, denom) = text.split_once('/').unwrap_or((text, "1"));
    Rational::new(numer.parse().unwrap(), denom.parse().unwrap()) * &*INCHES_TO_BASE
  }

  fn check(amount: &str, want: &str, want_neg: &str) {
    let value = inches(amount);
    assert_eq!(format_imperial_length(&value, true), want, "for {amount} inches");
    assert_eq!(format_imperial_length(&-value, true), want_neg, "for -{amount} inches");
  }

  #[test]
  fn test_verbose() {
    check("0", "0\"", "0\"");
    check("1", "1\"", "-1\"");
    check("1/2", "1/2\"", "-1/2\"");
    check("3/2", "1 1/2\"", "-1 1/2\"");
    check("12", "1' = 12\"", "-1' = -12\"");
    check("13", "1' 1\" = 13\"", "-1' 1\" = -13\"");
    check("1/128", "1/128\" ≈ 0\"", "-1/128\" ≈ 0\"");
    check("3/128", "3/128\" ≈ 1/32\"", "-3/128\" ≈ -1/32\"");
  }

  #[test]
  fn test_terse() {
    assert_eq!(format_imperial_length(&inches("88"), false), "7' 4\"");
    assert_eq!(format_imperial_length(&inches("195/4"), false), "4' 3/4\"");
    assert_eq!(format_imperial_length(&inches("24"), false), "2'");
    assert_eq!(format_imperial_length(&inches("-51/2"), false), "-2' 1 1/2\"");
    assert_eq!(format_imperial_length(&inches("1/3"), false), "1/3\"");
  }

  #[test]
  fn test_verbose_combined() {
    assert_eq!(
      format_imperial_length(&inches("97/3"), true),
      "2' 8 1/3\" = 32 1/3\" ≈ 32 11/32\"",
    );
  }

  #[test]
  fn test_rounds_half_up() {
    // 1/64 sits exactly between 0 and 1/32.
    assert_eq!(format_imperial_length(&inches("1/64"), true), "1/64\" ≈ 1/32\"");
    assert_eq!(format_imperial_length(&inches("3/64"), true), "3/64\" ≈ 1/16\"");
  }

  #[test]
  fn test_exact_32nds_have_no_approximation() {
    assert_eq!(format_imperial_length(&inches("5/32"), true), "5/32\"");
  }
}
