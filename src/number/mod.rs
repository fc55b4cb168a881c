//! Exact rational numbers. Every magnitude in the calculator is a
//! [`BigRational`]; this module adds literal parsing and the few
//! rendering helpers the formatter needs.

use num::{BigInt, BigRational, Integer, One, Signed, Zero};
use thiserror::Error;

use std::str::FromStr;

/// The arbitrary-precision fraction used for all arithmetic.
pub type Rational = BigRational;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("malformed number: {text}")]
pub struct ParseNumberError {
  pub text: String,
}

/// Parses a numeric literal exactly. Accepted forms are `<digits>`,
/// `<digits>.<digits>` (either side may be empty, but not both) and
/// `<digits>/<digits>` with a nonzero denominator. Decimal literals
/// are converted exactly, so `0.1` is precisely one tenth.
pub fn parse_literal(text: &str) -> Result<Rational, ParseNumberError> {
  let err = || ParseNumberError { text: text.to_owned() };

  if let Some((numer, denom)) = text.split_once('/') {
    let numer = parse_digits(numer).ok_or_else(err)?;
    let denom = parse_digits(denom).ok_or_else(err)?;
    if denom.is_zero() {
      return Err(err());
    }
    return Ok(Rational::new(numer, denom));
  }

  let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
  if whole.is_empty() && fraction.is_empty() {
    return Err(err());
  }
  let whole = if whole.is_empty() {
    BigInt::zero()
  } else {
    parse_digits(whole).ok_or_else(err)?
  };
  if fraction.is_empty() {
    return Ok(Rational::from_integer(whole));
  }
  let fraction_digits = parse_digits(fraction).ok_or_else(err)?;
  let scale = num::pow(BigInt::from(10), fraction.len());
  Ok(Rational::new(whole * &scale + fraction_digits, scale))
}

fn parse_digits(text: &str) -> Option<BigInt> {
  if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }
  BigInt::from_str(text).ok()
}

/// Helpers on [`Rational`] that `num` does not provide directly.
pub trait RationalExt {
  /// Floor division and the matching non-negative remainder (for a
  /// positive divisor), so that `self == quotient * divisor +
  /// remainder`.
  fn div_mod(&self, divisor: &Rational) -> (BigInt, Rational);

  /// Raises `self` to an integer power. Negative powers take the
  /// reciprocal, so `self` must be nonzero for them.
  fn powi(&self, exponent: i64) -> Rational;

  /// Renders `self` in decimal notation with exactly `places` digits
  /// after the point, rounding half away from zero.
  fn to_decimal_string(&self, places: usize) -> String;
}

impl RationalExt for Rational {
  fn div_mod(&self, divisor: &Rational) -> (BigInt, Rational) {
    let quotient = (self / divisor).floor();
    let remainder = self - &quotient * divisor;
    (quotient.to_integer(), remainder)
  }

  fn powi(&self, exponent: i64) -> Rational {
    let magnitude = usize::try_from(exponent.unsigned_abs()).unwrap_or(usize::MAX);
    let result = num::pow(self.clone(), magnitude);
    if exponent < 0 {
      result.recip()
    } else {
      result
    }
  }

  fn to_decimal_string(&self, places: usize) -> String {
    let scale = num::pow(BigInt::from(10), places);
    let half = Rational::new(BigInt::one(), BigInt::from(2));
    let rounded = (self.abs() * Rational::from_integer(scale.clone()) + half).floor().to_integer();
    let (whole, fraction) = rounded.div_rem(&scale);
    let sign = if self.is_negative() { "-" } else { "" };
    if places == 0 {
      format!("{sign}{whole}")
    } else {
      format!("{sign}{whole}.{:0>places$}", fraction.to_string())
    }
  }
}
