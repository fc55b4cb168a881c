//! Rendering of values as text.
//!
//! Imperial lengths get mixed-radix feet and inches notation (see
//! [`imperial`]); everything else is printed as an exact ratio scaled
//! into the units named by its display hint.

pub mod imperial;

use crate::number::{Rational, RationalExt};
use crate::units::Unit;
use crate::value::Value;

use num::One;

/// Digits after the decimal point in approximations.
pub const DECIMAL_PLACES: usize = 5;

/// Rendered unit string and the amount of base units that one of the
/// rendered unit stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitLabel {
  pub text: String,
  pub scale: Rational,
}

/// Renders `value` according to its unit's display hint. In verbose
/// mode approximate and alternative forms are appended.
pub fn format(value: &Value, verbose: bool) -> String {
  if value.unit().is_imperial_length() {
    imperial::format_imperial_length(value.magnitude(), verbose)
  } else {
    format_generic(value.magnitude(), value.unit(), verbose)
  }
}

/// Builds the unit string for `unit`: numerator terms joined with
/// `·`, then `/` and the denominator terms. The dimensionless unit
/// has an empty label with scale one.
pub fn unit_label(unit: &Unit) -> UnitLabel {
  let mut scale = Rational::one();
  let mut numerator = Vec::new();
  let mut denominator = Vec::new();
  for term in unit.terms() {
    let power = term.exponent.abs();
    let symbol = term.base.symbol(unit.display());
    let text = if power == 1 { symbol.to_owned() } else { format!("{symbol}^{power}") };
    let factor = term.base.display_scale(unit.display())
      .map_or_else(Rational::one, |s| s.powi(power));
    if term.exponent > 0 {
      scale *= factor;
      numerator.push(text);
    } else {
      scale /= factor;
      denominator.push(text);
    }
  }

  let mut text = numerator.join("·");
  if !denominator.is_empty() {
    text.push('/');
    text.push_str(&denominator.join("·"));
  }
  UnitLabel { text, scale }
}

fn format_generic(magnitude: &Rational, unit: &Unit, verbose: bool) -> String {
  let label = unit_label(unit);
  let scaled = magnitude / &label.scale;

  let mut out = scaled.to_string();
  push_unit(&mut out, &label.text);
  if verbose && !scaled.is_integer() {
    out.push_str(" ≈ ");
    out.push_str(&scaled.to_decimal_string(DECIMAL_PLACES));
    push_unit(&mut out, &label.text);
  }
  out
}

fn push_unit(out: &mut String, unit_text: &str) {
  if !unit_text.is_empty() {
    out.push(' ');
    out.push_str(unit_text);
  }
}
