//! Base dimensions and the terms units are built from.

use super::conversion::FEET_TO_BASE;
use super::unit::DisplayHint;

use num::BigRational;

/// Dimensions available for units to represent. A [`Unit`] is a
/// formal product and quotient of these.
///
/// The declaration order is the sort order of terms inside a unit,
/// and unit equality relies on it.
///
/// [`Unit`]: super::unit::Unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BaseDimension {
  /// Stored in metres.
  Length,
}

/// A base dimension raised to a nonzero integer power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitTerm {
  pub base: BaseDimension,
  pub exponent: i64,
}

impl BaseDimension {
  /// The symbol used when rendering this dimension under the given
  /// display hint.
  pub fn symbol(self, display: DisplayHint) -> &'static str {
    match (self, display) {
      (BaseDimension::Length, DisplayHint::Imperial) => "ft",
      (BaseDimension::Length, DisplayHint::Default | DisplayHint::Metric) => "m",
    }
  }

  /// The amount of the base unit that one displayed [`symbol`] stands
  /// for, or `None` if the symbol is the base unit itself.
  ///
  /// [`symbol`]: BaseDimension::symbol
  pub fn display_scale(self, display: DisplayHint) -> Option<&'static BigRational> {
    match (self, display) {
      (BaseDimension::Length, DisplayHint::Imperial) => Some(&*FEET_TO_BASE),
      (BaseDimension::Length, DisplayHint::Default | DisplayHint::Metric) => None,
    }
  }
}

impl UnitTerm {
  pub fn new(base: BaseDimension, exponent: i64) -> Self {
    Self { base, exponent }
  }
}
