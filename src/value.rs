//! Quantities: an exact magnitude in base units paired with a
//! [`Unit`].

use crate::display;
use crate::error::{MathError, MathErrorKind};
use crate::number::Rational;
use crate::units::conversion::{FEET_TO_BASE, INCHES_TO_BASE};
use crate::units::Unit;

use num::Zero;

use std::fmt::{self, Display, Formatter};
use std::ops::{Mul, Neg};

/// An immutable quantity. Arithmetic always produces a new `Value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
  magnitude: Rational,
  unit: Unit,
}

impl Value {
  pub fn new(magnitude: Rational, unit: Unit) -> Self {
    Self { magnitude, unit }
  }

  pub fn dimensionless(magnitude: Rational) -> Self {
    Self::new(magnitude, Unit::dimensionless())
  }

  pub fn zero() -> Self {
    Self::dimensionless(Rational::zero())
  }

  /// A length of `feet` feet plus `inches` inches, displayed in
  /// imperial units.
  pub fn imperial_length(feet: &Rational, inches: &Rational) -> Self {
    let magnitude = feet * &*FEET_TO_BASE + inches * &*INCHES_TO_BASE;
    Self::new(magnitude, Unit::length(true))
  }

  pub fn feet(feet: &Rational) -> Self {
    Self::imperial_length(feet, &Rational::zero())
  }

  pub fn inches(inches: &Rational) -> Self {
    Self::imperial_length(&Rational::zero(), inches)
  }

  /// The magnitude in base units (metres for length).
  pub fn magnitude(&self) -> &Rational {
    &self.magnitude
  }

  pub fn unit(&self) -> &Unit {
    &self.unit
  }

  /// Sum of two values. Fails unless both have the same dimensions.
  pub fn checked_add(&self, other: &Value) -> Result<Value, MathError> {
    let Some(unit) = self.unit.add_compatible(&other.unit) else {
      return Err(MathError::new(MathErrorKind::DifferentUnits {
        left: self.to_string(),
        right: other.to_string(),
      }));
    };
    Ok(Value::new(&self.magnitude + &other.magnitude, unit))
  }

  /// Quotient of two values. Fails only if `other` is exactly zero.
  pub fn checked_div(&self, other: &Value) -> Result<Value, MathError> {
    if other.magnitude.is_zero() {
      return Err(MathError::new(MathErrorKind::DivisionByZero));
    }
    Ok(Value::new(&self.magnitude / &other.magnitude, &self.unit / &other.unit))
  }

  pub fn format(&self, verbose: bool) -> String {
    display::format(self, verbose)
  }
}

impl Mul for &Value {
  type Output = Value;

  fn mul(self, rhs: &Value) -> Value {
    Value::new(&self.magnitude * &rhs.magnitude, &self.unit * &rhs.unit)
  }
}

impl Mul for Value {
  type Output = Value;

  fn mul(self, rhs: Value) -> Value {
    &self * &rhs
  }
}

impl Neg for Value {
  type Output = Value;

  fn neg(self) -> Value {
    Value { magnitude: -self.magnitude, unit: self.unit }
  }
}

impl Neg for &Value {
  type Output = Value;

  fn neg(self) -> Value {
    -self.clone()
  }
}

impl Display for Value {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.format(false))
  }
}
