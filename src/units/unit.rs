//! Composite units and their algebra.

use super::dimension::{BaseDimension, UnitTerm};
use crate::display::unit_label;

use itertools::{EitherOrBoth, Itertools};

use std::fmt::{self, Formatter, Display};
use std::ops::{Mul, Div};

/// The physical dimensions of a value, together with a hint for how
/// the value prefers to be rendered.
///
/// Magnitudes are always stored in the base unit of their dimension
/// (metres for length); the display hint only selects which concrete
/// unit to show. The default `Unit` is the dimensionless unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Unit {
  // Sorted by base dimension. Each base dimension appears at most
  // once, and every exponent is nonzero.
  terms: Vec<UnitTerm>,
  display: DisplayHint,
}

/// A rendering preference. It never affects whether two units are
/// compatible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DisplayHint {
  #[default]
  Default,
  Metric,
  Imperial,
}

impl DisplayHint {
  /// The first explicit hint wins, preferring `self`.
  pub fn merge(self, other: DisplayHint) -> DisplayHint {
    match self {
      DisplayHint::Default => other,
      explicit => explicit,
    }
  }
}

impl Unit {
  /// Builds a unit as the product of the given terms. Terms may come
  /// in any order and may repeat a base dimension.
  pub fn new(terms: impl IntoIterator<Item = UnitTerm>, display: DisplayHint) -> Self {
    let terms = terms.into_iter()
      .fold(Vec::new(), |acc, term| merge_terms(&acc, &[term], 1));
    Self { terms, display }
  }

  pub fn dimensionless() -> Self {
    Self::default()
  }

  /// Length to the first power, shown in feet and inches if
  /// `imperial` is true and in metres otherwise.
  pub fn length(imperial: bool) -> Self {
    let display = if imperial { DisplayHint::Imperial } else { DisplayHint::Metric };
    Self {
      terms: vec![UnitTerm::new(BaseDimension::Length, 1)],
      display,
    }
  }

  pub fn terms(&self) -> &[UnitTerm] {
    &self.terms
  }

  pub fn display(&self) -> DisplayHint {
    self.display
  }

  pub fn is_dimensionless(&self) -> bool {
    self.terms.is_empty()
  }

  /// True for exactly length¹ with the imperial hint, the one unit
  /// rendered in feet and inches.
  pub fn is_imperial_length(&self) -> bool {
    self.display == DisplayHint::Imperial
      && self.terms == [UnitTerm::new(BaseDimension::Length, 1)]
  }

  /// Whether `self` and `other` have identical terms, ignoring the
  /// display hint.
  pub fn same_dimensions(&self, other: &Unit) -> bool {
    self.terms == other.terms
  }

  pub fn multiply(&self, other: &Unit) -> Unit {
    Unit {
      terms: merge_terms(&self.terms, &other.terms, 1),
      display: self.display.merge(other.display),
    }
  }

  pub fn divide(&self, other: &Unit) -> Unit {
    Unit {
      terms: merge_terms(&self.terms, &other.terms, -1),
      display: self.display.merge(other.display),
    }
  }

  /// The unit of a sum of values in `self` and `other`, or `None` if
  /// they cannot be added.
  pub fn add_compatible(&self, other: &Unit) -> Option<Unit> {
    self.same_dimensions(other).then(|| Unit {
      terms: self.terms.clone(),
      display: self.display.merge(other.display),
    })
  }
}

/// Sorted merge of two term lists, multiplying every exponent in `y`
/// by `y_sign` first. Exponents that cancel out are dropped.
fn merge_terms(x: &[UnitTerm], y: &[UnitTerm], y_sign: i64) -> Vec<UnitTerm> {
  x.iter()
    .merge_join_by(y.iter(), |a, b| a.base.cmp(&b.base))
    .filter_map(|pair| {
      let term = match pair {
        EitherOrBoth::Left(a) => *a,
        EitherOrBoth::Right(b) => UnitTerm::new(b.base, b.exponent * y_sign),
        EitherOrBoth::Both(a, b) => UnitTerm::new(a.base, a.exponent + b.exponent * y_sign),
      };
      (term.exponent != 0).then_some(term)
    })
    .collect()
}

impl Mul for &Unit {
  type Output = Unit;

  fn mul(self, rhs: &Unit) -> Unit {
    self.multiply(rhs)
  }
}

impl Div for &Unit {
  type Output = Unit;

  fn div(self, rhs: &Unit) -> Unit {
    self.divide(rhs)
  }
}

impl Display for Unit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.terms.is_empty() {
      write!(f, "<none>")
    } else {
      write!(f, "{}", unit_label(self).text)
    }
  }
}
