//! Unit algebra. A unit tracks the exponent of each base dimension
//! through multiplication and division, and decides whether two
//! quantities may be added.

pub mod conversion;
pub mod dimension;
pub mod unit;

pub use dimension::{BaseDimension, UnitTerm};
pub use unit::{DisplayHint, Unit};
