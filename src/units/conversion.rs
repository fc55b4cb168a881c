//! Conversion ratios between the units accepted on input and the base
//! unit of their dimension. Lengths are stored in metres.

use num::{BigInt, BigRational};
use once_cell::sync::Lazy;

/// One inch, in metres.
pub static INCHES_TO_BASE: Lazy<BigRational> =
  Lazy::new(|| BigRational::new(BigInt::from(254), BigInt::from(10000)));

/// One foot, in metres.
pub static FEET_TO_BASE: Lazy<BigRational> =
  Lazy::new(|| BigRational::new(BigInt::from(3048), BigInt::from(10000)));

pub const INCHES_PER_FOOT: i64 = 12;
