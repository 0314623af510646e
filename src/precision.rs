use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::{PolylineError, Result};

/// Number of decimal digits retained when a coordinate value is scaled and rounded.
///
/// Precision 3 encodes `4.456787` as `4.457`. The header stores each precision in four bits, so
/// the supported range is `0..=15`.
///
/// [Precision] implements [TryFrom] for integers:
///
/// ```
/// use flexpolyline::Precision;
///
/// let precision = Precision::try_from(5_u32).unwrap();
/// assert_eq!(precision.digits(), 5);
/// assert!(Precision::try_from(16_u32).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Precision(u8);

impl Precision {
    /// Zero decimal digits, i.e. rounding to integers.
    pub const MIN: Precision = Precision(0);

    /// The largest supported precision.
    pub const MAX: Precision = Precision(15);

    /// Creates a precision of `digits` decimal digits.
    ///
    /// Fails with [`PolylineError::InvalidPrecision`] when `digits` is larger than 15.
    pub fn new(digits: u32) -> Result<Self> {
        if digits > Self::MAX.digits() {
            return Err(PolylineError::InvalidPrecision(digits));
        }
        Ok(Self(digits as u8))
    }

    /// Returns the number of decimal digits.
    pub fn digits(&self) -> u32 {
        self.0 as u32
    }

    /// The factor `10^digits` that maps a coordinate value onto the integer grid.
    pub fn scale(&self) -> f64 {
        10_u64.pow(self.digits()) as f64
    }

    /// Builds a precision from the low four bits of a header field.
    pub(crate) fn from_header_bits(bits: u64) -> Self {
        Self((bits & 0xF) as u8)
    }
}

impl Default for Precision {
    /// Five digits, roughly one meter at the equator.
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u32> for Precision {
    type Error = PolylineError;

    fn try_from(value: u32) -> std::result::Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u8> for Precision {
    type Error = PolylineError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(value.into())
    }
}

impl From<Precision> for u8 {
    fn from(value: Precision) -> Self {
        value.0
    }
}

impl From<Precision> for u32 {
    fn from(value: Precision) -> Self {
        value.digits()
    }
}

impl Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
