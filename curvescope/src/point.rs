//! Affine curve points.

use crate::{Error, Result};
use num_bigint::BigUint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Point `(x, y)` in affine coordinates.
///
/// This is a plain pair of integers: nothing about it guarantees that it lies on any particular
/// curve, or even that its coordinates are field elements. Use
/// [`CurveOracle::is_on_curve`](crate::CurveOracle::is_on_curve) to check.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurvePoint {
    /// x-coordinate
    pub x: BigUint,

    /// y-coordinate
    pub y: BigUint,
}

impl CurvePoint {
    /// Create a point from its coordinates.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }

    /// Parse a point from big-endian hexadecimal coordinates.
    ///
    /// Surrounding whitespace and a `0x` prefix are ignored. Digits may be upper or lower case.
    pub fn from_hex(x: &str, y: &str) -> Result<Self> {
        Ok(Self {
            x: parse_hex(x)?,
            y: parse_hex(y)?,
        })
    }
}

impl From<(BigUint, BigUint)> for CurvePoint {
    fn from((x, y): (BigUint, BigUint)) -> Self {
        Self { x, y }
    }
}

fn parse_hex(s: &str) -> Result<BigUint> {
    let s = s.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidHex);
    }

    BigUint::parse_bytes(digits.as_bytes(), 16).ok_or(Error::InvalidHex)
}
