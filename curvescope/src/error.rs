//! Error types.

use core::fmt;

/// Curve errors.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Domain parameters are structurally invalid.
    InvalidDomain(DomainFault),

    /// A coordinate lies outside `[0, p)`.
    CoordinateOutOfRange(Coordinate),

    /// The point does not satisfy the curve equation.
    NotOnCurve,

    /// A coordinate is not a hexadecimal string.
    InvalidHex,

    /// Malformed SEC1 point encoding.
    InvalidEncoding,

    /// Curve name not recognized.
    UnknownCurve,

    /// Field arithmetic failed, e.g. inversion of zero.
    Arithmetic(modfield::Error),
}

/// Reason a set of domain parameters was rejected.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DomainFault {
    /// The modulus is not an odd prime greater than 3.
    Modulus(modfield::Error),

    /// `4a^3 + 27b^2 ≡ 0 (mod p)`
    Singular,
}

/// Affine coordinate of a point.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Coordinate {
    /// x-coordinate
    X,

    /// y-coordinate
    Y,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDomain(fault) => write!(f, "invalid curve domain: {fault}"),
            Error::CoordinateOutOfRange(coordinate) => {
                write!(f, "{coordinate}-coordinate is not a field element")
            }
            Error::NotOnCurve => f.write_str("point is not on the curve"),
            Error::InvalidHex => f.write_str("coordinate is not a hexadecimal number"),
            Error::InvalidEncoding => f.write_str("malformed SEC1 point encoding"),
            Error::UnknownCurve => f.write_str("unknown curve name"),
            Error::Arithmetic(err) => write!(f, "field arithmetic error: {err}"),
        }
    }
}

impl fmt::Display for DomainFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainFault::Modulus(err) => fmt::Display::fmt(err, f),
            DomainFault::Singular => f.write_str("curve is singular"),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Coordinate::X => "x",
            Coordinate::Y => "y",
        })
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::InvalidDomain(DomainFault::Modulus(err)) | Error::Arithmetic(err) => Some(err),
            _ => None,
        }
    }
}

impl From<modfield::Error> for Error {
    fn from(err: modfield::Error) -> Error {
        match err {
            modfield::Error::NotInvertible => Error::Arithmetic(err),
            _ => Error::InvalidDomain(DomainFault::Modulus(err)),
        }
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
