//! Error types.

use core::fmt;

/// Field errors.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Error {
    /// Modulus is not greater than 3.
    ModulusTooSmall,

    /// Modulus is even.
    EvenModulus,

    /// Modulus failed the primality check.
    CompositeModulus,

    /// Attempted to invert zero.
    NotInvertible,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ModulusTooSmall => f.write_str("field modulus must be greater than 3"),
            Error::EvenModulus => f.write_str("field modulus must be odd"),
            Error::CompositeModulus => f.write_str("field modulus is not prime"),
            Error::NotInvertible => f.write_str("field element is not invertible"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
