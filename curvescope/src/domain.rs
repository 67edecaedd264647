//! Curve domain parameters.

use crate::{CurveOracle, DomainFault, Error, Result};
use modfield::PrimeModulus;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

/// Domain parameters of the short Weierstrass curve `y² = x³ + ax + b` over `GF(p)`.
///
/// The coefficients are stored reduced into `[0, p)`. A domain is immutable once constructed and
/// is shared read-only by any number of [`CurveOracle`]s.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveDomain {
    modulus: PrimeModulus,
    a: BigUint,
    b: BigUint,
}

impl CurveDomain {
    /// Validate and construct curve domain parameters.
    ///
    /// `p` must be an odd prime greater than 3 and the curve must be non-singular, i.e.
    /// `4a³ + 27b² ≢ 0 (mod p)`. Negative coefficients are reduced, so `a = -3` is accepted as is.
    pub fn new(p: BigUint, a: BigInt, b: BigInt) -> Result<Self> {
        let modulus = PrimeModulus::new(p)?;
        let domain = Self::with_modulus(modulus, &a, &b);

        if domain.is_singular() {
            tracing::debug!(bits = domain.modulus.bits(), "rejected singular curve");
            return Err(Error::InvalidDomain(DomainFault::Singular));
        }

        tracing::debug!(bits = domain.modulus.bits(), "constructed curve domain");
        Ok(domain)
    }

    /// Construct curve domain parameters without validating them.
    ///
    /// Intended for well-known curves such as NIST P-256: the caller asserts that `p` is an odd
    /// prime greater than 3 and that the curve is non-singular. Neither is re-verified here.
    pub fn from_trusted(p: BigUint, a: BigInt, b: BigInt) -> Self {
        Self::with_modulus(PrimeModulus::from_trusted(p), &a, &b)
    }

    fn with_modulus(modulus: PrimeModulus, a: &BigInt, b: &BigInt) -> Self {
        let a = modulus.reduce_signed(a);
        let b = modulus.reduce_signed(b);
        Self { modulus, a, b }
    }

    /// Field modulus `p`.
    pub fn p(&self) -> &BigUint {
        self.modulus.value()
    }

    /// Coefficient `a` in the curve equation.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b` in the curve equation.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Prime field the curve is defined over.
    pub fn modulus(&self) -> &PrimeModulus {
        &self.modulus
    }

    /// `4a³ + 27b² mod p`, which is zero exactly when the curve is singular.
    pub fn discriminant_term(&self) -> BigUint {
        let m = &self.modulus;
        let four_a3 = m.mul(&BigUint::from(4u32), &m.cube(&self.a));
        let twenty_seven_b2 = m.mul(&BigUint::from(27u32), &m.square(&self.b));
        m.add(&four_a3, &twenty_seven_b2)
    }

    /// Does the curve have a cusp or node?
    pub fn is_singular(&self) -> bool {
        self.discriminant_term().is_zero()
    }

    /// Right-hand side of the curve equation: `x³ + ax + b mod p`.
    pub fn rhs(&self, x: &BigUint) -> BigUint {
        let m = &self.modulus;
        let ax = m.mul(&self.a, x);
        m.add(&m.add(&m.cube(x), &ax), &self.b)
    }

    /// Membership and enumeration operations over this domain.
    pub fn oracle(&self) -> CurveOracle<'_> {
        CurveOracle::new(self)
    }
}
