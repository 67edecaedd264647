//! Prime moduli chosen at runtime, with arithmetic on canonical residues
//! represented as [`BigUint`].

mod sqrt;

use self::sqrt::SqrtConstants;
use crate::{Error, Result, primality::is_probable_prime};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Quadratic character of a field element, as given by Euler's criterion.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Legendre {
    /// The element is zero.
    Zero,

    /// The element is a nonzero square.
    Residue,

    /// The element has no square root.
    NonResidue,
}

/// Odd prime modulus `p > 3` of a prime field.
///
/// Operations accept any [`BigUint`] and reduce it first; results are always
/// canonical, i.e. in `[0, p)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrimeModulus {
    p: BigUint,

    /// `(p - 1) / 2`
    euler_exp: BigUint,

    sqrt: SqrtConstants,
}

impl PrimeModulus {
    /// Validate `p` and prepare it for use as a field modulus.
    ///
    /// Fails if `p <= 3`, if `p` is even, or if `p` does not pass
    /// [`is_probable_prime`].
    pub fn new(p: BigUint) -> Result<Self> {
        if p <= BigUint::from(3u32) {
            return Err(Error::ModulusTooSmall);
        }

        if p.is_even() {
            return Err(Error::EvenModulus);
        }

        if !is_probable_prime(&p) {
            tracing::debug!(bits = p.bits(), "rejected composite field modulus");
            return Err(Error::CompositeModulus);
        }

        Ok(Self::from_trusted(p))
    }

    /// Prepare a modulus without checking it.
    ///
    /// The caller asserts that `p` is an odd prime greater than 3, as is the
    /// case for the moduli of standardized curves. Arithmetic with any other
    /// value produces meaningless results (but never panics for odd `p > 3`).
    pub fn from_trusted(p: BigUint) -> Self {
        debug_assert!(p.is_odd() && p > BigUint::from(3u32));

        let euler_exp = (&p - BigUint::one()) >> 1u32;
        let sqrt = SqrtConstants::for_modulus(&p, &euler_exp);
        tracing::debug!(bits = p.bits(), algorithm = ?sqrt.algorithm(), "prepared prime modulus");

        Self { p, euler_exp, sqrt }
    }

    /// The modulus as an integer.
    pub fn value(&self) -> &BigUint {
        &self.p
    }

    /// Bit length of the modulus.
    pub fn bits(&self) -> u64 {
        self.p.bits()
    }

    /// Number of bytes needed to encode a field element big-endian.
    pub fn byte_len(&self) -> usize {
        self.p.bits().div_ceil(8) as usize
    }

    /// Is `x` a canonical residue, i.e. `x < p`?
    pub fn contains(&self, x: &BigUint) -> bool {
        x < &self.p
    }

    /// Reduce `x` into `[0, p)`.
    pub fn reduce(&self, x: &BigUint) -> BigUint {
        x % &self.p
    }

    /// Reduce a signed integer into `[0, p)`, so that e.g. `-3` maps to `p - 3`.
    pub fn reduce_signed(&self, x: &BigInt) -> BigUint {
        let modulus = BigInt::from(self.p.clone());
        x.mod_floor(&modulus).magnitude().clone()
    }

    /// `a + b mod p`
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.p
    }

    /// `a - b mod p`
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = self.reduce(a);
        let b = self.reduce(b);

        if a >= b { a - b } else { &self.p - (b - a) }
    }

    /// `-a mod p`
    pub fn neg(&self, a: &BigUint) -> BigUint {
        let a = self.reduce(a);

        if a.is_zero() { a } else { &self.p - a }
    }

    /// `2a mod p`
    pub fn double(&self, a: &BigUint) -> BigUint {
        self.add(a, a)
    }

    /// `a * b mod p`
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.p
    }

    /// `a^2 mod p`
    pub fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    /// `a^3 mod p`, by modular exponentiation.
    pub fn cube(&self, a: &BigUint) -> BigUint {
        self.pow(a, &BigUint::from(3u32))
    }

    /// `a^exp mod p`
    pub fn pow(&self, a: &BigUint, exp: &BigUint) -> BigUint {
        a.modpow(exp, &self.p)
    }

    /// Multiplicative inverse `a^(p - 2) mod p`.
    pub fn invert(&self, a: &BigUint) -> Result<BigUint> {
        let a = self.reduce(a);

        if a.is_zero() {
            return Err(Error::NotInvertible);
        }

        Ok(self.pow(&a, &(&self.p - BigUint::from(2u32))))
    }

    /// Euler's criterion: `a^((p - 1) / 2) mod p`.
    pub fn legendre(&self, a: &BigUint) -> Legendre {
        let a = self.reduce(a);

        if a.is_zero() {
            Legendre::Zero
        } else if self.pow(&a, &self.euler_exp).is_one() {
            Legendre::Residue
        } else {
            Legendre::NonResidue
        }
    }

    /// Does `a` have a square root mod `p`? Zero counts as a square.
    pub fn is_square(&self, a: &BigUint) -> bool {
        self.legendre(a) != Legendre::NonResidue
    }
}

#[cfg(test)]
mod tests {
    use super::{Legendre, PrimeModulus};
    use crate::Error;
    use hex_literal::hex;
    use num_bigint::{BigInt, BigUint};

    fn p256() -> PrimeModulus {
        PrimeModulus::new(BigUint::from_bytes_be(&hex!(
            "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"
        )))
        .unwrap()
    }

    #[test]
    fn rejects_small_even_and_composite() {
        for n in [0u32, 1, 2, 3] {
            assert_eq!(
                PrimeModulus::new(BigUint::from(n)),
                Err(Error::ModulusTooSmall)
            );
        }

        assert_eq!(PrimeModulus::new(BigUint::from(4u32)), Err(Error::EvenModulus));
        assert_eq!(PrimeModulus::new(BigUint::from(1u64 << 40)), Err(Error::EvenModulus));
        assert_eq!(PrimeModulus::new(BigUint::from(9u32)), Err(Error::CompositeModulus));
        assert_eq!(PrimeModulus::new(BigUint::from(561u32)), Err(Error::CompositeModulus));
    }

    #[test]
    fn accepts_primes() {
        for n in [5u32, 7, 13, 97, 65537] {
            let p = PrimeModulus::new(BigUint::from(n)).unwrap();
            assert_eq!(p.value(), &BigUint::from(n));
        }

        let p = p256();
        assert_eq!(p.bits(), 256);
        assert_eq!(p.byte_len(), 32);
    }

    #[test]
    fn signed_reduction() {
        let p = PrimeModulus::new(BigUint::from(97u32)).unwrap();
        assert_eq!(p.reduce_signed(&BigInt::from(-3)), BigUint::from(94u32));
        assert_eq!(p.reduce_signed(&BigInt::from(-97)), BigUint::from(0u32));
        assert_eq!(p.reduce_signed(&BigInt::from(200)), BigUint::from(6u32));

        let p = p256();
        let minus_three = p.reduce_signed(&BigInt::from(-3));
        assert_eq!(
            minus_three,
            BigUint::from_bytes_be(&hex!(
                "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc"
            ))
        );
    }

    #[test]
    fn arithmetic() {
        let p = PrimeModulus::new(BigUint::from(97u32)).unwrap();
        let a = BigUint::from(90u32);
        let b = BigUint::from(10u32);

        assert_eq!(p.add(&a, &b), BigUint::from(3u32));
        assert_eq!(p.sub(&b, &a), BigUint::from(17u32));
        assert_eq!(p.sub(&a, &b), BigUint::from(80u32));
        assert_eq!(p.neg(&b), BigUint::from(87u32));
        assert_eq!(p.neg(&BigUint::from(0u32)), BigUint::from(0u32));
        assert_eq!(p.double(&a), BigUint::from(83u32));
        assert_eq!(p.mul(&a, &b), BigUint::from(27u32));
        assert_eq!(p.square(&b), BigUint::from(3u32));
        assert_eq!(p.cube(&b), BigUint::from(30u32));
    }

    #[test]
    fn invert() {
        let p = p256();
        let a = BigUint::from(0xdead_beefu32);
        let inv = p.invert(&a).unwrap();
        assert_eq!(p.mul(&a, &inv), BigUint::from(1u32));

        assert_eq!(p.invert(&BigUint::from(0u32)), Err(Error::NotInvertible));
        assert_eq!(p.invert(p.value()), Err(Error::NotInvertible));
    }

    #[test]
    fn legendre_symbol() {
        let p = PrimeModulus::new(BigUint::from(13u32)).unwrap();
        let squares = [1u32, 3, 4, 9, 10, 12];

        assert_eq!(p.legendre(&BigUint::from(0u32)), Legendre::Zero);
        assert_eq!(p.legendre(&BigUint::from(13u32)), Legendre::Zero);

        for n in 1u32..13 {
            let expected = if squares.contains(&n) {
                Legendre::Residue
            } else {
                Legendre::NonResidue
            };
            assert_eq!(p.legendre(&BigUint::from(n)), expected, "n = {n}");
        }
    }
}
