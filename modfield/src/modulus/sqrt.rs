//! Modular square root implementations, adapted from <https://eprint.iacr.org/2012/685.pdf>.
//!
//! All of these run in variable time.

use super::{Legendre, PrimeModulus};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Upper bound on the quadratic non-residue search for Tonelli-Shanks.
///
/// The least non-residue of every prime of cryptographic size seen in practice is tiny; the bound
/// only matters for composite moduli passed to [`PrimeModulus::from_trusted`].
const NON_RESIDUE_SEARCH_BOUND: u32 = 1 << 12;

/// Square root algorithms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Algorithm {
    /// Atkins algorithm for `q ≡ 5 (mod 8)`.
    Atkins,

    /// Shanks algorithm for `q ≡ 3 (mod 4)`.
    Shanks,

    /// Tonelli-Shanks algorithm for any odd prime.
    TonelliShanks,
}

impl Algorithm {
    /// Determine the best algorithm to use with a particular modulus.
    pub(crate) fn for_modulus(p: &BigUint) -> Self {
        if mod_residue(p, 2) == 3 {
            Self::Shanks
        } else if mod_residue(p, 3) == 5 {
            Self::Atkins
        } else {
            Self::TonelliShanks
        }
    }
}

/// Constants derived from the modulus for its square root algorithm.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum SqrtConstants {
    Atkins {
        /// `(p - 5) / 8`
        exp: BigUint,

        /// `2^((p - 5) / 8)`
        t: BigUint,
    },
    Shanks {
        /// `(p + 1) / 4`
        exp: BigUint,
    },
    TonelliShanks {
        /// `S` such that `p - 1 = 2^S * T` with `T` odd.
        s: u64,

        /// `T`
        t: BigUint,

        /// `z^T` for the least quadratic non-residue `z`. `None` if no non-residue was found
        /// below the search bound, in which case no square roots are reported.
        root_of_unity: Option<BigUint>,
    },
}

impl SqrtConstants {
    pub(crate) fn for_modulus(p: &BigUint, euler_exp: &BigUint) -> Self {
        match Algorithm::for_modulus(p) {
            Algorithm::Shanks => Self::Shanks {
                exp: (p + BigUint::one()) >> 2u32,
            },
            Algorithm::Atkins => {
                let exp = (p - BigUint::from(5u32)) >> 3u32;
                let t = BigUint::from(2u32).modpow(&exp, p);
                Self::Atkins { exp, t }
            }
            Algorithm::TonelliShanks => {
                let p_minus_one = p - BigUint::one();
                let s = p_minus_one.trailing_zeros().unwrap_or(0);
                let t = &p_minus_one >> s;
                let root_of_unity = (2..NON_RESIDUE_SEARCH_BOUND)
                    .map(BigUint::from)
                    .find(|z| z.modpow(euler_exp, p) == p_minus_one)
                    .map(|z| z.modpow(&t, p));

                if root_of_unity.is_none() {
                    tracing::debug!("no quadratic non-residue found below search bound");
                }

                Self::TonelliShanks {
                    s,
                    t,
                    root_of_unity,
                }
            }
        }
    }

    pub(crate) fn algorithm(&self) -> Algorithm {
        match self {
            Self::Atkins { .. } => Algorithm::Atkins,
            Self::Shanks { .. } => Algorithm::Shanks,
            Self::TonelliShanks { .. } => Algorithm::TonelliShanks,
        }
    }
}

impl PrimeModulus {
    /// Returns a square root of `a` mod p, or `None` if no square root exists.
    ///
    /// The returned root is verified: `sqrt(a)^2 ≡ a (mod p)` always holds for `Some`. The other
    /// root is its negation.
    pub fn sqrt(&self, a: &BigUint) -> Option<BigUint> {
        let a = self.reduce(a);

        if a.is_zero() {
            return Some(a);
        }

        let root = match &self.sqrt {
            SqrtConstants::Atkins { exp, t } => self.sqrt_atkins(&a, exp, t)?,
            SqrtConstants::Shanks { exp } => self.pow(&a, exp),
            SqrtConstants::TonelliShanks {
                s,
                t,
                root_of_unity,
            } => self.sqrt_tonelli_shanks(&a, *s, t, root_of_unity.as_ref()?)?,
        };

        (self.square(&root) == a).then_some(root)
    }

    /// Atkins algorithm for `q ≡ 5 (mod 8)`.
    ///
    /// From <https://eprint.iacr.org/2012/685.pdf> (page 10, algorithm 3)
    fn sqrt_atkins(&self, a: &BigUint, exp: &BigUint, t: &BigUint) -> Option<BigUint> {
        let a1 = self.pow(a, exp);
        let a0 = self.square(&self.mul(&self.square(&a1), a));

        if a0 == &self.p - BigUint::one() {
            return None;
        }

        let b = self.mul(t, &a1);
        let ab = self.mul(a, &b);
        let i = self.mul(&self.double(&ab), &b);
        Some(self.mul(&ab, &self.sub(&i, &BigUint::one())))
    }

    /// Tonelli-Shanks algorithm works for every odd prime.
    ///
    /// Expects `a` to be reduced and nonzero.
    fn sqrt_tonelli_shanks(
        &self,
        a: &BigUint,
        s: u64,
        t: &BigUint,
        root_of_unity: &BigUint,
    ) -> Option<BigUint> {
        if self.legendre(a) != Legendre::Residue {
            return None;
        }

        let mut m = s;
        let mut c = root_of_unity.clone();
        let mut b = self.pow(a, t);
        let mut x = self.pow(a, &((t + BigUint::one()) >> 1u32));

        while !b.is_one() {
            // least `i` such that `b^(2^i) = 1`
            let mut i = 0;
            let mut b2i = b.clone();
            while !b2i.is_one() {
                b2i = self.square(&b2i);
                i += 1;
                if i == m {
                    return None;
                }
            }

            let mut e = c;
            for _ in 0..(m - i - 1) {
                e = self.square(&e);
            }

            m = i;
            c = self.square(&e);
            b = self.mul(&b, &c);
            x = self.mul(&x, &e);
        }

        Some(x)
    }

    #[cfg(test)]
    pub(crate) fn sqrt_algorithm(&self) -> Algorithm {
        self.sqrt.algorithm()
    }
}

/// Residue of the modulus mod `2^k`, for selecting particular square root algorithms.
fn mod_residue(p: &BigUint, k: u64) -> u32 {
    (0..k).fold(0, |acc, i| acc | (u32::from(p.bit(i)) << i))
}
