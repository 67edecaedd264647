//! Probable-prime testing for runtime moduli.

use alloc::vec::Vec;
use bigint::BoxedUint;
use crypto_primes::{Flavor, is_prime};
use num_bigint::BigUint;

/// Byte granularity of the [`BoxedUint`] conversion. A multiple of the limb size on every target.
const LIMB_ALIGN: usize = 8;

/// Is `n` (very probably) prime?
///
/// Runs the Baillie-PSW test (Miller-Rabin to base 2 followed by a strong Lucas test). No
/// composite passing it is known, and it is not defeated by composites built to fool
/// Miller-Rabin with a fixed set of bases. No randomness is involved: the same input always gives
/// the same answer.
pub fn is_probable_prime(n: &BigUint) -> bool {
    if n < &BigUint::from(2u32) {
        return false;
    }

    match to_boxed_uint(n) {
        Some(n) => is_prime(Flavor::Any, &n),
        None => {
            tracing::debug!(bits = n.bits(), "candidate could not be converted for primality test");
            false
        }
    }
}

/// Convert to a [`BoxedUint`] whose precision is the bit length of `n` rounded up to whole limbs.
fn to_boxed_uint(n: &BigUint) -> Option<BoxedUint> {
    let bytes = n.to_bytes_be();
    let len = bytes.len().div_ceil(LIMB_ALIGN) * LIMB_ALIGN;

    let mut padded = Vec::with_capacity(len);
    padded.resize(len - bytes.len(), 0);
    padded.extend_from_slice(&bytes);

    let bits_precision = u32::try_from(len * 8).ok()?;
    BoxedUint::from_be_slice(&padded, bits_precision).ok()
}
