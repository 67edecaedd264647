//! Standardized curves.
//!
//! Parameters are from [NIST SP 800-186] § 3.2.1 and [SEC 2] § 2.4.1.
//!
//! [NIST SP 800-186]: https://csrc.nist.gov/publications/detail/sp/800-186/final
//! [SEC 2]: https://www.secg.org/sec2-v2.pdf

use crate::{CurveDomain, CurvePoint, Error};
use core::{fmt, str::FromStr};
use hex_literal::hex;
use num_bigint::{BigInt, BigUint};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Domain parameters of a standardized curve, big-endian.
struct Params {
    name: &'static str,
    aliases: &'static [&'static str],
    p: &'static [u8],
    a: i8,
    b: &'static [u8],
    gx: &'static [u8],
    gy: &'static [u8],
    n: &'static [u8],
    h: u32,
}

const P192: Params = Params {
    name: "P-192",
    aliases: &["secp192r1", "prime192v1"],
    p: &hex!("fffffffffffffffffffffffffffffffeffffffffffffffff"),
    a: -3,
    b: &hex!("64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1"),
    gx: &hex!("188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012"),
    gy: &hex!("07192b95ffc8da78631011ed6b24cdd573f977a11e794811"),
    n: &hex!("ffffffffffffffffffffffff99def836146bc9b1b4d22831"),
    h: 1,
};

const P224: Params = Params {
    name: "P-224",
    aliases: &["secp224r1"],
    p: &hex!("ffffffffffffffffffffffffffffffff000000000000000000000001"),
    a: -3,
    b: &hex!("b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4"),
    gx: &hex!("b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21"),
    gy: &hex!("bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34"),
    n: &hex!("ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d"),
    h: 1,
};

const P256: Params = Params {
    name: "P-256",
    aliases: &["secp256r1", "prime256v1"],
    p: &hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"),
    a: -3,
    b: &hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
    gx: &hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
    gy: &hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
    n: &hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"),
    h: 1,
};

const P384: Params = Params {
    name: "P-384",
    aliases: &["secp384r1"],
    p: &hex!(
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe
         ffffffff0000000000000000ffffffff"
    ),
    a: -3,
    b: &hex!(
        "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875a
         c656398d8a2ed19d2a85c8edd3ec2aef"
    ),
    gx: &hex!(
        "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a38
         5502f25dbf55296c3a545e3872760ab7"
    ),
    gy: &hex!(
        "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c0
         0a60b1ce1d7e819d7a431d7c90ea0e5f"
    ),
    n: &hex!(
        "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf
         581a0db248b0a77aecec196accc52973"
    ),
    h: 1,
};

const P521: Params = Params {
    name: "P-521",
    aliases: &["secp521r1"],
    p: &hex!(
        "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff
         ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff
         ffff"
    ),
    a: -3,
    b: &hex!(
        "0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef1
         09e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b50
         3f00"
    ),
    gx: &hex!(
        "00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d
         3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5
         bd66"
    ),
    gy: &hex!(
        "011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e
         662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd1
         6650"
    ),
    n: &hex!(
        "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff
         fffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e9138
         6409"
    ),
    h: 1,
};

const SECP256K1: Params = Params {
    name: "secp256k1",
    aliases: &[],
    p: &hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"),
    a: 0,
    b: &hex!("0000000000000000000000000000000000000000000000000000000000000007"),
    gx: &hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
    gy: &hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
    n: &hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"),
    h: 1,
};

/// Standardized short Weierstrass curves of prime order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum NamedCurve {
    /// NIST P-192, a.k.a. secp192r1 and prime192v1.
    P192,

    /// NIST P-224, a.k.a. secp224r1.
    P224,

    /// NIST P-256, a.k.a. secp256r1 and prime256v1.
    P256,

    /// NIST P-384, a.k.a. secp384r1.
    P384,

    /// NIST P-521, a.k.a. secp521r1.
    P521,

    /// SECG secp256k1.
    Secp256k1,
}

impl NamedCurve {
    /// Every supported curve.
    pub const ALL: [NamedCurve; 6] = [
        NamedCurve::P192,
        NamedCurve::P224,
        NamedCurve::P256,
        NamedCurve::P384,
        NamedCurve::P521,
        NamedCurve::Secp256k1,
    ];

    fn params(self) -> &'static Params {
        match self {
            NamedCurve::P192 => &P192,
            NamedCurve::P224 => &P224,
            NamedCurve::P256 => &P256,
            NamedCurve::P384 => &P384,
            NamedCurve::P521 => &P521,
            NamedCurve::Secp256k1 => &SECP256K1,
        }
    }

    /// Canonical name, e.g. `"P-256"`.
    pub fn name(self) -> &'static str {
        self.params().name
    }

    /// Domain parameters `(p, a, b)`.
    ///
    /// Built with [`CurveDomain::from_trusted`]: the published parameters are not re-validated.
    pub fn domain(self) -> CurveDomain {
        let params = self.params();
        CurveDomain::from_trusted(
            BigUint::from_bytes_be(params.p),
            BigInt::from(params.a),
            BigInt::from_bytes_be(num_bigint::Sign::Plus, params.b),
        )
    }

    /// Standard base point.
    pub fn generator(self) -> CurvePoint {
        let params = self.params();
        CurvePoint::new(
            BigUint::from_bytes_be(params.gx),
            BigUint::from_bytes_be(params.gy),
        )
    }

    /// Order of the base point.
    pub fn order(self) -> BigUint {
        BigUint::from_bytes_be(self.params().n)
    }

    /// Cofactor `h = #E / n`.
    pub fn cofactor(self) -> u32 {
        self.params().h
    }
}

impl fmt::Display for NamedCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedCurve {
    type Err = Error;

    /// Parse a curve name or one of its aliases, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Error> {
        let s = s.trim();

        NamedCurve::ALL
            .into_iter()
            .find(|curve| {
                let params = curve.params();
                core::iter::once(&params.name)
                    .chain(params.aliases)
                    .any(|name| name.eq_ignore_ascii_case(s))
            })
            .ok_or(Error::UnknownCurve)
    }
}
