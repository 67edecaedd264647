//! Pure queries against a [`CurveDomain`].

use crate::{Coordinate, CurveDomain, CurvePoint, Error, PointSample, Result, SampleRange};
use alloc::vec::Vec;
use core::iter::{once, successors};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// SEC1 tag for an uncompressed point.
const TAG_UNCOMPRESSED: u8 = 0x04;

/// SEC1 tag for a compressed point with even `y`.
const TAG_COMPRESSED_EVEN_Y: u8 = 0x02;

/// SEC1 tag for a compressed point with odd `y`.
const TAG_COMPRESSED_ODD_Y: u8 = 0x03;

/// Membership test and point enumeration for a curve domain.
///
/// An oracle only borrows its domain and holds no other state, so it is `Copy` and can be used
/// from any number of threads at once.
#[derive(Clone, Copy, Debug)]
pub struct CurveOracle<'d> {
    domain: &'d CurveDomain,
}

impl<'d> CurveOracle<'d> {
    /// Create an oracle for the given domain.
    pub fn new(domain: &'d CurveDomain) -> Self {
        Self { domain }
    }

    /// Domain this oracle answers for.
    pub fn domain(&self) -> &'d CurveDomain {
        self.domain
    }

    /// Does `point` satisfy `y² ≡ x³ + ax + b (mod p)`?
    ///
    /// Points with a coordinate outside `[0, p)` are reported as not on the curve. Use
    /// [`CurveOracle::check_range`] to tell the two cases apart.
    pub fn is_on_curve(&self, point: &CurvePoint) -> bool {
        self.check_range(point).is_ok() && self.satisfies_equation(point)
    }

    /// Check that both coordinates are canonical field elements.
    pub fn check_range(&self, point: &CurvePoint) -> Result<()> {
        let modulus = self.domain.modulus();

        if !modulus.contains(&point.x) {
            return Err(Error::CoordinateOutOfRange(Coordinate::X));
        }

        if !modulus.contains(&point.y) {
            return Err(Error::CoordinateOutOfRange(Coordinate::Y));
        }

        Ok(())
    }

    /// Check that `point` is a valid curve point, with a distinct error for each failure.
    pub fn validate(&self, point: &CurvePoint) -> Result<()> {
        self.check_range(point)?;

        if !self.satisfies_equation(point) {
            return Err(Error::NotOnCurve);
        }

        Ok(())
    }

    /// Reflect `point` across the x-axis: `(x, p - y mod p)`.
    pub fn negate(&self, point: &CurvePoint) -> CurvePoint {
        CurvePoint::new(point.x.clone(), self.domain.modulus().neg(&point.y))
    }

    /// Find the curve point with x-coordinate `x` whose y-coordinate has the requested parity.
    ///
    /// Returns `None` if `x` is not a field element, if `x³ + ax + b` is a quadratic
    /// non-residue, or if `y = 0` and an odd `y` was requested.
    pub fn lift_x(&self, x: &BigUint, y_is_odd: bool) -> Option<CurvePoint> {
        let modulus = self.domain.modulus();

        if !modulus.contains(x) {
            return None;
        }

        let beta = modulus.sqrt(&self.domain.rhs(x))?;

        let y = if beta.bit(0) == y_is_odd {
            beta
        } else if beta.is_zero() {
            return None;
        } else {
            modulus.neg(&beta)
        };

        Some(CurvePoint::new(x.clone(), y))
    }

    /// Both curve points with x-coordinate `x`, even `y` first. The second is `None` when
    /// `y = 0`, where the two coincide.
    pub(crate) fn symmetric_pair(&self, x: &BigUint) -> Option<(CurvePoint, Option<CurvePoint>)> {
        let point = self.lift_x(x, false)?;
        let mirror = (!point.y.is_zero()).then(|| self.negate(&point));
        Some((point, mirror))
    }

    /// Lazily enumerate curve points whose x-coordinate is sampled from `range`.
    ///
    /// See [`SampleRange`] for how samples are quantized. Each x-coordinate that yields a square
    /// contributes both of its points, adjacent to each other.
    pub fn enumerate_points(&self, range: SampleRange) -> PointSample<'d> {
        tracing::debug!(
            x_min = range.x_min,
            x_max = range.x_max,
            samples = range.samples,
            "enumerating curve points"
        );
        PointSample::new(*self, range)
    }

    /// Enumerate the curve points whose x-coordinate lies within `radius` of `center`, in
    /// increasing order of x.
    ///
    /// Unlike [`CurveOracle::enumerate_points`] the window is exact for any modulus size: sampling
    /// a real-valued range cannot resolve neighbouring x-coordinates once they exceed `2^53`.
    pub fn enumerate_neighborhood(
        &self,
        center: &BigUint,
        radius: u64,
    ) -> impl Iterator<Item = CurvePoint> + use<'d> {
        let oracle = *self;
        let radius = BigUint::from(radius);
        let start = if center > &radius {
            center - &radius
        } else {
            BigUint::zero()
        };
        let end = center + radius;

        successors(Some(start), |x| Some(x + BigUint::one()))
            .take_while(move |x| x <= &end && oracle.domain.modulus().contains(x))
            .filter_map(move |x| oracle.symmetric_pair(&x))
            .flat_map(|(point, mirror)| once(point).chain(mirror))
    }

    /// Same points in the same order as [`CurveOracle::enumerate_points`], with the samples
    /// spread across the rayon thread pool.
    #[cfg(feature = "rayon")]
    pub fn par_enumerate_points(&self, range: SampleRange) -> Vec<CurvePoint> {
        use rayon::prelude::*;

        if range.is_degenerate() {
            return Vec::new();
        }

        tracing::debug!(
            x_min = range.x_min,
            x_max = range.x_max,
            samples = range.samples,
            "enumerating curve points in parallel"
        );

        let p = self.domain.p();
        (0..=range.samples)
            .into_par_iter()
            .filter_map(|i| range.field_sample(i, p))
            .flat_map_iter(|x| {
                let (point, mirror) = match self.symmetric_pair(&x) {
                    Some((point, mirror)) => (Some(point), mirror),
                    None => (None, None),
                };
                point.into_iter().chain(mirror)
            })
            .collect()
    }

    /// Decode a SEC1 `Elliptic-Curve-Point-to-Octet-String` encoding.
    ///
    /// Accepts uncompressed (`04 ‖ x ‖ y`) and compressed (`02/03 ‖ x`) points with coordinates
    /// padded to the byte length of `p`. The point at infinity has no affine representation and
    /// is rejected.
    pub fn decode_sec1(&self, bytes: &[u8]) -> Result<CurvePoint> {
        let len = self.domain.modulus().byte_len();
        let (&tag, body) = bytes.split_first().ok_or(Error::InvalidEncoding)?;

        match tag {
            TAG_UNCOMPRESSED if body.len() == 2 * len => {
                let (x, y) = body.split_at(len);
                let point =
                    CurvePoint::new(BigUint::from_bytes_be(x), BigUint::from_bytes_be(y));
                self.validate(&point)?;
                Ok(point)
            }
            TAG_COMPRESSED_EVEN_Y | TAG_COMPRESSED_ODD_Y if body.len() == len => {
                let x = BigUint::from_bytes_be(body);

                if !self.domain.modulus().contains(&x) {
                    return Err(Error::CoordinateOutOfRange(Coordinate::X));
                }

                self.lift_x(&x, tag == TAG_COMPRESSED_ODD_Y)
                    .ok_or(Error::NotOnCurve)
            }
            _ => Err(Error::InvalidEncoding),
        }
    }

    /// Encode `point` with SEC1 `Elliptic-Curve-Point-to-Octet-String`.
    ///
    /// The point is not checked for membership, but its coordinates must be field elements.
    pub fn encode_sec1(&self, point: &CurvePoint, compress: bool) -> Result<Vec<u8>> {
        self.check_range(point)?;

        let len = self.domain.modulus().byte_len();
        let mut out = Vec::with_capacity(1 + 2 * len);

        if compress {
            out.push(if point.y.bit(0) {
                TAG_COMPRESSED_ODD_Y
            } else {
                TAG_COMPRESSED_EVEN_Y
            });
            push_padded(&mut out, &point.x, len);
        } else {
            out.push(TAG_UNCOMPRESSED);
            push_padded(&mut out, &point.x, len);
            push_padded(&mut out, &point.y, len);
        }

        Ok(out)
    }

    fn satisfies_equation(&self, point: &CurvePoint) -> bool {
        self.domain.modulus().square(&point.y) == self.domain.rhs(&point.x)
    }
}

/// Append `n` big-endian, left-padded with zeros to `len` bytes. `n` must fit.
fn push_padded(out: &mut Vec<u8>, n: &BigUint, len: usize) {
    let bytes = n.to_bytes_be();
    out.resize(out.len() + len - bytes.len(), 0);
    out.extend_from_slice(&bytes);
}
