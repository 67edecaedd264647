//! Bounded point enumeration.

use crate::{CurveOracle, CurvePoint};
use core::iter::FusedIterator;
use num_bigint::BigUint;
use num_traits::FromPrimitive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sampling plan for the x-axis: `samples` equal steps across `[x_min, x_max]`.
///
/// Sample `i` is `x_min + i * step` for `i` in `0..=samples`, where
/// `step = (x_max - x_min) / samples`. The last sample is exactly `x_max`.
///
/// Samples are real-valued for the benefit of plotting code, but are truncated to an integer
/// before any field arithmetic happens. A sample is skipped when it is negative or when its
/// integer is not a field element. Every other sample contributes its points, so with steps
/// smaller than 1 neighbouring samples can yield the same points again.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleRange {
    /// Lower bound of the x-range.
    pub x_min: f64,

    /// Upper bound of the x-range (inclusive).
    pub x_max: f64,

    /// Number of steps between `x_min` and `x_max`.
    pub samples: usize,
}

impl SampleRange {
    /// Create a sampling plan.
    pub fn new(x_min: f64, x_max: f64, samples: usize) -> Self {
        Self {
            x_min,
            x_max,
            samples,
        }
    }

    /// Is this plan certain to produce no samples at all?
    ///
    /// True for zero steps, for `x_min > x_max`, and for non-finite bounds.
    pub fn is_degenerate(&self) -> bool {
        self.samples == 0
            || !self.x_min.is_finite()
            || !self.x_max.is_finite()
            || self.x_min > self.x_max
    }

    /// Distance between consecutive samples.
    pub fn step(&self) -> f64 {
        (self.x_max - self.x_min) / self.samples as f64
    }

    /// Real-valued sample `i`.
    pub fn x_at(&self, i: usize) -> f64 {
        if i >= self.samples {
            self.x_max
        } else {
            self.x_min + self.step() * i as f64
        }
    }

    /// Field element for sample `i`, or `None` if the sample is skipped.
    pub(crate) fn field_sample(&self, i: usize, p: &BigUint) -> Option<BigUint> {
        let x = quantize(self.x_at(i))?;

        if &x >= p {
            tracing::trace!(sample = i, "sample lies outside the field");
            return None;
        }

        Some(x)
    }
}

/// Truncate a non-negative sample to an integer.
fn quantize(x: f64) -> Option<BigUint> {
    if x >= 0.0 { BigUint::from_f64(x) } else { None }
}

/// Points of a curve over a [`SampleRange`], computed lazily.
///
/// This is a description of the enumeration rather than a cursor: [`PointSample::iter`] can be
/// called any number of times and each call starts over from the first sample.
#[derive(Clone, Copy, Debug)]
pub struct PointSample<'d> {
    oracle: CurveOracle<'d>,
    range: SampleRange,
}

impl<'d> PointSample<'d> {
    pub(crate) fn new(oracle: CurveOracle<'d>, range: SampleRange) -> Self {
        Self { oracle, range }
    }

    /// Sampling plan this enumeration follows.
    pub fn range(&self) -> SampleRange {
        self.range
    }

    /// Iterate over the points from the first sample.
    pub fn iter(&self) -> Points<'d> {
        let end = if self.range.is_degenerate() {
            0
        } else {
            self.range.samples.saturating_add(1)
        };

        Points {
            oracle: self.oracle,
            range: self.range,
            next: 0,
            end,
            pending: None,
        }
    }
}

impl<'d> IntoIterator for PointSample<'d> {
    type Item = CurvePoint;
    type IntoIter = Points<'d>;

    fn into_iter(self) -> Points<'d> {
        self.iter()
    }
}

impl<'d> IntoIterator for &PointSample<'d> {
    type Item = CurvePoint;
    type IntoIter = Points<'d>;

    fn into_iter(self) -> Points<'d> {
        self.iter()
    }
}

/// Iterator over the points of a [`PointSample`].
///
/// The two points sharing an x-coordinate are always yielded back to back, even `y` first.
#[derive(Clone, Debug)]
pub struct Points<'d> {
    oracle: CurveOracle<'d>,
    range: SampleRange,

    /// Index of the next sample to evaluate.
    next: usize,

    /// One past the last sample index.
    end: usize,

    /// Mirror image of the last point yielded, if not yet yielded itself.
    pending: Option<CurvePoint>,
}

impl Iterator for Points<'_> {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<CurvePoint> {
        if let Some(point) = self.pending.take() {
            return Some(point);
        }

        let p = self.oracle.domain().p();

        while self.next < self.end {
            let i = self.next;
            self.next += 1;

            let Some(x) = self.range.field_sample(i, p) else {
                continue;
            };

            match self.oracle.symmetric_pair(&x) {
                Some((point, mirror)) => {
                    self.pending = mirror;
                    return Some(point);
                }
                None => tracing::trace!(sample = i, "no curve point above sample"),
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = usize::from(self.pending.is_some());
        let upper = (self.end - self.next)
            .checked_mul(2)
            .and_then(|n| n.checked_add(pending));
        (pending, upper)
    }
}

impl FusedIterator for Points<'_> {}
