//! Helpers for drawing curve points on a real-valued canvas.

use crate::{CurvePoint, SampleRange};
use num_traits::ToPrimitive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Curve point converted to floating point for plotting.
///
/// Coordinates too large for an `f64` become `f64::INFINITY`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlotPoint {
    /// Horizontal position.
    pub x: f64,

    /// Vertical position.
    pub y: f64,
}

impl From<&CurvePoint> for PlotPoint {
    fn from(point: &CurvePoint) -> Self {
        Self {
            x: point.x.to_f64().unwrap_or(f64::INFINITY),
            y: point.y.to_f64().unwrap_or(f64::INFINITY),
        }
    }
}

impl From<CurvePoint> for PlotPoint {
    fn from(point: CurvePoint) -> Self {
        Self::from(&point)
    }
}

/// Axis-aligned viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlotWindow {
    /// Left edge.
    pub x_min: f64,

    /// Right edge.
    pub x_max: f64,

    /// Bottom edge.
    pub y_min: f64,

    /// Top edge.
    pub y_max: f64,
}

impl PlotWindow {
    /// Distance from a point of interest to each edge of the window around it.
    pub const DEFAULT_MARGIN: f64 = 100.0;

    /// Number of x-axis steps used to fill a window.
    pub const DEFAULT_SAMPLES: usize = 1000;

    /// Square window extending `margin` from `center` in every direction.
    pub fn around(center: PlotPoint, margin: f64) -> Self {
        Self {
            x_min: center.x - margin,
            x_max: center.x + margin,
            y_min: center.y - margin,
            y_max: center.y + margin,
        }
    }

    /// Sampling plan spanning the window horizontally.
    pub fn sample_range(&self, samples: usize) -> SampleRange {
        SampleRange::new(self.x_min, self.x_max, samples)
    }

    /// Does the window contain `point`, edges included?
    pub fn contains(&self, point: PlotPoint) -> bool {
        (self.x_min..=self.x_max).contains(&point.x) && (self.y_min..=self.y_max).contains(&point.y)
    }
}
