use crate::overlap::overlapseries::OverlapSeries;
use crate::overlap::sampledcurve::SampledCurve;

/// Headroom above the tallest value shown on an axis.
pub const AXIS_HEADROOM: f64 = 1.1;

/// Fallback maximum for an empty series.
pub const EMPTY_SERIES_MAX: f64 = 1.1;

pub struct AxisScale;

impl AxisScale {
    /// Overlap axis: 1.1 × running maximum, or 1.1 × 1.1 before the first frame.
    pub fn overlap_upper_bound(series: &OverlapSeries) -> f64 {
        series.max().unwrap_or(EMPTY_SERIES_MAX) * AXIS_HEADROOM
    }

    /// Curve axis: 1.1 × the taller of the two initial curves.
    pub fn curve_upper_bound(lhs: &SampledCurve, rhs: &SampledCurve) -> f64 {
        lhs.peak().max(rhs.peak()) * AXIS_HEADROOM
    }
}
