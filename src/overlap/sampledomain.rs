use std::sync::Arc;

use nalgebra::DVector;

use crate::math::integration::{
    trapezoid,
    trapezoid_area
};
use crate::overlap::overlaperror::OverlapError;

/// 均勻取樣的 x 座標（含兩端點，同 linspace）。
///
/// 建構後不可變；clone 只複製 `Arc`，所有曲線共用同一份座標。
#[derive(Debug, Clone)]
pub struct SampleDomain {
    lower: f64,
    upper: f64,
    xs: Arc<DVector<f64>>
}

impl SampleDomain {
    pub fn new(lower: f64, upper: f64, sample_count: usize) -> Result<SampleDomain, OverlapError> {
        let lower = OverlapError::check_finite("domain lower bound", lower)?;
        let upper = OverlapError::check_finite("domain upper bound", upper)?;
        if sample_count < 2 {
            return Err(OverlapError::EmptyDomain { sample_count });
        }
        if lower >= upper {
            return Err(OverlapError::InvalidDomainBounds { lower, upper });
        }

        let last = sample_count - 1;
        let spacing = (upper - lower) / last as f64;
        let xs = DVector::from_fn(sample_count, |i, _| {
            if i == last {
                upper
            } else {
                lower + i as f64 * spacing
            }
        });
        Ok(SampleDomain { lower, upper, xs: Arc::new(xs) })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn spacing(&self) -> f64 {
        (self.upper - self.lower) / (self.len() - 1) as f64
    }

    pub fn xs(&self) -> &DVector<f64> {
        &self.xs
    }

    pub fn as_slice(&self) -> &[f64] {
        self.xs.as_slice()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.xs.iter().copied()
    }

    pub fn contains(&self, x: f64) -> bool {
        (x >= self.lower) && (x <= self.upper)
    }

    /// Trapezoidal integral of `values` over this domain.
    pub fn integrate(&self, values: &DVector<f64>) -> Result<f64, OverlapError> {
        trapezoid(self.as_slice(), values.as_slice())
    }

    pub(crate) fn integrate_aligned(&self, values: &DVector<f64>) -> f64 {
        trapezoid_area(self.as_slice(), values.as_slice())
    }
}
