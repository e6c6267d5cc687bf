use nalgebra::DVector;
use serde::{
    Deserialize,
    Serialize
};

use crate::overlap::overlaperror::OverlapError;

/// 如何在 `SampleDomain` 上生成一條高斯曲線。
///
/// `normalize` 為真時，先把密度縮放到數值積分恰為 1，再乘上 `amplitude`。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSpec {
    pub center: f64,
    pub amplitude: f64,
    pub spread: f64,
    #[serde(default)]
    pub normalize: bool
}

impl CurveSpec {
    pub fn new(center: f64, amplitude: f64, spread: f64, normalize: bool) -> CurveSpec {
        CurveSpec { center, amplitude, spread, normalize }
    }

    pub fn with_center(&self, center: f64) -> CurveSpec {
        CurveSpec { center, ..*self }
    }

    pub fn without_normalization(&self) -> CurveSpec {
        CurveSpec { normalize: false, ..*self }
    }

    pub fn validate(&self) -> Result<(), OverlapError> {
        OverlapError::check_finite("center", self.center)?;
        OverlapError::check_finite("amplitude", self.amplitude)?;
        OverlapError::check_finite("spread", self.spread)?;
        if self.spread <= 0.0 {
            return Err(OverlapError::NonPositiveSpread(self.spread));
        }
        Ok(())
    }
}

/// Curve values aligned 1:1 with a `SampleDomain`.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledCurve {
    values: DVector<f64>
}

impl SampledCurve {
    pub fn new(values: DVector<f64>) -> SampledCurve {
        SampledCurve { values }
    }

    pub fn from_vec(values: Vec<f64>) -> SampledCurve {
        SampledCurve { values: DVector::from_vec(values) }
    }

    pub fn values(&self) -> &DVector<f64> {
        &self.values
    }

    pub fn as_slice(&self) -> &[f64] {
        self.values.as_slice()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest sample, 0 for an empty curve.
    pub fn peak(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    pub fn into_values(self) -> DVector<f64> {
        self.values
    }
}
