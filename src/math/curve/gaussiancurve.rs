use std::f64::consts::PI;

use crate::math::curve::curve::Curve;
use crate::overlap::overlaperror::OverlapError;

// ─────────────────────────────────────────────────────────────────────────────
// GaussianCurve - 常態分布機率密度
// ─────────────────────────────────────────────────────────────────────────────
//
//   f(x)  = exp(-z²/2) / (σ·√(2π)),   z = (x - μ) / σ
//   f'(x) = -z/σ · f(x)

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianCurve {
    mean: f64,
    std: f64,
    /// 1 / (σ·√(2π))
    peak: f64
}

impl GaussianCurve {
    pub fn new(mean: f64, std: f64) -> Result<GaussianCurve, OverlapError> {
        let mean = OverlapError::check_finite("mean", mean)?;
        let std = OverlapError::check_finite("spread", std)?;
        if std <= 0.0 {
            return Err(OverlapError::NonPositiveSpread(std));
        }
        let peak = 1.0 / (std * (2.0 * PI).sqrt());
        Ok(GaussianCurve { mean, std, peak })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std(&self) -> f64 {
        self.std
    }

    /// Density at the mean.
    pub fn peak(&self) -> f64 {
        self.peak
    }

    /// Same shape, new center. `mean` must be finite.
    pub fn translated(&self, mean: f64) -> GaussianCurve {
        GaussianCurve { mean, ..*self }
    }

    #[inline]
    fn z(&self, x: f64) -> f64 {
        (x - self.mean) / self.std
    }
}

impl Curve for GaussianCurve {
    fn value(&self, x: f64) -> f64 {
        let z = self.z(x);
        self.peak * (-0.5 * z * z).exp()
    }

    fn derivative(&self, x: f64) -> f64 {
        -self.z(x) / self.std * self.value(x)
    }
}
