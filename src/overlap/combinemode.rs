use nalgebra::DVector;
use serde::{
    Deserialize,
    Serialize
};

use crate::overlap::overlaperror::OverlapError;
use crate::overlap::sampledcurve::SampledCurve;

/// 兩條曲線逐點合成的方式，積分後即為「重疊面積」的近似。
///
/// 兩種方式數值上不同，皆保留供選擇：
/// - `Product`：逐點相乘後取絕對值
/// - `MinEnvelope`：逐點取最小值（假設曲線非負）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombineMode {
    #[default]
    Product,
    MinEnvelope
}

impl CombineMode {
    pub fn name(&self) -> &'static str {
        match self {
            CombineMode::Product => "product",
            CombineMode::MinEnvelope => "min_envelope"
        }
    }

    pub fn combine(&self, lhs: &SampledCurve, rhs: &SampledCurve) -> Result<SampledCurve, OverlapError> {
        OverlapError::check_same_length(lhs.len(), rhs.len())?;
        Ok(SampledCurve::new(self.apply(lhs.values(), rhs.values())))
    }

    /// Lengths must already match.
    pub(crate) fn apply(&self, lhs: &DVector<f64>, rhs: &DVector<f64>) -> DVector<f64> {
        match self {
            CombineMode::Product => lhs.component_mul(rhs).map(f64::abs),
            CombineMode::MinEnvelope => lhs.zip_map(rhs, f64::min)
        }
    }
}
