/// 一維連續曲線：可在任意 x 求值與求導。
///
/// 取樣（`sample`）將曲線對齊到一組固定的 x 座標，
/// 是 `SampledCurve` 的來源。
pub trait Curve {
    fn value(&self, x: f64) -> f64;

    fn derivative(&self, x: f64) -> f64;

    fn sample(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.value(x)).collect()
    }
}
