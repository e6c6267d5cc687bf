use crate::overlap::overlaperror::OverlapError;

/// 梯形法數值積分：Σ (x[i+1] - x[i]) · (y[i] + y[i+1]) / 2
///
/// 少於兩個點時面積為 0。
pub fn trapezoid(xs: &[f64], ys: &[f64]) -> Result<f64, OverlapError> {
    OverlapError::check_same_length(xs.len(), ys.len())?;
    Ok(trapezoid_area(xs, ys))
}

/// Same as `trapezoid` for inputs already known to be aligned.
pub(crate) fn trapezoid_area(xs: &[f64], ys: &[f64]) -> f64 {
    xs.windows(2)
        .zip(ys.windows(2))
        .map(|(x, y)| (x[1] - x[0]) * (y[0] + y[1]) * 0.5)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_function_is_exact() {
        let xs = [0.0, 0.5, 1.0, 2.0];
        let ys: Vec<f64> = xs.iter().map(|x| 3.0 * x + 1.0).collect();
        // ∫₀² (3x + 1) dx = 8
        assert!((trapezoid(&xs, &ys).unwrap() - 8.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(trapezoid(&[], &[]), Ok(0.0));
        assert_eq!(trapezoid(&[1.0], &[5.0]), Ok(0.0));
        assert_eq!(
            trapezoid(&[0.0, 1.0], &[1.0]),
            Err(OverlapError::LengthMismatch { lhs: 2, rhs: 1 })
        );
    }
}
