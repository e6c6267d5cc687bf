use crate::math::curve::point2d::Point2D;

/// 每一步附加一筆 (offset, overlap)，只增不改。
///
/// 由 sweep driver 持有，結束後回傳給呼叫端。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlapSeries {
    offsets: Vec<f64>,
    values: Vec<f64>
}

impl OverlapSeries {
    pub fn new() -> OverlapSeries {
        OverlapSeries::default()
    }

    pub fn with_capacity(capacity: usize) -> OverlapSeries {
        OverlapSeries {
            offsets: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity)
        }
    }

    pub fn push(&mut self, offset: f64, overlap: f64) {
        self.offsets.push(offset);
        self.values.push(overlap);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn last(&self) -> Option<Point2D> {
        self.offsets
            .last()
            .zip(self.values.last())
            .map(|(&x, &y)| Point2D::new(x, y))
    }

    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    /// Point with the largest overlap; the earliest one wins ties.
    pub fn argmax(&self) -> Option<Point2D> {
        self.points()
            .into_iter()
            .reduce(|best, pt| if pt.y() > best.y() { pt } else { best })
    }

    pub fn points(&self) -> Vec<Point2D> {
        self.offsets
            .iter()
            .zip(self.values.iter())
            .map(|(&x, &y)| Point2D::new(x, y))
            .collect()
    }
}
