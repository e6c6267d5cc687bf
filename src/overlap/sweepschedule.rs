use crate::overlap::overlaperror::OverlapError;

/// Tolerance absorbing binary rounding in `(end - start) / step`,
/// e.g. 15.0 / 0.1 evaluating to 149.999…
const FRAME_COUNT_EPSILON: f64 = 1e-9;

/// Upper limit on frames in one sweep.
pub const MAX_FRAME_COUNT: usize = 10_000_000;

/// 平移排程：起點、終點、步長。
///
/// 第 i 個位置為 `start + i · step`，共 `floor((end - start) / step) + 1` 個。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSchedule {
    start: f64,
    end: f64,
    step: f64,
    frame_count: usize
}

impl SweepSchedule {
    pub fn new(start: f64, end: f64, step: f64) -> Result<SweepSchedule, OverlapError> {
        let start = OverlapError::check_finite("sweep start", start)?;
        let end = OverlapError::check_finite("sweep end", end)?;
        let step = OverlapError::check_finite("step size", step)?;
        if step <= 0.0 {
            return Err(OverlapError::NonPositiveStep(step));
        }
        if end < start {
            return Err(OverlapError::InvertedSweep { start, end });
        }
        let steps = ((end - start) / step + FRAME_COUNT_EPSILON).floor();
        if !steps.is_finite() || steps >= MAX_FRAME_COUNT as f64 {
            return Err(OverlapError::TooManyFrames { start, end, step });
        }
        let frame_count = (steps as usize)
            .checked_add(1)
            .ok_or(OverlapError::TooManyFrames { start, end, step })?;
        Ok(SweepSchedule { start, end, step, frame_count })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn offset(&self, index: usize) -> f64 {
        self.start + index as f64 * self.step
    }

    pub fn offsets(&self) -> SweepScheduleIterator {
        SweepScheduleIterator {
            schedule: *self,
            index: 0
        }
    }
}

pub struct SweepScheduleIterator {
    schedule: SweepSchedule,
    index: usize
}

impl Iterator for SweepScheduleIterator {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.schedule.frame_count() {
            let result = self.schedule.offset(self.index);
            self.index += 1;
            Some(result)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.schedule.frame_count() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SweepScheduleIterator {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_frame_when_start_equals_end() {
        let schedule = SweepSchedule::new(2.0, 2.0, 0.5).unwrap();
        assert_eq!(schedule.frame_count(), 1);
        assert_eq!(schedule.offsets().collect::<Vec<_>>(), vec![2.0]);
    }

    #[test]
    fn partial_last_step_is_dropped() {
        let schedule = SweepSchedule::new(0.0, 1.0, 0.3).unwrap();
        assert_eq!(schedule.frame_count(), 4);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert_eq!(SweepSchedule::new(0.0, 1.0, 0.0), Err(OverlapError::NonPositiveStep(0.0)));
        assert_eq!(
            SweepSchedule::new(1.0, 0.0, 0.1),
            Err(OverlapError::InvertedSweep { start: 1.0, end: 0.0 })
        );
    }

    #[test]
    fn rejects_unbounded_frame_counts() {
        assert_eq!(
            SweepSchedule::new(0.0, 1e300, 1e-300),
            Err(OverlapError::TooManyFrames { start: 0.0, end: 1e300, step: 1e-300 })
        );
        assert!(matches!(
            SweepSchedule::new(-1e308, 1e308, 1.0),
            Err(OverlapError::TooManyFrames { .. })
        ));
        assert!(matches!(
            SweepSchedule::new(0.0, 1.0, 1e-9),
            Err(OverlapError::TooManyFrames { .. })
        ));
        let largest = SweepSchedule::new(0.0, (MAX_FRAME_COUNT - 1) as f64, 1.0).unwrap();
        assert_eq!(largest.frame_count(), MAX_FRAME_COUNT);
    }
}
