use std::iter::FusedIterator;

use nalgebra::DVector;
use tracing::debug;

use crate::math::curve::curve::Curve;
use crate::math::curve::gaussiancurve::GaussianCurve;
use crate::overlap::combinemode::CombineMode;
use crate::overlap::overlaperror::OverlapError;
use crate::overlap::sampledcurve::{
    CurveSpec,
    SampledCurve
};
use crate::overlap::sampledomain::SampleDomain;
use crate::overlap::sweepschedule::SweepSchedule;

// ─────────────────────────────────────────────────────────────────────────────
// OverlapSweepEngine
// ─────────────────────────────────────────────────────────────────────────────

/// 在固定的 `SampleDomain` 上生成曲線、合成、積分，並驅動平移掃描。
///
/// Engine 本身無狀態；掃描結果以 iterator 逐步拉取（pull-based）。
#[derive(Debug, Clone)]
pub struct OverlapSweepEngine {
    domain: SampleDomain
}

impl OverlapSweepEngine {
    pub fn new(domain: SampleDomain) -> OverlapSweepEngine {
        OverlapSweepEngine { domain }
    }

    pub fn domain(&self) -> &SampleDomain {
        &self.domain
    }

    /// Gaussian density at every domain point, scaled by `amplitude`.
    ///
    /// With `normalize`, the density is rescaled to a trapezoidal integral of
    /// exactly 1 before the amplitude is applied. A density whose integral
    /// underflows to 0 (center far outside the domain) is left as is.
    pub fn evaluate_curve(&self,
                          center: f64,
                          amplitude: f64,
                          spread: f64,
                          normalize: bool) -> Result<SampledCurve, OverlapError> {
        let spec = CurveSpec::new(center, amplitude, spread, normalize);
        spec.validate()?;
        let shape = GaussianCurve::new(center, spread)?;
        Ok(self.sample_shape(&shape, amplitude, normalize))
    }

    pub fn evaluate_spec(&self, spec: &CurveSpec) -> Result<SampledCurve, OverlapError> {
        self.evaluate_curve(spec.center, spec.amplitude, spec.spread, spec.normalize)
    }

    pub fn combine(&self,
                   lhs: &SampledCurve,
                   rhs: &SampledCurve,
                   mode: CombineMode) -> Result<SampledCurve, OverlapError> {
        OverlapError::check_same_length(lhs.len(), self.domain.len())?;
        mode.combine(lhs, rhs)
    }

    pub fn overlap_measure(&self, combined: &SampledCurve) -> Result<f64, OverlapError> {
        self.domain.integrate(combined.values())
    }

    /// Lazy sweep: one frame per schedule offset, with the moving curve
    /// re-centered on that offset and the stationary curve evaluated once.
    ///
    /// All parameters are checked here so that producing a frame cannot fail.
    pub fn run_sweep(&self,
                     schedule: &SweepSchedule,
                     stationary_spec: &CurveSpec,
                     moving_spec: &CurveSpec,
                     mode: CombineMode) -> Result<Sweep<'_>, OverlapError> {
        let stationary = self.evaluate_spec(stationary_spec)?;
        let initial_moving = self.evaluate_spec(moving_spec)?;
        let moving_shape = GaussianCurve::new(moving_spec.center, moving_spec.spread)?;
        debug!(
            frames = schedule.frame_count(),
            start = schedule.start(),
            end = schedule.end(),
            step = schedule.step(),
            mode = mode.name(),
            "sweep prepared"
        );
        Ok(Sweep {
            engine: self,
            schedule: *schedule,
            stationary,
            initial_moving,
            moving_shape,
            moving_amplitude: moving_spec.amplitude,
            moving_normalize: moving_spec.normalize,
            mode,
            index: 0
        })
    }

    /// Two sweeps in lockstep: `first` stays while `second` moves, and
    /// `second` stays while `first` moves. Each curve keeps its amplitude
    /// and spread in both roles; a stationary curve keeps its
    /// normalization, but `first` is never renormalized while it moves.
    pub fn run_mirrored_sweep(&self,
                              schedule: &SweepSchedule,
                              first: &CurveSpec,
                              second: &CurveSpec,
                              mode: CombineMode) -> Result<MirroredSweep<'_>, OverlapError> {
        let forward = self.run_sweep(schedule, first, second, mode)?;
        let reverse = self.run_sweep(schedule, second, &first.without_normalization(), mode)?;
        Ok(MirroredSweep { forward, reverse })
    }

    fn sample_shape(&self, shape: &GaussianCurve, amplitude: f64, normalize: bool) -> SampledCurve {
        let mut values = DVector::from_vec(shape.sample(self.domain.as_slice()));
        if normalize {
            let mass = self.domain.integrate_aligned(&values);
            if mass > 0.0 {
                values /= mass;
            }
        }
        values *= amplitude;
        SampledCurve::new(values)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sweep
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct SweepFrame {
    pub index: usize,
    pub offset: f64,
    pub moved_curve: SampledCurve,
    pub combined_curve: SampledCurve,
    pub overlap: f64
}

pub struct Sweep<'a> {
    engine: &'a OverlapSweepEngine,
    schedule: SweepSchedule,
    stationary: SampledCurve,
    initial_moving: SampledCurve,
    moving_shape: GaussianCurve,
    moving_amplitude: f64,
    moving_normalize: bool,
    mode: CombineMode,
    index: usize
}

impl<'a> Sweep<'a> {
    pub fn domain(&self) -> &SampleDomain {
        self.engine.domain()
    }

    pub fn schedule(&self) -> &SweepSchedule {
        &self.schedule
    }

    pub fn mode(&self) -> CombineMode {
        self.mode
    }

    pub fn stationary_curve(&self) -> &SampledCurve {
        &self.stationary
    }

    /// Moving curve at the center given by its spec, before any offset.
    pub fn initial_moving_curve(&self) -> &SampledCurve {
        &self.initial_moving
    }

    fn frame_at(&self, index: usize) -> SweepFrame {
        let offset = self.schedule.offset(index);
        let shape = self.moving_shape.translated(offset);
        let moved_curve = self.engine.sample_shape(&shape, self.moving_amplitude, self.moving_normalize);
        let combined = self.mode.apply(self.stationary.values(), moved_curve.values());
        let overlap = self.engine.domain().integrate_aligned(&combined);
        SweepFrame {
            index,
            offset,
            moved_curve,
            combined_curve: SampledCurve::new(combined),
            overlap
        }
    }
}

impl<'a> Iterator for Sweep<'a> {
    type Item = SweepFrame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.schedule.frame_count() {
            let frame = self.frame_at(self.index);
            self.index += 1;
            Some(frame)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.schedule.frame_count() - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Sweep<'a> {}

impl<'a> FusedIterator for Sweep<'a> {}

// ─────────────────────────────────────────────────────────────────────────────
// MirroredSweep
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct MirroredFrame {
    pub forward: SweepFrame,
    pub reverse: SweepFrame,
    /// |forward.overlap - reverse.overlap|
    pub difference: f64
}

pub struct MirroredSweep<'a> {
    forward: Sweep<'a>,
    reverse: Sweep<'a>
}

impl<'a> MirroredSweep<'a> {
    pub fn forward(&self) -> &Sweep<'a> {
        &self.forward
    }

    pub fn reverse(&self) -> &Sweep<'a> {
        &self.reverse
    }
}

impl<'a> Iterator for MirroredSweep<'a> {
    type Item = MirroredFrame;

    fn next(&mut self) -> Option<Self::Item> {
        let forward = self.forward.next()?;
        let reverse = self.reverse.next()?;
        let difference = (forward.overlap - reverse.overlap).abs();
        Some(MirroredFrame { forward, reverse, difference })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.forward.size_hint()
    }
}

impl<'a> ExactSizeIterator for MirroredSweep<'a> {}

impl<'a> FusedIterator for MirroredSweep<'a> {}
