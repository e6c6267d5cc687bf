use crate::overlap::engine::{
    MirroredFrame,
    SweepFrame
};
use crate::overlap::overlapseries::OverlapSeries;
use crate::overlap::sampledcurve::SampledCurve;
use crate::overlap::sampledomain::SampleDomain;
use crate::overlap::sweepdriver::MirroredSeries;
use crate::sink::axisscale::AxisScale;
use crate::sink::visualizationsink::VisualizationSink;

/// In-memory sink keeping every rendered frame and the overlap axis bound
/// in effect when it was drawn.
///
/// A mirrored sweep records its forward half in `frames`, its reverse half
/// in `reverse_frames`, and the difference axis separately.
#[derive(Debug, Default)]
pub struct RecordingSink {
    curve_upper_bound: Option<f64>,
    frames: Vec<SweepFrame>,
    overlap_upper_bounds: Vec<f64>,
    reverse_frames: Vec<SweepFrame>,
    reverse_overlap_upper_bounds: Vec<f64>,
    difference_upper_bounds: Vec<f64>,
    finished: bool
}

impl RecordingSink {
    pub fn new() -> RecordingSink {
        RecordingSink::default()
    }

    pub fn frames(&self) -> &[SweepFrame] {
        &self.frames
    }

    pub fn reverse_frames(&self) -> &[SweepFrame] {
        &self.reverse_frames
    }

    pub fn combined_curves(&self) -> impl Iterator<Item = &SampledCurve> {
        self.frames.iter().map(|frame| &frame.combined_curve)
    }

    pub fn overlap_upper_bounds(&self) -> &[f64] {
        &self.overlap_upper_bounds
    }

    pub fn reverse_overlap_upper_bounds(&self) -> &[f64] {
        &self.reverse_overlap_upper_bounds
    }

    pub fn difference_upper_bounds(&self) -> &[f64] {
        &self.difference_upper_bounds
    }

    pub fn curve_upper_bound(&self) -> Option<f64> {
        self.curve_upper_bound
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl VisualizationSink for RecordingSink {
    fn begin(&mut self,
             _domain: &SampleDomain,
             stationary: &SampledCurve,
             initial_moving: &SampledCurve) {
        self.curve_upper_bound = Some(AxisScale::curve_upper_bound(stationary, initial_moving));
    }

    fn render(&mut self, frame: &SweepFrame, series: &OverlapSeries) {
        self.overlap_upper_bounds.push(AxisScale::overlap_upper_bound(series));
        self.frames.push(frame.clone());
    }

    fn render_mirrored(&mut self, frame: &MirroredFrame, series: &MirroredSeries) {
        self.render(&frame.forward, &series.forward);
        self.reverse_overlap_upper_bounds.push(AxisScale::overlap_upper_bound(&series.reverse));
        self.reverse_frames.push(frame.reverse.clone());
        self.difference_upper_bounds.push(AxisScale::overlap_upper_bound(&series.difference));
    }

    fn finish(&mut self, _series: &OverlapSeries) {
        self.finished = true;
    }
}
