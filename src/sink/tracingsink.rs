use tracing::info;

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

/// Emits one `info` event per frame.
#[derive(Debug, Default)]
pub struct TracingSink {
    rendered: usize
}

impl TracingSink {
    pub fn new() -> TracingSink {
        TracingSink::default()
    }

    pub fn rendered(&self) -> usize {
        self.rendered
    }
}

impl VisualizationSink for TracingSink {
    fn begin(&mut self,
             domain: &SampleDomain,
             stationary: &SampledCurve,
             initial_moving: &SampledCurve) {
        info!(
            samples = domain.len(),
            lower = domain.lower(),
            upper = domain.upper(),
            stationary_peak = stationary.peak(),
            moving_peak = initial_moving.peak(),
            curve_axis_upper = AxisScale::curve_upper_bound(stationary, initial_moving),
            "sweep started"
        );
    }

    fn render(&mut self, frame: &SweepFrame, series: &OverlapSeries) {
        self.rendered += 1;
        info!(
            frame = frame.index,
            offset = frame.offset,
            overlap = frame.overlap,
            axis_upper = AxisScale::overlap_upper_bound(series),
            "frame"
        );
    }

    fn render_mirrored(&mut self, frame: &MirroredFrame, series: &MirroredSeries) {
        self.rendered += 1;
        info!(
            frame = frame.forward.index,
            offset = frame.forward.offset,
            forward = frame.forward.overlap,
            reverse = frame.reverse.overlap,
            difference = frame.difference,
            difference_axis_upper = AxisScale::overlap_upper_bound(&series.difference),
            "frame"
        );
    }

    fn finish(&mut self, series: &OverlapSeries) {
        match series.argmax() {
            Some(peak) => info!(
                frames = series.len(),
                peak_offset = peak.x(),
                peak_overlap = peak.y(),
                "sweep finished"
            ),
            None => info!("sweep finished without frames")
        }
    }

    fn finish_mirrored(&mut self, series: &MirroredSeries) {
        let peak = |s: &OverlapSeries| s.argmax().map(|pt| (pt.x(), pt.y()));
        info!(
            frames = series.forward.len(),
            forward_peak = ?peak(&series.forward),
            reverse_peak = ?peak(&series.reverse),
            difference_peak = ?peak(&series.difference),
            "mirrored sweep finished"
        );
    }
}
