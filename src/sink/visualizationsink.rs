use crate::overlap::engine::{
    MirroredFrame,
    SweepFrame
};
use crate::overlap::sampledcurve::SampledCurve;
use crate::overlap::sampledomain::SampleDomain;
use crate::overlap::sweepdriver::MirroredSeries;
use crate::overlap::overlapseries::OverlapSeries;

/// 繪圖端：每一步接收移動曲線、合成曲線與目前的 overlap series。
///
/// 座標軸縮放等呈現策略屬於 sink，見 `AxisScale`。
pub trait VisualizationSink {
    /// `initial_moving` is the moving curve at its own center, before the
    /// first offset is applied.
    fn begin(&mut self,
             _domain: &SampleDomain,
             _stationary: &SampledCurve,
             _initial_moving: &SampledCurve) {}

    fn render(&mut self, frame: &SweepFrame, series: &OverlapSeries);

    /// Default interleaves both halves into `render`, forward first; each
    /// call sees only its own half's series. Sinks that keep per-frame
    /// state should override this to keep the halves apart.
    fn render_mirrored(&mut self, frame: &MirroredFrame, series: &MirroredSeries) {
        self.render(&frame.forward, &series.forward);
        self.render(&frame.reverse, &series.reverse);
    }

    fn finish(&mut self, _series: &OverlapSeries) {}

    /// Default finishes with the forward series only.
    fn finish_mirrored(&mut self, series: &MirroredSeries) {
        self.finish(&series.forward);
    }
}
