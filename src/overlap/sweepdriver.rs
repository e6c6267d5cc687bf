use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::overlap::engine::{
    MirroredSweep,
    Sweep
};
use crate::overlap::overlapseries::OverlapSeries;
use crate::sink::visualizationsink::VisualizationSink;

/// Pre-allocation ceiling for series; longer sweeps grow on demand.
const PREALLOCATED_FRAMES: usize = 4096;

/// Series accumulated by a mirrored sweep.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MirroredSeries {
    pub forward: OverlapSeries,
    pub reverse: OverlapSeries,
    pub difference: OverlapSeries
}

/// 拉取 sweep 的每一步、累積 `OverlapSeries` 並交給 sink 繪製。
///
/// `frame_interval` 只控制兩次拉取之間的等待，engine 本身從不等待。
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepDriver {
    frame_interval: Option<Duration>
}

impl SweepDriver {
    pub fn new() -> SweepDriver {
        SweepDriver::default()
    }

    pub fn with_frame_interval(frame_interval: Duration) -> SweepDriver {
        SweepDriver { frame_interval: Some(frame_interval) }
    }

    pub fn frame_interval(&self) -> Option<Duration> {
        self.frame_interval
    }

    pub fn drive<S>(&self, sweep: Sweep<'_>, sink: &mut S) -> OverlapSeries
        where S: VisualizationSink + ?Sized {
        let mut series = OverlapSeries::with_capacity(sweep.len().min(PREALLOCATED_FRAMES));
        sink.begin(sweep.domain(), sweep.stationary_curve(), sweep.initial_moving_curve());
        for frame in sweep {
            series.push(frame.offset, frame.overlap);
            sink.render(&frame, &series);
            self.pace();
        }
        debug!(frames = series.len(), "sweep drained");
        sink.finish(&series);
        series
    }

    pub fn drive_mirrored<S>(&self, sweep: MirroredSweep<'_>, sink: &mut S) -> MirroredSeries
        where S: VisualizationSink + ?Sized {
        let capacity = sweep.len().min(PREALLOCATED_FRAMES);
        let mut series = MirroredSeries {
            forward: OverlapSeries::with_capacity(capacity),
            reverse: OverlapSeries::with_capacity(capacity),
            difference: OverlapSeries::with_capacity(capacity)
        };
        let forward = sweep.forward();
        sink.begin(forward.domain(), forward.stationary_curve(), forward.initial_moving_curve());
        for frame in sweep {
            series.forward.push(frame.forward.offset, frame.forward.overlap);
            series.reverse.push(frame.reverse.offset, frame.reverse.overlap);
            series.difference.push(frame.forward.offset, frame.difference);
            sink.render_mirrored(&frame, &series);
            self.pace();
        }
        debug!(frames = series.forward.len(), "mirrored sweep drained");
        sink.finish_mirrored(&series);
        series
    }

    fn pace(&self) {
        if let Some(interval) = self.frame_interval {
            thread::sleep(interval);
        }
    }
}
