//! Tests for driving sweeps into visualization sinks.

use std::time::Duration;

use approx::assert_abs_diff_eq;

use overlapsweep::configuration::SweepConfiguration;
use overlapsweep::overlap::engine::SweepFrame;
use overlapsweep::overlap::overlapseries::OverlapSeries;
use overlapsweep::overlap::sampledcurve::SampledCurve;
use overlapsweep::overlap::sampledomain::SampleDomain;
use overlapsweep::overlap::sweepdriver::{
    MirroredSeries,
    SweepDriver
};
use overlapsweep::sink::axisscale::AxisScale;
use overlapsweep::sink::recordingsink::RecordingSink;
use overlapsweep::sink::tracingsink::TracingSink;
use overlapsweep::sink::visualizationsink::VisualizationSink;

#[test]
fn series_follows_the_schedule() {
    let config = SweepConfiguration::product_preset();
    let engine = config.engine().unwrap();
    let schedule = config.schedule().unwrap();
    let sweep = engine
        .run_sweep(&schedule, &config.stationary_spec, &config.moving_spec_initial, config.combine_mode)
        .unwrap();

    let mut sink = RecordingSink::new();
    let series = SweepDriver::new().drive(sweep, &mut sink);

    assert_eq!(series.len(), 151);
    for (offset, expected) in series.offsets().iter().zip(schedule.offsets()) {
        assert_eq!(*offset, expected);
    }
    for (value, frame) in series.values().iter().zip(sink.frames()) {
        assert_eq!(*value, frame.overlap);
    }
    assert!(sink.is_finished());
    assert_eq!(sink.combined_curves().count(), 151);

    // 以 0 為中心的兩條高斯，重疊面積最大值出現在位移 0 附近
    let peak = series.argmax().unwrap();
    assert_abs_diff_eq!(peak.x(), 0.0, epsilon = 0.1 + 1e-9);
}

#[test]
fn overlap_axis_tracks_running_maximum() {
    let config = SweepConfiguration::min_envelope_preset();
    let engine = config.engine().unwrap();
    let schedule = config.schedule().unwrap();
    let sweep = engine
        .run_sweep(&schedule, &config.stationary_spec, &config.moving_spec_initial, config.combine_mode)
        .unwrap();

    let mut sink = RecordingSink::new();
    let series = SweepDriver::new().drive(sweep, &mut sink);

    let bounds = sink.overlap_upper_bounds();
    assert_eq!(bounds.len(), series.len());
    for (i, bound) in bounds.iter().enumerate() {
        let running_max = series.values()[..=i].iter().copied().fold(f64::MIN, f64::max);
        assert_abs_diff_eq!(*bound, running_max * 1.1, epsilon = 1e-12);
    }
    for pair in bounds.windows(2) {
        assert!(pair[1] >= pair[0]);
    }

    let stationary = engine.evaluate_spec(&config.stationary_spec).unwrap();
    let initial_moving = engine.evaluate_spec(&config.moving_spec_initial).unwrap();
    assert_eq!(
        sink.curve_upper_bound(),
        Some(AxisScale::curve_upper_bound(&stationary, &initial_moving))
    );
}

#[test]
fn curve_axis_uses_initial_curves_not_sweep_start() {
    let mut config = SweepConfiguration::min_envelope_preset();
    config.moving_spec_initial.amplitude = 4.0;
    config.sweep_start = -15.0;
    let engine = config.engine().unwrap();
    let schedule = config.schedule().unwrap();
    let sweep = engine
        .run_sweep(&schedule, &config.stationary_spec, &config.moving_spec_initial, config.combine_mode)
        .unwrap();

    let mut sink = RecordingSink::new();
    SweepDriver::new().drive(sweep, &mut sink);

    // 1.1 × 4·N(0; 0, 2)，移動曲線以自身中心 0 計算，而非起點 -15
    let expected = 1.1 * 4.0 / (2.0 * (2.0 * std::f64::consts::PI).sqrt());
    assert_abs_diff_eq!(sink.curve_upper_bound().unwrap(), expected, epsilon = 1e-3);
}

#[test]
fn mirrored_driver_accumulates_three_series() {
    let config = SweepConfiguration::min_envelope_preset();
    let engine = config.engine().unwrap();
    let schedule = config.schedule().unwrap();
    let sweep = engine
        .run_mirrored_sweep(&schedule, &config.stationary_spec, &config.moving_spec_initial, config.combine_mode)
        .unwrap();

    let mut sink = TracingSink::new();
    let series = SweepDriver::new().drive_mirrored(sweep, &mut sink);

    assert_eq!(sink.rendered(), 151);
    assert_eq!(series.forward.len(), 151);
    assert_eq!(series.reverse.len(), 151);
    assert_eq!(series.difference.len(), 151);
    for i in 0..151 {
        let expected = (series.forward.values()[i] - series.reverse.values()[i]).abs();
        assert_eq!(series.difference.values()[i], expected);
        assert_eq!(series.difference.offsets()[i], series.forward.offsets()[i]);
    }
}

#[test]
fn recording_sink_keeps_mirrored_halves_apart() {
    let config = SweepConfiguration::product_preset();
    let engine = config.engine().unwrap();
    let schedule = config.schedule().unwrap();
    let sweep = engine
        .run_mirrored_sweep(&schedule, &config.stationary_spec, &config.moving_spec_initial, config.combine_mode)
        .unwrap();

    let mut sink = RecordingSink::new();
    let series = SweepDriver::new().drive_mirrored(sweep, &mut sink);
    assert!(sink.is_finished());
    assert_eq!(sink.frames().len(), 151);
    assert_eq!(sink.reverse_frames().len(), 151);
    for (frame, value) in sink.frames().iter().zip(series.forward.values()) {
        assert_eq!(frame.overlap, *value);
    }
    for (frame, value) in sink.reverse_frames().iter().zip(series.reverse.values()) {
        assert_eq!(frame.overlap, *value);
    }

    let last = 150;
    assert_eq!(sink.overlap_upper_bounds()[last], AxisScale::overlap_upper_bound(&series.forward));
    assert_eq!(sink.reverse_overlap_upper_bounds()[last], AxisScale::overlap_upper_bound(&series.reverse));
    assert_eq!(sink.difference_upper_bounds()[last], AxisScale::overlap_upper_bound(&series.difference));
}

#[derive(Default)]
struct FinishingSink {
    forward_only: Option<usize>,
    mirrored: Option<(usize, usize, usize)>
}

impl VisualizationSink for FinishingSink {
    fn render(&mut self, _frame: &SweepFrame, _series: &OverlapSeries) {}

    fn finish(&mut self, series: &OverlapSeries) {
        self.forward_only = Some(series.len());
    }

    fn finish_mirrored(&mut self, series: &MirroredSeries) {
        self.mirrored = Some((series.forward.len(), series.reverse.len(), series.difference.len()));
    }
}

#[test]
fn mirrored_finish_receives_every_series() {
    let mut config = SweepConfiguration::min_envelope_preset();
    config.sweep_start = -1.0;
    config.sweep_end = 1.0;
    config.step_size = 0.5;
    let engine = config.engine().unwrap();
    let schedule = config.schedule().unwrap();
    let sweep = engine
        .run_mirrored_sweep(&schedule, &config.stationary_spec, &config.moving_spec_initial, config.combine_mode)
        .unwrap();

    let mut sink = FinishingSink::default();
    SweepDriver::new().drive_mirrored(sweep, &mut sink);
    assert_eq!(sink.mirrored, Some((5, 5, 5)));
    assert_eq!(sink.forward_only, None);
}

#[derive(Default)]
struct CountingSink {
    begun: bool,
    rendered: usize,
    finished_len: Option<usize>
}

impl VisualizationSink for CountingSink {
    fn begin(&mut self, _domain: &SampleDomain, _stationary: &SampledCurve, _initial_moving: &SampledCurve) {
        self.begun = true;
    }

    fn render(&mut self, frame: &SweepFrame, series: &OverlapSeries) {
        assert!(self.begun);
        assert_eq!(series.len(), frame.index + 1);
        self.rendered += 1;
    }

    fn finish(&mut self, series: &OverlapSeries) {
        self.finished_len = Some(series.len());
    }
}

#[test]
fn paced_driver_produces_the_same_series() {
    let mut config = SweepConfiguration::product_preset();
    config.sweep_start = -0.5;
    config.sweep_end = 0.5;
    let engine = config.engine().unwrap();
    let schedule = config.schedule().unwrap();
    let run = || engine
        .run_sweep(&schedule, &config.stationary_spec, &config.moving_spec_initial, config.combine_mode)
        .unwrap();

    let driver = SweepDriver::with_frame_interval(Duration::from_millis(1));
    assert_eq!(driver.frame_interval(), Some(Duration::from_millis(1)));

    let mut paced_sink = CountingSink::default();
    let paced = driver.drive(run(), &mut paced_sink);
    let unpaced = SweepDriver::new().drive(run(), &mut CountingSink::default());

    assert_eq!(paced, unpaced);
    assert_eq!(paced_sink.rendered, 11);
    assert_eq!(paced_sink.finished_len, Some(11));
}
