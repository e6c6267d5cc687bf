use std::io::Read;
use std::time::Duration;

use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;

use crate::overlap::combinemode::CombineMode;
use crate::overlap::engine::OverlapSweepEngine;
use crate::overlap::overlaperror::OverlapError;
use crate::overlap::sampledcurve::CurveSpec;
use crate::overlap::sampledomain::SampleDomain;
use crate::overlap::sweepschedule::SweepSchedule;

pub const PRODUCT_PRESET: &str = "product";
pub const MIN_ENVELOPE_PRESET: &str = "min_envelope";

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),

    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] OverlapError)
}

/// 掃描所需的全部參數，可由 JSON 讀入；缺少的欄位沿用 `product` preset。
///
/// ```json
/// {
///   "domain_bounds": [-10.0, 10.0],
///   "sample_count": 1000,
///   "stationary_spec": { "center": 0.0, "amplitude": 2.5, "spread": 1.0, "normalize": true },
///   "moving_spec_initial": { "center": 0.0, "amplitude": 4.0, "spread": 2.0 },
///   "step_size": 0.1,
///   "sweep_start": -7.5,
///   "sweep_end": 7.5,
///   "combine_mode": "product"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfiguration {
    pub domain_bounds: (f64, f64),
    pub sample_count: usize,
    pub stationary_spec: CurveSpec,
    pub moving_spec_initial: CurveSpec,
    pub step_size: f64,
    pub sweep_start: f64,
    pub sweep_end: f64,
    pub combine_mode: CombineMode,
    pub frame_interval_ms: u64
}

impl Default for SweepConfiguration {
    fn default() -> Self {
        SweepConfiguration::product_preset()
    }
}

impl SweepConfiguration {
    /// Narrow normalized Gaussian (×2.5) against a wide one (×4), overlap by
    /// absolute product.
    pub fn product_preset() -> SweepConfiguration {
        SweepConfiguration {
            domain_bounds: (-10.0, 10.0),
            sample_count: 1000,
            stationary_spec: CurveSpec::new(0.0, 2.5, 1.0, true),
            moving_spec_initial: CurveSpec::new(0.0, 4.0, 2.0, false),
            step_size: 0.1,
            sweep_start: -7.5,
            sweep_end: 7.5,
            combine_mode: CombineMode::Product,
            frame_interval_ms: 50
        }
    }

    /// Plain standard normal against a wide Gaussian (×2), overlap by
    /// pointwise minimum.
    pub fn min_envelope_preset() -> SweepConfiguration {
        SweepConfiguration {
            stationary_spec: CurveSpec::new(0.0, 1.0, 1.0, false),
            moving_spec_initial: CurveSpec::new(0.0, 2.0, 2.0, false),
            combine_mode: CombineMode::MinEnvelope,
            ..SweepConfiguration::product_preset()
        }
    }

    pub fn preset(name: &str) -> Result<SweepConfiguration, ConfigurationError> {
        match name {
            PRODUCT_PRESET => Ok(SweepConfiguration::product_preset()),
            MIN_ENVELOPE_PRESET => Ok(SweepConfiguration::min_envelope_preset()),
            _ => Err(ConfigurationError::UnknownPreset(name.to_owned()))
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<SweepConfiguration, ConfigurationError> {
        let config: SweepConfiguration = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<SweepConfiguration, ConfigurationError> {
        SweepConfiguration::from_reader(json.as_bytes())
    }

    pub fn validate(&self) -> Result<(), OverlapError> {
        self.domain()?;
        self.schedule()?;
        self.stationary_spec.validate()?;
        self.moving_spec_initial.validate()
    }

    pub fn domain(&self) -> Result<SampleDomain, OverlapError> {
        let (lower, upper) = self.domain_bounds;
        SampleDomain::new(lower, upper, self.sample_count)
    }

    pub fn schedule(&self) -> Result<SweepSchedule, OverlapError> {
        SweepSchedule::new(self.sweep_start, self.sweep_end, self.step_size)
    }

    pub fn engine(&self) -> Result<OverlapSweepEngine, OverlapError> {
        Ok(OverlapSweepEngine::new(self.domain()?))
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}
