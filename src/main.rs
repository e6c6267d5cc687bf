use std::process::ExitCode;

use clap::Parser;
use tracing::{
    error,
    info
};
use tracing_subscriber::EnvFilter;

use overlapsweep::configuration::{
    ConfigurationError,
    PRODUCT_PRESET,
    SweepConfiguration
};
use overlapsweep::overlap::sweepdriver::SweepDriver;
use overlapsweep::sink::tracingsink::TracingSink;

/// Sweep one Gaussian past another and log the overlap area per frame.
#[derive(Parser, Debug)]
#[command(name = "overlapsweep", version)]
struct Args {
    /// Built-in parameter set: "product" or "min_envelope".
    #[arg(long, default_value = PRODUCT_PRESET)]
    preset: String,

    /// Inline JSON configuration; overrides --preset.
    #[arg(long)]
    config: Option<String>,

    /// Also sweep with the roles swapped and log the difference.
    #[arg(long)]
    mirrored: bool,

    /// Wait frame_interval_ms between frames.
    #[arg(long)]
    realtime: bool
}

fn run(args: &Args) -> Result<(), ConfigurationError> {
    let config = match &args.config {
        Some(json) => SweepConfiguration::from_json_str(json)?,
        None => SweepConfiguration::preset(&args.preset)?
    };
    let engine = config.engine()?;
    let schedule = config.schedule()?;
    let driver = if args.realtime {
        SweepDriver::with_frame_interval(config.frame_interval())
    } else {
        SweepDriver::new()
    };
    let mut sink = TracingSink::new();

    if args.mirrored {
        let sweep = engine.run_mirrored_sweep(
            &schedule,
            &config.stationary_spec,
            &config.moving_spec_initial,
            config.combine_mode)?;
        let series = driver.drive_mirrored(sweep, &mut sink);
        info!(
            forward_max = ?series.forward.max(),
            reverse_max = ?series.reverse.max(),
            difference_max = ?series.difference.max(),
            "mirrored sweep complete"
        );
    } else {
        let sweep = engine.run_sweep(
            &schedule,
            &config.stationary_spec,
            &config.moving_spec_initial,
            config.combine_mode)?;
        let series = driver.drive(sweep, &mut sink);
        info!(frames = series.len(), max = ?series.max(), "sweep complete");
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "overlap sweep failed");
            ExitCode::FAILURE
        }
    }
}
