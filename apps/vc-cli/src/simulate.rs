//! Simulated step response: the loop output is fed straight back as the
//! next measurement.

use std::io::Write;

use serde::Serialize;
use vc_control::{ControlLoop, Correctable, LoopTuning};
use vc_core::Airway;

use crate::error::CliResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct SimulateOptions {
    /// Controlled ticks.
    pub ticks: usize,
    /// Rows of zeros emitted before the loop starts.
    pub settle: usize,
    pub format: OutputFormat,
}

impl Default for SimulateOptions {
    fn default() -> Self {
        Self {
            ticks: 100,
            settle: 10,
            format: OutputFormat::Csv,
        }
    }
}

#[derive(Debug, Serialize)]
struct Sample<Q> {
    tick: usize,
    target: Q,
    measurement: Q,
}

/// Run the loop described by `tuning` for quantity `Q`, writing one row per
/// tick. Returns the final measurement.
pub fn run<Q, W>(tuning: &LoopTuning, options: SimulateOptions, out: &mut W) -> CliResult<Q>
where
    Q: Correctable + Serialize,
    W: Write,
{
    let mut lp: ControlLoop<Q> = tuning.build()?;
    let target = tuning.target::<Q>()?;
    let mut process = tuning.process(Q::zero())?;

    tracing::info!(
        unit = Q::UNIT,
        target = %target,
        terms = lp.len(),
        ticks = options.ticks,
        "starting simulation"
    );

    for tick in 0..options.settle {
        write_sample(out, options.format, tick, Q::zero(), Q::zero())?;
    }
    for tick in options.settle..options.settle + options.ticks {
        let measurement = lp.tick(&mut process);
        write_sample(out, options.format, tick, target, measurement)?;
    }

    tracing::info!(measurement = %process.measurement, "simulation finished");
    Ok(process.measurement)
}

fn write_sample<Q, W>(
    out: &mut W,
    format: OutputFormat,
    tick: usize,
    target: Q,
    measurement: Q,
) -> CliResult<()>
where
    Q: Airway + Serialize,
    W: Write,
{
    match format {
        OutputFormat::Csv => writeln!(out, "{}, {}", target.value(), measurement.value())?,
        OutputFormat::Json => {
            let sample = Sample {
                tick,
                target,
                measurement,
            };
            serde_json::to_writer(&mut *out, &sample)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
