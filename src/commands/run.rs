//! Emission loop command.
//!
//! Stdout carries nothing but the emission stream here; progress and
//! shutdown notes go to the diagnostic log.

use eyre::{Context, Result};
use log::info;
use std::io;

use crate::emitter::{self, Emitter, RngCoin, SystemClock, TICK_INTERVAL};
use crate::ticker::IntervalTicker;

pub fn run(ticks: Option<u64>) -> Result<()> {
    let mut ticker = match ticks {
        Some(n) => IntervalTicker::with_limit(TICK_INTERVAL, n),
        None => IntervalTicker::new(TICK_INTERVAL),
    };

    info!(
        "Starting emission loop ({} ms interval, {})",
        TICK_INTERVAL.as_millis(),
        ticks.map_or_else(|| "unbounded".to_string(), |n| format!("{} ticks", n))
    );

    let mut emitter = Emitter::new(RngCoin(rand::rng()), SystemClock, io::stdout());
    let emitted = emitter::run_loop(&mut emitter, &mut ticker).context("Emission sink failed")?;

    info!("Emission loop finished after {} ticks", emitted);
    Ok(())
}
