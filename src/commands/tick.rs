//! Single-shot emission command.

use eyre::{Context, Result};
use std::io;

use crate::emitter::{Emitter, RngCoin, SystemClock};

pub fn run() -> Result<()> {
    let mut emitter = Emitter::new(RngCoin(rand::rng()), SystemClock, io::stdout());

    let emission = emitter.tick().context("Failed to write emission")?;
    log::debug!("single tick: {:?}", emission);

    Ok(())
}
