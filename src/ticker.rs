//! Tick scheduling for the emission loop.
//!
//! The scheduler is a trait so the loop can be driven in tests (and by the
//! single-shot `tick` command) without sleeping.

use std::thread;
use std::time::Duration;

/// Decides when the next tick happens.
pub trait Ticker {
    /// Block until the next tick is due. Returns `false` once the schedule
    /// is exhausted.
    fn wait(&mut self) -> bool;
}

/// Wall-clock ticker with a fixed period, optionally bounded to a tick count.
///
/// Sleeps before each tick, so the first tick fires one full period after
/// the loop starts.
pub struct IntervalTicker {
    period: Duration,
    remaining: Option<u64>,
}

impl IntervalTicker {
    /// Unbounded ticker; ticks until the process exits.
    pub fn new(period: Duration) -> Self {
        Self { period, remaining: None }
    }

    /// Ticker that stops after `ticks` ticks.
    pub fn with_limit(period: Duration, ticks: u64) -> Self {
        Self {
            period,
            remaining: Some(ticks),
        }
    }
}

impl Ticker for IntervalTicker {
    fn wait(&mut self) -> bool {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return false;
            }
            *remaining -= 1;
        }

        thread::sleep(self.period);
        true
    }
}

/// Fires immediately a fixed number of times.
pub struct InstantTicker {
    remaining: u64,
}

impl InstantTicker {
    pub fn new(ticks: u64) -> Self {
        Self { remaining: ticks }
    }
}

impl Ticker for InstantTicker {
    fn wait(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}
