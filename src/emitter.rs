//! Core emission semantics: one coin flip, one line, once per tick.
//!
//! The emitter owns its random source, its clock, and its output sink, all
//! injected so ticks can be driven in tests without wall-clock waits.

use chrono::{DateTime, Local};
use rand::Rng;
use std::io::Write;
use std::time::Duration;

use crate::ticker::Ticker;

/// Fixed tick period. Not configurable.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Local-time format used in warning lines, second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The line emitted when the coin comes up tails.
pub const PLACEHOLDER_LINE: &str = "Anybody message...";

/// Source of fair boolean draws.
pub trait Coin {
    fn flip(&mut self) -> bool;
}

/// Fair coin backed by any `rand` generator.
pub struct RngCoin<R: Rng>(pub R);

impl<R: Rng> Coin for RngCoin<R> {
    fn flip(&mut self) -> bool {
        self.0.random_bool(0.5)
    }
}

/// Source of current local time.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Clock reading real wall-clock local time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Outcome of one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission {
    /// Synthetic warning line carrying a preformatted local timestamp.
    Warning { timestamp: String },
    /// The fixed placeholder line.
    Placeholder,
}

impl Emission {
    /// Flip the coin and build the emission for this tick. The timestamp is
    /// captured at draw time, not at render time.
    pub fn draw(coin: &mut impl Coin, clock: &impl Clock) -> Self {
        if coin.flip() {
            let timestamp = clock.now().format(TIMESTAMP_FORMAT).to_string();
            Emission::Warning { timestamp }
        } else {
            Emission::Placeholder
        }
    }

    /// Render the output line, without the trailing newline.
    ///
    /// The warning body repeats the header timestamp verbatim; consumers of
    /// the stream expect both occurrences to be identical.
    pub fn render(&self) -> String {
        match self {
            Emission::Warning { timestamp } => {
                format!("LOG | WARNING  | {ts} | Message sended in {ts}.", ts = timestamp)
            }
            Emission::Placeholder => PLACEHOLDER_LINE.to_string(),
        }
    }
}

/// Writes exactly one emission line per tick to its sink.
pub struct Emitter<C, K, W> {
    coin: C,
    clock: K,
    sink: W,
}

impl<C: Coin, K: Clock, W: Write> Emitter<C, K, W> {
    pub fn new(coin: C, clock: K, sink: W) -> Self {
        Self { coin, clock, sink }
    }

    /// Perform one tick: draw, write one newline-terminated line, flush.
    /// Sink errors propagate; there is no retry.
    pub fn tick(&mut self) -> std::io::Result<Emission> {
        let emission = Emission::draw(&mut self.coin, &self.clock);
        writeln!(self.sink, "{}", emission.render())?;
        self.sink.flush()?;
        Ok(emission)
    }
}

/// Drive the emitter until the ticker's schedule is exhausted. Returns the
/// number of ticks performed. Stops on the first sink error.
pub fn run_loop<C: Coin, K: Clock, W: Write>(
    emitter: &mut Emitter<C, K, W>,
    ticker: &mut impl Ticker,
) -> std::io::Result<u64> {
    let mut ticks = 0;
    while ticker.wait() {
        let emission = emitter.tick()?;
        ticks += 1;
        log::debug!("tick {}: {:?}", ticks, emission);
    }
    Ok(ticks)
}
