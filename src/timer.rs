//! Timer Subsystem
//!
//! Wall clock reading, the stopwatch state machine, and the one-second
//! repeating callback both panels are driven by.

use chrono::{DateTime, Local};
use gloo_timers::callback::Interval;

/// Period of both repeating timers
pub const TICK_MS: u32 = 1_000;

/// Elapsed whole seconds as `MM:SS`. Minutes keep counting past 59.
pub fn format_elapsed(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Stopwatch: Stopped or Running, counting whole seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stopwatch {
    elapsed: u64,
    running: bool,
}

impl Stopwatch {
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop counting, keep the elapsed time
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Back to Stopped at zero, whatever the previous state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// One second passed
    pub fn tick(&mut self) {
        if self.running {
            self.elapsed += 1;
        }
    }

    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn display(&self) -> String {
        format_elapsed(self.elapsed)
    }
}

/// What the clock panel shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockReading {
    pub time: String,
    pub date: String,
}

impl ClockReading {
    pub fn now() -> Self {
        Self::at(&Local::now())
    }

    pub fn at(now: &DateTime<Local>) -> Self {
        Self {
            time: now.format("%H:%M:%S").to_string(),
            date: now.format("%A, %B %-d, %Y").to_string(),
        }
    }
}

/// Owner of one repeating scheduled callback.
///
/// The handle cancels its schedule when dropped (as gloo's `Interval` does), so
/// replacing or stopping the ticker always cancels the previous schedule.
pub struct Ticker<H = Interval> {
    handle: Option<H>,
}

/// Ticker driven by a browser interval
pub type IntervalTicker = Ticker<Interval>;

impl<H> Default for Ticker<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> Ticker<H> {
    pub fn stop(&mut self) {
        self.handle = None;
    }

    /// Cancel the current schedule, then schedule afresh only while `running`
    pub fn follow(&mut self, running: bool, schedule: impl FnOnce() -> H) {
        self.stop();
        if running {
            self.handle = Some(schedule());
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

impl Ticker<Interval> {
    pub fn start(&mut self, period_ms: u32, callback: impl FnMut() + 'static) {
        self.follow(true, || Interval::new(period_ms, callback));
    }

    pub fn run_while(&mut self, running: bool, period_ms: u32, callback: impl FnMut() + 'static) {
        self.follow(running, || Interval::new(period_ms, callback));
    }
}
