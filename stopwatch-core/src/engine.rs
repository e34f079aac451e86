use crate::clock::Clock;
use crate::controls::Controls;
use crate::ticker::{TickToken, Ticker};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RunState {
    Stopped,
    Running,
}

/// Bookkeeping for the current run segment.
#[derive(Clone, Copy, Debug)]
struct Segment {
    /// Clock reading at which the stopwatch would have shown zero.
    /// May lie before the clock's origin.
    virtual_start_ms: i64,
    token: TickToken,
}

/// Everything a renderer needs for one refresh.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Snapshot {
    pub elapsed_ms: u64,
    pub running: bool,
    pub laps: Vec<u64>,
}

/// Drift-free stopwatch.
///
/// Each start derives a virtual origin from the time already shown; every
/// sample is `now - origin`. Nothing is accumulated across pauses or ticks.
pub struct StopwatchEngine<C: Clock, T: Ticker> {
    clock: C,
    ticker: T,
    elapsed_ms: u64,
    segment: Option<Segment>,
    laps: Vec<u64>,
    last_token: TickToken,
}

impl<C: Clock, T: Ticker> StopwatchEngine<C, T> {
    pub fn new(clock: C, ticker: T) -> Self {
        Self {
            clock,
            ticker,
            elapsed_ms: 0,
            segment: None,
            laps: Vec::new(),
            last_token: TickToken::from_raw(0),
        }
    }

    pub fn start(&mut self) {
        if self.segment.is_some() {
            return;
        }
        let now = self.clock.now_ms() as i64;
        let token = self.last_token.next();
        self.last_token = token;
        self.segment = Some(Segment {
            virtual_start_ms: now - self.elapsed_ms as i64,
            token,
        });
        self.ticker.schedule(token);
        log::debug!("stopwatch started at {} ms (token {})", self.elapsed_ms, token.raw());
    }

    pub fn stop(&mut self) {
        let Some(segment) = self.segment.take() else {
            return;
        };
        self.ticker.cancel(segment.token);
        self.sample(segment);
        log::debug!("stopwatch stopped at {} ms", self.elapsed_ms);
    }

    pub fn reset(&mut self) {
        if let Some(segment) = self.segment.take() {
            self.ticker.cancel(segment.token);
        }
        self.elapsed_ms = 0;
        self.laps.clear();
        log::debug!("stopwatch reset");
    }

    /// Record a split. Does nothing until the stopwatch has shown some time.
    pub fn lap(&mut self) {
        if let Some(segment) = self.segment {
            self.sample(segment);
        }
        if self.elapsed_ms == 0 {
            return;
        }
        self.laps.push(self.elapsed_ms);
        log::debug!("lap {} at {} ms", self.laps.len(), self.elapsed_ms);
    }

    /// Refresh the elapsed time. Returns false, changing nothing, if the
    /// token does not belong to the current run segment.
    pub fn tick(&mut self, token: TickToken) -> bool {
        match self.segment {
            Some(segment) if segment.token == token => {
                self.sample(segment);
                true
            }
            _ => {
                log::trace!("discarding stale tick {}", token.raw());
                false
            }
        }
    }

    fn sample(&mut self, segment: Segment) {
        let now = self.clock.now_ms() as i64;
        let elapsed = now.saturating_sub(segment.virtual_start_ms).max(0) as u64;
        self.elapsed_ms = self.elapsed_ms.max(elapsed);
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn is_running(&self) -> bool {
        self.segment.is_some()
    }

    pub fn run_state(&self) -> RunState {
        if self.is_running() {
            RunState::Running
        } else {
            RunState::Stopped
        }
    }

    pub fn laps(&self) -> &[u64] {
        &self.laps
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            elapsed_ms: self.elapsed_ms,
            running: self.is_running(),
            laps: self.laps.clone(),
        }
    }

    pub fn controls(&self) -> Controls {
        Controls::for_state(self.is_running(), self.elapsed_ms)
    }
}

impl<C: Clock, T: Ticker> Drop for StopwatchEngine<C, T> {
    fn drop(&mut self) {
        if let Some(segment) = self.segment.take() {
            self.ticker.cancel(segment.token);
        }
    }
}
