use stopwatch_core::{Clock, StopwatchEngine, Ticker};

pub struct StopwatchState<C: Clock, T: Ticker> {
    pub engine: StopwatchEngine<C, T>,
    pub lap_scroll_offset: usize,
}

impl<C: Clock, T: Ticker> StopwatchState<C, T> {
    pub fn new(clock: C, ticker: T) -> Self {
        Self {
            engine: StopwatchEngine::new(clock, ticker),
            lap_scroll_offset: 0,
        }
    }

    pub fn toggle(&mut self) {
        if self.engine.is_running() {
            self.engine.stop();
        } else {
            self.engine.start();
        }
    }

    /// Returns true if a lap was recorded.
    pub fn record_lap(&mut self) -> bool {
        if !self.engine.controls().lap_enabled {
            return false;
        }
        let before = self.engine.laps().len();
        self.engine.lap();
        // Newest lap is shown on top
        self.lap_scroll_offset = 0;
        self.engine.laps().len() > before
    }

    pub fn reset(&mut self) -> bool {
        if !self.engine.controls().reset_enabled {
            return false;
        }
        self.engine.reset();
        self.lap_scroll_offset = 0;
        true
    }

    pub fn scroll_up(&mut self) {
        self.lap_scroll_offset = self.lap_scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, visible: usize) {
        let max = self.engine.laps().len().saturating_sub(visible);
        self.lap_scroll_offset = (self.lap_scroll_offset + 1).min(max);
    }

    pub fn clamp_scroll(&mut self, visible: usize) {
        let max = self.engine.laps().len().saturating_sub(visible);
        self.lap_scroll_offset = self.lap_scroll_offset.min(max);
    }
}
