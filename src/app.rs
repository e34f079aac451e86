use std::io::Write;

use stopwatch_core::{Clock, TickToken, Ticker};

use crate::error::Error;
use crate::input::{KEY_CTRL_C, KEY_DOWN, KEY_ESC, KEY_UP};
use crate::stopwatch::StopwatchState;
use crate::ui::{self, Point};

const HELP_TEXT: &str = "\
space / enter  start or stop
l              record a split (enabled once time has passed)
r              reset time and laps
up / down      scroll the lap list
h / ?          this help
q / esc        quit

Laps show the split (total time) and the time since the previous lap.
The lowest split is marked fastest, the highest slowest.";

pub struct StopwatchApp<C: Clock, T: Ticker, W: Write> {
    out: W,
    screensize: Point,
    pub stopwatch: StopwatchState<C, T>,
    help_visible: bool,
    allow_redraw: bool,
    quit: bool,
}

impl<C: Clock, T: Ticker, W: Write> StopwatchApp<C, T, W> {
    pub fn new(out: W, screensize: Point, clock: C, ticker: T) -> Self {
        Self {
            out,
            screensize,
            stopwatch: StopwatchState::new(clock, ticker),
            help_visible: false,
            allow_redraw: true,
            quit: false,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn redraw(&mut self) -> Result<(), Error> {
        if !self.allow_redraw {
            return Ok(());
        }
        if self.help_visible {
            ui::draw_help(&mut self.out, self.screensize, HELP_TEXT)?;
        } else {
            ui::draw_stopwatch(&mut self.out, self.screensize, &self.stopwatch)?;
        }
        Ok(())
    }

    pub fn resize(&mut self, screensize: Point) -> Result<(), Error> {
        self.screensize = screensize;
        self.stopwatch
            .clamp_scroll(ui::max_visible_laps(screensize));
        self.redraw()
    }

    pub fn set_focus(&mut self, foreground: bool) -> Result<(), Error> {
        self.allow_redraw = foreground;
        if foreground {
            self.redraw()?;
        }
        Ok(())
    }

    pub fn handle_pump(&mut self, token: TickToken) -> Result<(), Error> {
        if self.stopwatch.engine.tick(token) {
            self.redraw()?;
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: char) -> Result<(), Error> {
        if matches!(key, 'q' | KEY_ESC | KEY_CTRL_C) {
            self.quit = true;
            return Ok(());
        }
        if self.help_visible {
            self.help_visible = false;
            return self.redraw();
        }

        match key {
            ' ' | '\r' | '\n' => self.stopwatch.toggle(),
            'l' => {
                if !self.stopwatch.record_lap() {
                    return Ok(());
                }
            }
            'r' => {
                if !self.stopwatch.reset() {
                    return Ok(());
                }
            }
            KEY_UP | 'k' => self.stopwatch.scroll_up(),
            KEY_DOWN | 'j' => self
                .stopwatch
                .scroll_down(ui::max_visible_laps(self.screensize)),
            'h' | '?' => self.help_visible = true,
            _ => return Ok(()),
        }
        self.redraw()
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }
}
