use std::fmt::Display;
use std::io::{self, Write};

use crossterm::event::{DisableFocusChange, EnableFocusChange};
use crossterm::style::{Color, Print, StyledContent, Stylize};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use stopwatch_core::{format_full, format_parts, lap_rows, Clock, LapMark, Ticker};

use crate::stopwatch::StopwatchState;

/// Terminal size as (columns, rows).
pub type Point = (u16, u16);

const LIST_TOP: u16 = 8;
const FOOTER_HEIGHT: u16 = 2;

pub fn clear_screen(out: &mut impl Write) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))
}

fn put(out: &mut impl Write, x: u16, y: u16, content: impl Display) -> io::Result<()> {
    queue!(out, cursor::MoveTo(x, y), Print(content))
}

/// Number of lap rows that fit under the header.
pub fn max_visible_laps(screensize: Point) -> usize {
    screensize.1.saturating_sub(LIST_TOP + 2 + FOOTER_HEIGHT) as usize
}

fn control_hint(key: &str, label: &str, enabled: bool) -> StyledContent<String> {
    let text = format!("[{}] {}", key, label);
    if enabled {
        text.stylize()
    } else {
        text.dark_grey()
    }
}

fn lap_line(number: usize, interval_ms: u64, split_ms: u64) -> String {
    format!(
        "{:<6}{:>12}{:>12}",
        format!("{:02}", number),
        format_full(interval_ms),
        format_full(split_ms)
    )
}

pub fn draw_stopwatch<C: Clock, T: Ticker>(
    out: &mut impl Write,
    screensize: Point,
    state: &StopwatchState<C, T>,
) -> io::Result<()> {
    clear_screen(out)?;
    let engine = &state.engine;

    // Header
    put(out, 2, 0, "STOPWATCH".bold())?;
    let status = if engine.is_running() {
        "RUNNING".with(Color::Blue)
    } else {
        "STOPPED".dark_grey()
    };
    put(out, screensize.0.saturating_sub(10), 0, status)?;

    // Time display
    let parts = format_parts(engine.elapsed_ms());
    let time = format!("{} : {} . {}", parts.minutes, parts.seconds, parts.centiseconds);
    put(out, 4, 2, time.bold())?;
    let labels = format!(
        "{:<w1$}   {:<2}   {:<2}",
        "min",
        "sec",
        "cs",
        w1 = parts.minutes.len()
    );
    put(out, 4, 3, labels.dark_grey())?;

    // Controls
    let controls = engine.controls();
    put(out, 2, 5, control_hint("space", controls.primary.label(), true))?;
    put(out, 18, 5, control_hint("l", "Lap", controls.lap_enabled))?;
    put(out, 28, 5, control_hint("r", "Reset", controls.reset_enabled))?;

    // Lap list (most recent first)
    let rows = lap_rows(engine.laps());
    if !rows.is_empty() {
        put(out, 2, LIST_TOP, format!("LAPS ({} total)", rows.len()).bold())?;
        let heading = format!("{:<6}{:>12}{:>12}", "No.", "Lap", "Split");
        put(out, 2, LIST_TOP + 1, heading.dark_grey())?;

        let visible = rows
            .iter()
            .skip(state.lap_scroll_offset)
            .take(max_visible_laps(screensize));
        for (i, row) in visible.enumerate() {
            let y = LIST_TOP + 2 + i as u16;
            let line = lap_line(row.number, row.interval_ms, row.split_ms);
            match row.mark {
                Some(LapMark::Fastest) => {
                    put(out, 2, y, format!("{}  fastest", line).with(Color::Green))?
                }
                Some(LapMark::Slowest) => {
                    put(out, 2, y, format!("{}  slowest", line).with(Color::Red))?
                }
                None => put(out, 2, y, line)?,
            }
        }
    }

    // Footer
    let footer = "space=start/stop  l=lap  r=reset  \u{2191}\u{2193}=scroll  h=help  q=quit";
    put(out, 2, screensize.1.saturating_sub(1), footer.dark_grey())?;

    out.flush()
}

pub fn draw_help(out: &mut impl Write, screensize: Point, help_text: &str) -> io::Result<()> {
    clear_screen(out)?;
    put(out, 2, 0, "HELP".bold())?;
    for (i, line) in help_text.lines().enumerate() {
        put(out, 2, 2 + i as u16, line)?;
    }
    put(out, 2, screensize.1.saturating_sub(1), "any key=close".dark_grey())?;
    out.flush()
}

/// Raw mode plus alternate screen for as long as the guard lives.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableFocusChange, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        execute!(io::stdout(), cursor::Show, DisableFocusChange, LeaveAlternateScreen).ok();
        terminal::disable_raw_mode().ok();
    }
}
