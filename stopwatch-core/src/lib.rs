//! Pure stopwatch logic with no platform dependencies.
//! Time and tick scheduling are injected, so everything here runs on a
//! simulated clock in tests.

pub mod clock;
pub mod controls;
pub mod engine;
pub mod format;
pub mod laps;
pub mod ticker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controls::{Controls, PrimaryControl};
pub use engine::{RunState, Snapshot, StopwatchEngine};
pub use format::{format_full, format_parts, TimeParts};
pub use laps::{lap_rows, LapMark, LapRow};
pub use ticker::{ManualTicker, TickToken, Ticker, TickerCall};
