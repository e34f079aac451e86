//! Repeating tick capability supplied by the host.
//!
//! The engine asks for ticks with `schedule` and withdraws them with
//! `cancel`. The host then calls `StopwatchEngine::tick` with the same
//! token on every refresh until cancelled.

use std::cell::RefCell;
use std::rc::Rc;

/// Identifies one run segment (one `start` up to the next `stop`/`reset`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TickToken(u64);

impl TickToken {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

pub trait Ticker {
    /// Begin delivering ticks tagged with `token`.
    fn schedule(&mut self, token: TickToken);

    /// Stop delivering ticks tagged with `token`. Ticks already in flight
    /// may still arrive and are expected to be discarded by the engine.
    fn cancel(&mut self, token: TickToken);
}

impl<T: Ticker + ?Sized> Ticker for Box<T> {
    fn schedule(&mut self, token: TickToken) {
        (**self).schedule(token);
    }

    fn cancel(&mut self, token: TickToken) {
        (**self).cancel(token);
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickerCall {
    Schedule(TickToken),
    Cancel(TickToken),
}

#[derive(Debug, Default)]
struct ManualTickerInner {
    active: Option<TickToken>,
    calls: Vec<TickerCall>,
}

/// Test double: records calls and exposes the live token so a test can
/// fire ticks by hand. Clones share state.
#[derive(Clone, Debug, Default)]
pub struct ManualTicker {
    inner: Rc<RefCell<ManualTickerInner>>,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token currently scheduled, if any.
    pub fn active(&self) -> Option<TickToken> {
        self.inner.borrow().active
    }

    pub fn calls(&self) -> Vec<TickerCall> {
        self.inner.borrow().calls.clone()
    }

    pub fn schedule_count(&self) -> usize {
        self.inner
            .borrow()
            .calls
            .iter()
            .filter(|c| matches!(c, TickerCall::Schedule(_)))
            .count()
    }
}

impl Ticker for ManualTicker {
    fn schedule(&mut self, token: TickToken) {
        let mut inner = self.inner.borrow_mut();
        inner.active = Some(token);
        inner.calls.push(TickerCall::Schedule(token));
    }

    fn cancel(&mut self, token: TickToken) {
        let mut inner = self.inner.borrow_mut();
        if inner.active == Some(token) {
            inner.active = None;
        }
        inner.calls.push(TickerCall::Cancel(token));
    }
}
