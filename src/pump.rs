//! Tick pump: a helper thread that posts `Pump` messages to the main loop
//! at a fixed interval while a run segment is scheduled.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use stopwatch_core::{TickToken, Ticker};

use crate::error::Error;
use crate::message::{AppOp, Message};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpControl {
    Start { interval_ms: u64, token: TickToken },
    Stop { token: TickToken },
    Quit,
}

pub fn pump_thread(control: Receiver<PumpControl>, main: Sender<Message>) {
    let mut active: Option<(TickToken, Duration)> = None;

    loop {
        // Block while idle, otherwise wait at most one interval
        let next = match active {
            Some((_, interval)) => control.recv_timeout(interval),
            None => control.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        match next {
            Ok(PumpControl::Start { interval_ms, token }) => {
                active = Some((token, Duration::from_millis(interval_ms.max(1))));
            }
            Ok(PumpControl::Stop { token }) => {
                if active.map(|(t, _)| t) == Some(token) {
                    active = None;
                }
            }
            Ok(PumpControl::Quit) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {
                if let Some((token, _)) = active {
                    if main.send(Message::new(AppOp::Pump, token.raw())).is_err() {
                        break;
                    }
                }
            }
        }
    }
    log::debug!("pump thread exiting");
}

/// Handle to a running pump thread.
pub struct Pump {
    control: Sender<PumpControl>,
    handle: JoinHandle<()>,
}

impl Pump {
    pub fn spawn(main: Sender<Message>) -> Self {
        let (control, control_rx) = crossbeam_channel::unbounded();
        let handle = thread::spawn(move || pump_thread(control_rx, main));
        Self { control, handle }
    }

    pub fn ticker(&self, interval_ms: u64) -> PumpTicker {
        PumpTicker {
            control: self.control.clone(),
            interval_ms,
        }
    }

    pub fn shutdown(self) -> Result<(), Error> {
        self.control.send(PumpControl::Quit).ok();
        self.handle.join().map_err(|_| Error::PumpPanicked)
    }
}

/// `Ticker` backed by the pump thread.
#[derive(Clone)]
pub struct PumpTicker {
    control: Sender<PumpControl>,
    interval_ms: u64,
}

impl Ticker for PumpTicker {
    fn schedule(&mut self, token: TickToken) {
        let msg = PumpControl::Start {
            interval_ms: self.interval_ms,
            token,
        };
        if self.control.send(msg).is_err() {
            log::warn!("pump thread is gone, display will not refresh");
        }
    }

    fn cancel(&mut self, token: TickToken) {
        self.control.send(PumpControl::Stop { token }).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pump_tokens(rx: &Receiver<Message>) -> Vec<u64> {
        rx.try_iter()
            .filter(|m| m.op() == Some(AppOp::Pump))
            .map(|m| m.arg)
            .collect()
    }

    #[test]
    fn test_idle_pump_sends_nothing() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let pump = Pump::spawn(tx);
        thread::sleep(Duration::from_millis(30));
        assert!(rx.try_recv().is_err());
        pump.shutdown().unwrap();
    }

    #[test]
    fn test_ticks_carry_token_and_stop_on_cancel() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let pump = Pump::spawn(tx);
        let mut ticker = pump.ticker(2);
        let token = TickToken::from_raw(7);

        ticker.schedule(token);
        let first = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(first.op(), Some(AppOp::Pump));
        assert_eq!(first.arg, 7);

        ticker.cancel(token);
        thread::sleep(Duration::from_millis(30));
        // Anything sent before the stop was processed
        let in_flight = pump_tokens(&rx);
        assert!(in_flight.iter().all(|&t| t == 7));

        thread::sleep(Duration::from_millis(30));
        assert!(pump_tokens(&rx).is_empty());
        pump.shutdown().unwrap();
    }

    #[test]
    fn test_cancel_of_old_token_keeps_new_one() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let pump = Pump::spawn(tx);
        let mut ticker = pump.ticker(20);

        ticker.schedule(TickToken::from_raw(1));
        ticker.schedule(TickToken::from_raw(2));
        ticker.cancel(TickToken::from_raw(1));

        let mut seen = Vec::new();
        while seen.len() < 3 {
            let msg = rx.recv_timeout(Duration::from_secs(2)).unwrap();
            seen.push(msg.arg);
        }
        assert!(seen.iter().all(|&t| t == 2));
        pump.shutdown().unwrap();
    }

    #[test]
    fn test_shutdown_joins_running_pump() {
        let (tx, _rx) = crossbeam_channel::unbounded();
        let pump = Pump::spawn(tx);
        let mut ticker = pump.ticker(1);
        ticker.schedule(TickToken::from_raw(3));
        pump.shutdown().unwrap();
    }
}
