mod app;
mod config;
mod error;
mod input;
mod logger;
mod message;
mod pump;
mod stopwatch;
mod ui;

use std::io::{self, Write};
use std::thread;

use clap::Parser;
use crossbeam_channel::Receiver;
use stopwatch_core::{Clock, SystemClock, TickToken, Ticker};

use crate::app::StopwatchApp;
use crate::config::Config;
use crate::error::Error;
use crate::message::{AppOp, Message};
use crate::pump::Pump;
use crate::ui::TerminalGuard;

fn run<C: Clock, T: Ticker, W: Write>(
    app: &mut StopwatchApp<C, T, W>,
    messages: &Receiver<Message>,
) -> Result<(), Error> {
    app.redraw()?;

    while !app.quit_requested() {
        let msg = messages.recv().map_err(|_| Error::Disconnected)?;
        match msg.op() {
            Some(AppOp::Redraw) => match msg.screensize() {
                Some(size) => app.resize(size)?,
                None => app.redraw()?,
            },
            Some(AppOp::Rawkeys) => {
                if let Some(key) = char::from_u32(msg.arg as u32) {
                    app.handle_key(key)?;
                }
            }
            Some(AppOp::FocusChange) => app.set_focus(msg.arg != 0)?,
            Some(AppOp::Pump) => app.handle_pump(TickToken::from_raw(msg.arg))?,
            Some(AppOp::Quit) => break,
            None => log::error!("unknown opcode: {:?}", msg),
        }
    }
    Ok(())
}

fn main() -> Result<(), Error> {
    let config = Config::parse();
    logger::init(&config)?;
    log::info!("stopwatch starting, refresh every {} ms", config.tick_ms);

    let (main_tx, main_rx) = crossbeam_channel::unbounded();
    let pump = Pump::spawn(main_tx.clone());

    let terminal = TerminalGuard::enter()?;
    let screensize = crossterm::terminal::size()?;
    thread::spawn(move || input::input_thread(main_tx));

    let mut app = StopwatchApp::new(
        io::stdout(),
        screensize,
        SystemClock::new(),
        pump.ticker(config.tick_ms),
    );
    let result = run(&mut app, &main_rx);

    // Dropping the engine cancels any scheduled tick before the pump quits
    drop(app);
    let shutdown = pump.shutdown();
    drop(terminal);

    if let Err(e) = &result {
        log::error!("stopwatch failed: {}", e);
    }
    result.and(shutdown)
}
