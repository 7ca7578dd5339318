use std::thread;
use std::time::Instant;

use crossbeam_channel::Sender;
use crossterm::event;
use orderwrapped::log_debug;

use crate::input::event::{map_event, InputEvent};

/// Blocking reader for terminal input; exits when the receiver is dropped.
pub(crate) fn spawn_input_thread(tx: Sender<InputEvent>) -> thread::JoinHandle<()> {
    thread::spawn(move || loop {
        let raw = match event::read() {
            Ok(raw) => raw,
            Err(err) => {
                log_debug(&format!("input read error: {err}"));
                return;
            }
        };
        if let Some(mapped) = map_event(raw, Instant::now()) {
            if tx.send(mapped).is_err() {
                return;
            }
        }
    })
}
