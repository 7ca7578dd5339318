//! Order Wrapped entrypoint: load the stats, set up the terminal, and run
//! the slideshow until it ends or the user quits.
//!
//! # Architecture
//!
//! - Input thread: blocking crossterm reads, normalized onto a channel
//! - Vibe thread: one background POST whose result lands mid-show
//! - Event loop thread (main): owns every timer, all state, and the screen

mod buttons;
mod config;
mod event_loop;
mod event_state;
mod input;
mod render;
mod scenes_render;
mod theme;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use crossbeam_channel::bounded;
use orderwrapped::scene::build_scenes;
use orderwrapped::stats::load_stats;
use orderwrapped::terminal_restore::TerminalRestoreGuard;
use orderwrapped::vibe::spawn_vibe_fetch;
use orderwrapped::{init_logging, log_debug, log_file_path, Slideshow};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::time::Instant;

use crate::buttons::ButtonRegistry;
use crate::config::ShowConfig;
use crate::event_loop::run_event_loop;
use crate::event_state::{EventLoopDeps, EventLoopState};
use crate::input::{spawn_input_thread, DragTracker};

/// Max pending input events before backpressure.
const INPUT_CHANNEL_CAPACITY: usize = 256;

fn main() -> Result<()> {
    let config = ShowConfig::parse();
    init_logging(config.logs);
    if config.logs {
        eprintln!("debug log: {}", log_file_path().display());
    }

    let stats = load_stats(&config.stats)
        .with_context(|| format!("reading stats from {}", config.stats.display()))?;
    let scenes = build_scenes(&stats);

    // Kick the vibe request off before touching the terminal so it resolves
    // as early as possible; its scene shows a fallback until then.
    let vibe_rx = if config.no_vibe {
        None
    } else {
        Some(spawn_vibe_fetch(config.vibe_url.clone(), &stats))
    };

    let terminal_guard = TerminalRestoreGuard::new();
    terminal_guard.enable_raw_mode()?;
    let mut stdout = io::stdout();
    terminal_guard.enter_alt_screen(&mut stdout)?;
    if !config.no_mouse {
        terminal_guard.enable_mouse_capture(&mut stdout)?;
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;

    let (input_tx, input_rx) = bounded(INPUT_CHANNEL_CAPACITY);
    let _input_thread = spawn_input_thread(input_tx);

    let now = Instant::now();
    let mut show = Slideshow::new(scenes, now);
    if config.start_paused {
        show.handle(orderwrapped::Command::TogglePlay, now);
    }
    let mut state = EventLoopState {
        show,
        drag: DragTracker::new(),
        buttons: ButtonRegistry::new(),
        needs_redraw: true,
    };
    let mut deps = EventLoopDeps {
        terminal,
        input_rx,
        vibe_rx,
    };

    log_debug("slideshow starting");
    let result = run_event_loop(&mut state, &mut deps);
    state.show.shutdown();
    terminal_guard.restore();
    result
}
