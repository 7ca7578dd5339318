//! Core state machines for the Order Wrapped terminal slideshow.
//!
//! Everything timing-sensitive lives here, poll-driven and deterministic:
//! the pause-aware timer primitive, the scene sequencer, per-scene step
//! reveals, and the glue that keeps them honest across pause/resume and
//! navigation. The binary under `src/bin/orderwrapped/` owns the terminal
//! and the event loop and drives [`show::Slideshow`].

pub mod logging;
pub mod progress;
pub mod scene;
pub mod sequencer;
pub mod show;
pub mod stats;
pub mod steps;
pub mod terminal_restore;
pub mod timer;
pub mod vibe;

pub use logging::{init_logging, log_debug, log_file_path};
pub use show::{Command, Slideshow};
pub use terminal_restore::{restore_terminal, TerminalRestoreGuard};
