use std::io::Stdout;

use crossbeam_channel::Receiver;
use orderwrapped::vibe::VibeResult;
use orderwrapped::Slideshow;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::buttons::ButtonRegistry;
use crate::input::{DragTracker, InputEvent};

pub(crate) struct EventLoopState {
    pub(crate) show: Slideshow,
    pub(crate) drag: DragTracker,
    pub(crate) buttons: ButtonRegistry,
    pub(crate) needs_redraw: bool,
}

pub(crate) struct EventLoopDeps {
    pub(crate) terminal: Terminal<CrosstermBackend<Stdout>>,
    pub(crate) input_rx: Receiver<InputEvent>,
    /// Present until the vibe fetch resolves (or fails); then dropped so the
    /// select stops watching it.
    pub(crate) vibe_rx: Option<Receiver<VibeResult>>,
}
