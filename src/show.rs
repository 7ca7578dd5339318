//! The slideshow proper: one owner gluing the scene sequencer to the active
//! scene's step controller.
//!
//! All cross-component effects flow through here: navigation commands from
//! the input router, the pause cascade into step timers, and the teardown
//! ordering on scene changes (outgoing step timers are cancelled strictly
//! before the incoming controller exists).

use std::time::{Duration, Instant};

use crate::logging::log_debug;
use crate::progress;
use crate::scene::Scene;
use crate::sequencer::{PlayState, SceneSequencer, SequencerEvent};
use crate::steps::{StepController, StepPlan};
use crate::vibe::VibeResult;

/// Normalized navigation command, produced by the input router from
/// keyboard, drag, or button input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    TogglePlay,
}

pub struct Slideshow {
    sequencer: SceneSequencer,
    /// Controller for the current scene; rebuilt on every index change and
    /// never carried across scenes. `None` only after the show has ended.
    steps: Option<StepController>,
    vibe: Option<VibeResult>,
}

impl Slideshow {
    pub fn new(scenes: Vec<Scene>, now: Instant) -> Self {
        let sequencer = SceneSequencer::new(scenes, now);
        let steps = StepController::new(StepPlan::for_scene(&sequencer.scene().kind), now);
        Self {
            sequencer,
            steps: Some(steps),
            vibe: None,
        }
    }

    /// Apply one navigation command. Boundary navigation is a no-op that
    /// leaves the step state untouched too.
    pub fn handle(&mut self, command: Command, now: Instant) {
        match command {
            Command::Next => {
                if self.sequencer.next(now) {
                    self.rebuild_steps(now);
                }
            }
            Command::Previous => {
                if self.sequencer.previous(now) {
                    self.rebuild_steps(now);
                }
            }
            Command::TogglePlay => {
                let before = self.sequencer.play_state();
                let after = self.sequencer.toggle_play(now);
                if before == after {
                    return;
                }
                // Cascade in the same logical step as the sequencer's own
                // timer: a paused show must never leave a step timer counting.
                if let Some(steps) = self.steps.as_mut() {
                    match after {
                        PlayState::Paused => steps.pause(now),
                        PlayState::Playing => steps.resume(now),
                        PlayState::Ended => {}
                    }
                }
                log_debug(match after {
                    PlayState::Paused => "playback paused",
                    _ => "playback resumed",
                });
            }
        }
    }

    /// Drive both schedulers. Returns the sequencer event, if any, so the
    /// caller can react to scene changes (e.g. force a redraw).
    pub fn tick(&mut self, now: Instant) -> Option<SequencerEvent> {
        let event = self.sequencer.tick(now);
        match event {
            Some(SequencerEvent::Advanced { .. }) => self.rebuild_steps(now),
            Some(SequencerEvent::Finished) => self.teardown_steps(),
            None => {}
        }
        if let Some(steps) = self.steps.as_mut() {
            steps.tick(now);
        }
        event
    }

    /// Cancel the outgoing scene's timers, then (and only then) build the
    /// incoming scene's controller.
    fn rebuild_steps(&mut self, now: Instant) {
        self.teardown_steps();
        self.steps = Some(StepController::new(
            StepPlan::for_scene(&self.sequencer.scene().kind),
            now,
        ));
    }

    fn teardown_steps(&mut self) {
        if let Some(mut outgoing) = self.steps.take() {
            outgoing.cancel_all();
        }
    }

    /// Cancel every timer the show owns; used on presentation teardown.
    pub fn shutdown(&mut self) {
        self.teardown_steps();
    }

    /// Record the late-arriving vibe result.
    pub fn set_vibe(&mut self, vibe: VibeResult) {
        self.vibe = Some(vibe);
    }

    pub fn vibe(&self) -> Option<&VibeResult> {
        self.vibe.as_ref()
    }

    pub fn scene(&self) -> &Scene {
        self.sequencer.scene()
    }

    pub fn current_index(&self) -> usize {
        self.sequencer.current_index()
    }

    pub fn scene_count(&self) -> usize {
        self.sequencer.scene_count()
    }

    pub fn play_state(&self) -> PlayState {
        self.sequencer.play_state()
    }

    pub fn is_playing(&self) -> bool {
        self.sequencer.is_playing()
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        self.sequencer.elapsed(now)
    }

    /// Progress through the current scene in percent, clamped to [0, 100].
    pub fn progress_percent(&self, now: Instant) -> f64 {
        progress::percent(self.sequencer.elapsed(now), self.sequencer.duration())
    }

    pub fn steps(&self) -> Option<&StepController> {
        self.steps.as_ref()
    }

    /// Earliest wall-clock instant anything in the show needs a poll.
    pub fn deadline(&self, now: Instant) -> Option<Instant> {
        let seq = self.sequencer.deadline(now);
        let step = self.steps.as_ref().and_then(|steps| steps.deadline(now));
        match (seq, step) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        }
    }
}
