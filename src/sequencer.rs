//! Top-level scene scheduler: ordered scenes, current index, play state, and
//! the single auto-advance timer.
//!
//! Exactly one timer is ever live, owned here for the current scene; it is
//! cancelled before any mutation of the index or play state that could race
//! it. Manual navigation always forces play and resets elapsed time; the only
//! way into `Ended` is the final scene's timer elapsing naturally.

use std::time::{Duration, Instant};

use crate::logging::log_debug;
use crate::scene::Scene;
use crate::timer::ResumableTimer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Playing,
    Paused,
    /// Terminal: reached only by natural elapse of the last scene. Manual
    /// navigation re-enters `Playing`.
    Ended,
}

/// Emitted by [`SceneSequencer::tick`] when the auto-advance timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerEvent {
    Advanced { from: usize, to: usize },
    Finished,
}

pub struct SceneSequencer {
    scenes: Vec<Scene>,
    current: usize,
    state: PlayState,
    timer: ResumableTimer,
}

impl SceneSequencer {
    /// `scenes` must be non-empty; the scene list is fixed for the lifetime
    /// of one presentation.
    pub fn new(scenes: Vec<Scene>, now: Instant) -> Self {
        assert!(!scenes.is_empty(), "a presentation needs at least one scene");
        let timer = ResumableTimer::start(scenes[0].duration, now);
        Self {
            scenes,
            current: 0,
            state: PlayState::Playing,
            timer,
        }
    }

    /// Jump to `index`: cancels the live timer, resets elapsed, forces play,
    /// and arms a fresh timer for the new scene.
    pub fn advance_to(&mut self, index: usize, now: Instant) {
        let index = index.min(self.scenes.len() - 1);
        self.timer.cancel();
        self.current = index;
        self.state = PlayState::Playing;
        self.timer = ResumableTimer::start(self.scenes[index].duration, now);
    }

    /// Step forward; a no-op (not an error) on the last scene.
    pub fn next(&mut self, now: Instant) -> bool {
        if self.current + 1 >= self.scenes.len() {
            return false;
        }
        self.advance_to(self.current + 1, now);
        true
    }

    /// Step backward; a no-op on the first scene.
    pub fn previous(&mut self, now: Instant) -> bool {
        if self.current == 0 {
            return false;
        }
        self.advance_to(self.current - 1, now);
        true
    }

    /// Flip play/pause. A no-op once ended. Returns the resulting state so
    /// the caller can cascade the transition into the step timers in the same
    /// logical step.
    pub fn toggle_play(&mut self, now: Instant) -> PlayState {
        match self.state {
            PlayState::Playing => {
                self.timer.pause(now);
                self.state = PlayState::Paused;
            }
            PlayState::Paused => {
                self.timer.resume(now);
                self.state = PlayState::Playing;
            }
            PlayState::Ended => {}
        }
        self.state
    }

    /// Drive the auto-advance timer. At most one event per call.
    pub fn tick(&mut self, now: Instant) -> Option<SequencerEvent> {
        if !self.timer.poll(now) {
            return None;
        }
        let from = self.current;
        if self.current + 1 < self.scenes.len() {
            self.advance_to(self.current + 1, now);
            Some(SequencerEvent::Advanced {
                from,
                to: self.current,
            })
        } else {
            self.timer.cancel();
            self.state = PlayState::Ended;
            log_debug("slideshow finished");
            Some(SequencerEvent::Finished)
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn scene(&self) -> &Scene {
        &self.scenes[self.current]
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    pub fn play_state(&self) -> PlayState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayState::Playing
    }

    /// Played time within the current scene, frozen while paused.
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.timer.elapsed(now)
    }

    pub fn duration(&self) -> Duration {
        self.scenes[self.current].duration
    }

    /// Wall-clock instant of the next auto-advance, while playing.
    pub fn deadline(&self, now: Instant) -> Option<Instant> {
        self.timer.deadline(now)
    }
}
