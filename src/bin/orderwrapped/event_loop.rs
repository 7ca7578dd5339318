//! Single-threaded runtime loop: drives the show's timers, redraws, and
//! reacts to input and the late vibe result.
//!
//! The select timeout is bounded by the earliest timer deadline so stage
//! changes land within one poll interval of their due time; while paused
//! nothing is due and the loop mostly sleeps.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossbeam_channel::{never, select};
use orderwrapped::log_debug;
use orderwrapped::vibe::VibeResult;
use orderwrapped::Command;

use crate::event_state::{EventLoopDeps, EventLoopState};
use crate::input::{DragOutcome, InputEvent, SwipeDirection};
use crate::render;

const EVENT_LOOP_IDLE_MS: u64 = 50;
const PAUSED_IDLE_MS: u64 = 500;

pub(crate) fn run_event_loop(state: &mut EventLoopState, deps: &mut EventLoopDeps) -> Result<()> {
    state.needs_redraw = true;
    let mut running = true;
    while running {
        let now = Instant::now();
        if state.show.tick(now).is_some() {
            state.needs_redraw = true;
        }
        // The progress bar moves with played time, so playing means redrawing.
        if state.needs_redraw || state.show.is_playing() {
            let show = &state.show;
            let buttons = &mut state.buttons;
            deps.terminal
                .draw(|frame| render::draw(frame, show, buttons, now))?;
            state.needs_redraw = false;
        }

        let timeout = poll_timeout(state, now);
        let never_vibe = never::<VibeResult>();
        let vibe_rx = deps.vibe_rx.as_ref().unwrap_or(&never_vibe);
        let incoming = select! {
            recv(deps.input_rx) -> event => Incoming::Input(event.ok()),
            recv(vibe_rx) -> vibe => Incoming::Vibe(vibe.ok()),
            default(timeout) => Incoming::Idle,
        };
        match incoming {
            Incoming::Input(Some(event)) => {
                if !handle_input(state, event) {
                    running = false;
                }
            }
            // Input thread gone; nothing left to react to.
            Incoming::Input(None) => running = false,
            Incoming::Vibe(vibe) => {
                if let Some(vibe) = vibe {
                    log_debug("vibe result received");
                    state.show.set_vibe(vibe);
                    state.needs_redraw = true;
                }
                // Resolved or failed, either way stop watching the channel.
                deps.vibe_rx = None;
            }
            Incoming::Idle => {}
        }
    }
    Ok(())
}

enum Incoming {
    Input(Option<InputEvent>),
    Vibe(Option<VibeResult>),
    Idle,
}

/// How long the select may sleep before the show needs another poll.
fn poll_timeout(state: &EventLoopState, now: Instant) -> Duration {
    if !state.show.is_playing() {
        return Duration::from_millis(PAUSED_IDLE_MS);
    }
    let idle = Duration::from_millis(EVENT_LOOP_IDLE_MS);
    match state.show.deadline(now) {
        Some(deadline) => idle.min(deadline.saturating_duration_since(now)),
        None => idle,
    }
}

/// Apply one input event. Returns `false` to quit.
fn handle_input(state: &mut EventLoopState, event: InputEvent) -> bool {
    let now = Instant::now();
    match event {
        InputEvent::Quit => return false,
        InputEvent::Next => apply(state, Command::Next, now),
        InputEvent::Previous => apply(state, Command::Previous, now),
        InputEvent::TogglePlay => apply(state, Command::TogglePlay, now),
        InputEvent::Resize => state.needs_redraw = true,
        InputEvent::PointerDown { x, y, at } => state.drag.press(x, y, at),
        InputEvent::PointerUp { x, y, at } => match state.drag.release(x, y, at) {
            Some(DragOutcome::Swipe(SwipeDirection::Left)) => apply(state, Command::Next, now),
            Some(DragOutcome::Swipe(SwipeDirection::Right)) => {
                apply(state, Command::Previous, now)
            }
            Some(DragOutcome::Tap { x, y }) => {
                if let Some(action) = state.buttons.hit(x, y) {
                    apply(state, action.to_command(), now);
                }
            }
            None => {}
        },
    }
    true
}

fn apply(state: &mut EventLoopState, command: Command, now: Instant) {
    state.show.handle(command, now);
    state.needs_redraw = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buttons::{ButtonAction, ButtonRegistry};
    use crate::input::DragTracker;
    use orderwrapped::scene::{Scene, SceneKind};
    use orderwrapped::Slideshow;

    fn state_with_scenes(count: usize) -> EventLoopState {
        let scenes = (0..count)
            .map(|_| Scene {
                kind: SceneKind::End,
                duration: Duration::from_secs(10),
            })
            .collect();
        EventLoopState {
            show: Slideshow::new(scenes, Instant::now()),
            drag: DragTracker::new(),
            buttons: ButtonRegistry::new(),
            needs_redraw: false,
        }
    }

    #[test]
    fn a_left_swipe_advances_the_show() {
        let mut state = state_with_scenes(3);
        let t0 = Instant::now();
        assert!(handle_input(&mut state, InputEvent::PointerDown { x: 40, y: 10, at: t0 }));
        assert!(handle_input(
            &mut state,
            InputEvent::PointerUp {
                x: 20,
                y: 10,
                at: t0 + Duration::from_millis(200),
            }
        ));
        assert_eq!(state.show.current_index(), 1);
        assert!(state.needs_redraw);
    }

    #[test]
    fn a_tap_on_a_registered_button_fires_its_action() {
        let mut state = state_with_scenes(3);
        state.buttons.register(10, 17, 22, ButtonAction::Next);
        let t0 = Instant::now();
        handle_input(&mut state, InputEvent::PointerDown { x: 12, y: 22, at: t0 });
        handle_input(
            &mut state,
            InputEvent::PointerUp {
                x: 12,
                y: 22,
                at: t0 + Duration::from_millis(80),
            },
        );
        assert_eq!(state.show.current_index(), 1);
    }

    #[test]
    fn a_tap_outside_every_button_does_nothing() {
        let mut state = state_with_scenes(3);
        let t0 = Instant::now();
        handle_input(&mut state, InputEvent::PointerDown { x: 3, y: 3, at: t0 });
        handle_input(
            &mut state,
            InputEvent::PointerUp {
                x: 3,
                y: 3,
                at: t0 + Duration::from_millis(80),
            },
        );
        assert_eq!(state.show.current_index(), 0);
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut state = state_with_scenes(1);
        assert!(!handle_input(&mut state, InputEvent::Quit));
    }

    #[test]
    fn paused_timeout_is_long_and_playing_timeout_is_bounded() {
        let mut state = state_with_scenes(1);
        let now = Instant::now();
        assert!(poll_timeout(&state, now) <= Duration::from_millis(EVENT_LOOP_IDLE_MS));
        state.show.handle(Command::TogglePlay, now);
        assert_eq!(
            poll_timeout(&state, now),
            Duration::from_millis(PAUSED_IDLE_MS)
        );
    }
}
