//! Horizontal swipe recognition over raw pointer press/release pairs.
//!
//! A swipe needs enough horizontal travel, a fast enough release, and a
//! predominantly horizontal direction. Short presses count as taps (for the
//! clickable buttons); slow, short, or vertical drags are dropped entirely.

use std::time::Instant;

/// Minimum horizontal travel, in columns, before a drag can be a swipe.
const MIN_SWIPE_COLS: i32 = 6;
/// Minimum release velocity in columns per second.
const MIN_SWIPE_VELOCITY: f64 = 20.0;
/// Presses that move at most this far count as taps.
const TAP_MAX_COLS: i32 = 1;
/// Horizontal travel must be at least twice the vertical travel; terminal
/// rows are about twice as tall as columns are wide.
const AXIS_DOMINANCE: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SwipeDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DragOutcome {
    Swipe(SwipeDirection),
    Tap { x: u16, y: u16 },
}

#[derive(Debug, Default)]
pub(crate) struct DragTracker {
    origin: Option<(u16, u16, Instant)>,
}

impl DragTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn press(&mut self, x: u16, y: u16, at: Instant) {
        self.origin = Some((x, y, at));
    }

    /// Classify the gesture on release. Returns `None` for drags that are
    /// too short, too slow, or mostly vertical (and for releases without a
    /// matching press).
    pub(crate) fn release(&mut self, x: u16, y: u16, at: Instant) -> Option<DragOutcome> {
        let (ox, oy, pressed_at) = self.origin.take()?;
        let dx = i32::from(x) - i32::from(ox);
        let dy = i32::from(y) - i32::from(oy);

        if dx.abs() <= TAP_MAX_COLS && dy.abs() <= TAP_MAX_COLS {
            return Some(DragOutcome::Tap { x: ox, y: oy });
        }
        if dx.abs() < MIN_SWIPE_COLS || dx.abs() < dy.abs() * AXIS_DOMINANCE {
            return None;
        }
        let held = at.saturating_duration_since(pressed_at).as_secs_f64();
        if held > 0.0 && (f64::from(dx.abs() as u32)) / held < MIN_SWIPE_VELOCITY {
            return None;
        }
        Some(DragOutcome::Swipe(if dx < 0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn gesture(from: (u16, u16), to: (u16, u16), held_ms: u64) -> Option<DragOutcome> {
        let t0 = Instant::now();
        let mut tracker = DragTracker::new();
        tracker.press(from.0, from.1, t0);
        tracker.release(to.0, to.1, t0 + Duration::from_millis(held_ms))
    }

    #[test]
    fn fast_horizontal_drag_is_a_swipe() {
        assert_eq!(
            gesture((40, 10), (20, 10), 200),
            Some(DragOutcome::Swipe(SwipeDirection::Left))
        );
        assert_eq!(
            gesture((20, 10), (40, 11), 200),
            Some(DragOutcome::Swipe(SwipeDirection::Right))
        );
    }

    #[test]
    fn short_movement_is_a_tap_at_the_press_position() {
        assert_eq!(gesture((12, 3), (13, 3), 100), Some(DragOutcome::Tap { x: 12, y: 3 }));
        assert_eq!(gesture((12, 3), (12, 3), 100), Some(DragOutcome::Tap { x: 12, y: 3 }));
    }

    #[test]
    fn slow_drag_is_ignored() {
        // 10 columns over 2 seconds: 5 cols/s, below the velocity floor.
        assert_eq!(gesture((40, 10), (30, 10), 2000), None);
    }

    #[test]
    fn mostly_vertical_drag_is_ignored() {
        assert_eq!(gesture((40, 4), (30, 20), 150), None);
    }

    #[test]
    fn medium_but_too_short_drag_is_neither_tap_nor_swipe() {
        assert_eq!(gesture((40, 10), (36, 10), 100), None);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = DragTracker::new();
        assert_eq!(tracker.release(5, 5, Instant::now()), None);
    }
}
