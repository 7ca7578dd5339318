//! Derived progress readout for the active scene.
//!
//! Pure arithmetic over what the sequencer already reports; the event loop
//! simply stops recomputing while paused, so no extra pause bookkeeping lives
//! here.

use std::time::Duration;

/// `elapsed / duration` in percent, clamped to `[0, 100]`.
pub fn percent(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 0.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64() * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn maps_elapsed_onto_percent() {
        assert_eq!(percent(ms(0), ms(8000)), 0.0);
        assert_eq!(percent(ms(2000), ms(8000)), 25.0);
        assert_eq!(percent(ms(8000), ms(8000)), 100.0);
    }

    #[test]
    fn clamps_overshoot() {
        assert_eq!(percent(ms(9000), ms(8000)), 100.0);
    }

    #[test]
    fn zero_duration_reads_as_zero() {
        assert_eq!(percent(ms(100), ms(0)), 0.0);
    }
}
