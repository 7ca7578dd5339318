//! Per-scene staged reveal: chained step delays followed by an optional
//! typewriter.
//!
//! A controller is built when its scene becomes active and torn down (all
//! timers cancelled) before the next scene's controller exists, so a stale
//! fire can never touch a scene it no longer owns. Pause/resume cascades from
//! the sequencer into whichever single timer is live here.

use std::time::{Duration, Instant};

use crate::scene::SceneKind;
use crate::timer::ResumableTimer;

/// Typing cadence for typewriter lines.
const CHAR_TICK_MS: u64 = 50;
/// Hold between one typed line finishing and the next starting.
const LINE_GAP_MS: u64 = 1000;

/// Character-by-character reveal of one or more lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealPlan {
    pub lines: Vec<String>,
    pub char_interval: Duration,
    pub line_gap: Duration,
}

impl RevealPlan {
    pub fn typed(lines: Vec<String>) -> Self {
        Self {
            lines,
            char_interval: Duration::from_millis(CHAR_TICK_MS),
            line_gap: Duration::from_millis(LINE_GAP_MS),
        }
    }
}

/// Timing script for one scene: how long each stage holds before the next
/// appears, then what (if anything) gets typed out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepPlan {
    pub step_delays: Vec<Duration>,
    pub reveal: Option<RevealPlan>,
}

impl StepPlan {
    pub fn new(delays_ms: &[u64]) -> Self {
        Self {
            step_delays: delays_ms.iter().map(|&d| Duration::from_millis(d)).collect(),
            reveal: None,
        }
    }

    fn with_reveal(mut self, reveal: RevealPlan) -> Self {
        self.reveal = Some(reveal);
        self
    }

    /// The reveal script for a scene. Stage delays mirror the web original;
    /// the busiest-day scene additionally types its two quip lines.
    pub fn for_scene(kind: &SceneKind) -> Self {
        match kind {
            SceneKind::Intro { .. } => Self::new(&[1500, 4500]),
            SceneKind::UniqueItems { .. } => Self::new(&[200, 1200]),
            SceneKind::TopItems { items } => {
                // First card two seconds in, then one per second.
                let mut delays = vec![2000];
                delays.extend(std::iter::repeat(1000).take(items.len().saturating_sub(1)));
                Self::new(&delays)
            }
            SceneKind::FavoriteRestaurant { .. } => Self::new(&[800, 2500, 2500]),
            SceneKind::TopRestaurants { ranked } => {
                let mut delays = vec![800];
                delays.extend(std::iter::repeat(1000).take(ranked.len()));
                Self::new(&delays)
            }
            SceneKind::BusiestDay { order_count, .. } => {
                let (line1, line2) = busiest_day_quips(*order_count);
                Self::new(&[200, 1500, 1500, 2000, 500])
                    .with_reveal(RevealPlan::typed(vec![line1, line2]))
            }
            SceneKind::BusiestDayOrders { orders } => {
                // One beat per replayed order.
                let mut delays = vec![300];
                delays.extend(std::iter::repeat(1600).take(orders.len().saturating_sub(1)));
                Self::new(&delays)
            }
            SceneKind::EarliestOrder { .. } | SceneKind::LatestOrder { .. } => {
                Self::new(&[800, 2200])
            }
            SceneKind::MostExpensiveOrder { order } => {
                let items = order.as_ref().map_or(0, |o| o.items.len());
                let mut delays = vec![800, 2000];
                delays.extend(std::iter::repeat(1250).take(items));
                Self::new(&delays)
            }
            SceneKind::Vibe => Self::new(&[600, 1800]),
            SceneKind::End => Self::new(&[1000]),
            SceneKind::Summary(_) => Self::default(),
        }
    }
}

fn busiest_day_quips(order_count: u32) -> (String, String) {
    if order_count == 1 {
        (
            format!("Only {order_count} order in one day?"),
            "Is everything okay?".to_string(),
        )
    } else {
        (
            format!("{order_count} orders in one day!"),
            "Was that all you?...".to_string(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Waiting out `step_delays[i]`.
    Step(usize),
    /// Holding the gap before line `line` starts typing.
    Gap { line: usize },
    /// Typing line `line`, one char per tick.
    Typing { line: usize },
    Done,
}

/// Drives one scene's reveal. Never outlives its scene; never reused.
pub struct StepController {
    plan: StepPlan,
    phase: Phase,
    /// The single live timer for the current phase, if any.
    timer: Option<ResumableTimer>,
    current_step: usize,
    /// Characters revealed per reveal line; frozen (not reset) while paused.
    revealed: Vec<usize>,
    cancelled: bool,
}

impl StepController {
    pub fn new(plan: StepPlan, now: Instant) -> Self {
        let revealed = plan
            .reveal
            .as_ref()
            .map_or_else(Vec::new, |reveal| vec![0; reveal.lines.len()]);
        let mut controller = Self {
            plan,
            phase: Phase::Done,
            timer: None,
            current_step: 0,
            revealed,
            cancelled: false,
        };
        if let Some(first) = controller.plan.step_delays.first().copied() {
            controller.phase = Phase::Step(0);
            controller.timer = Some(ResumableTimer::start(first, now));
        } else {
            controller.begin_reveal(now);
        }
        controller
    }

    fn begin_reveal(&mut self, now: Instant) {
        match self.plan.reveal.as_ref() {
            Some(reveal) if !reveal.lines.is_empty() => {
                self.phase = Phase::Typing { line: 0 };
                self.timer = Some(ResumableTimer::start(reveal.char_interval, now));
            }
            _ => {
                self.phase = Phase::Done;
                self.timer = None;
            }
        }
    }

    /// Advance whichever timer is live; completing one stage immediately arms
    /// the next, so several short stages can clear in a single tick.
    pub fn tick(&mut self, now: Instant) {
        if self.cancelled {
            return;
        }
        loop {
            let fired = match self.timer.as_mut() {
                Some(timer) => timer.poll(now),
                None => false,
            };
            if !fired {
                return;
            }
            match self.phase {
                Phase::Step(index) => {
                    self.current_step += 1;
                    match self.plan.step_delays.get(index + 1).copied() {
                        Some(delay) => {
                            self.phase = Phase::Step(index + 1);
                            self.timer = Some(ResumableTimer::start(delay, now));
                        }
                        None => self.begin_reveal(now),
                    }
                }
                Phase::Gap { line } => {
                    self.phase = Phase::Typing { line };
                    let interval = self.reveal().char_interval;
                    self.timer = Some(ResumableTimer::start(interval, now));
                }
                Phase::Typing { line } => {
                    self.revealed[line] += 1;
                    let reveal = self.reveal();
                    let total = reveal.lines[line].chars().count();
                    let gap = reveal.line_gap;
                    if self.revealed[line] < total {
                        // rearm, not restart: a late poll owes the banked
                        // overshoot so the cadence holds at one char per
                        // interval of played time.
                        if let Some(timer) = self.timer.as_mut() {
                            timer.rearm(now);
                        }
                    } else if line + 1 < self.revealed.len() {
                        self.phase = Phase::Gap { line: line + 1 };
                        self.timer = Some(ResumableTimer::start(gap, now));
                    } else {
                        self.phase = Phase::Done;
                        self.timer = None;
                    }
                }
                Phase::Done => return,
            }
        }
    }

    fn reveal(&self) -> &RevealPlan {
        self.plan
            .reveal
            .as_ref()
            .expect("reveal phases only exist with a reveal plan")
    }

    /// Cascade a global pause into the live timer.
    pub fn pause(&mut self, now: Instant) {
        if let Some(timer) = self.timer.as_mut() {
            timer.pause(now);
        }
    }

    /// Cascade a global resume into the live timer.
    pub fn resume(&mut self, now: Instant) {
        if let Some(timer) = self.timer.as_mut() {
            timer.resume(now);
        }
    }

    /// Teardown: cancel the live timer so nothing owned by this scene can
    /// fire after the sequencer has moved on.
    pub fn cancel_all(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
        self.cancelled = true;
        self.phase = Phase::Done;
    }

    /// Monotone stage counter within this scene's lifetime.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Characters revealed so far for typed line `line`.
    pub fn revealed_chars(&self, line: usize) -> usize {
        self.revealed.get(line).copied().unwrap_or(0)
    }

    /// The visible prefix of typed line `line`.
    pub fn revealed_text(&self, line: usize) -> &str {
        let Some(reveal) = self.plan.reveal.as_ref() else {
            return "";
        };
        let Some(text) = reveal.lines.get(line) else {
            return "";
        };
        let shown = self.revealed_chars(line);
        match text.char_indices().nth(shown) {
            Some((byte, _)) => &text[..byte],
            None => text,
        }
    }

    pub fn is_typing(&self) -> bool {
        matches!(self.phase, Phase::Typing { .. } | Phase::Gap { .. })
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Wall-clock instant of the next stage change, while running.
    pub fn deadline(&self, now: Instant) -> Option<Instant> {
        self.timer.as_ref().and_then(|timer| timer.deadline(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn steps_chain_and_count_monotonically() {
        let t0 = Instant::now();
        let mut steps = StepController::new(StepPlan::new(&[1500, 4500]), t0);
        assert_eq!(steps.current_step(), 0);
        steps.tick(t0 + ms(1499));
        assert_eq!(steps.current_step(), 0);
        steps.tick(t0 + ms(1500));
        assert_eq!(steps.current_step(), 1);
        // Second stage measures from the first stage's completion.
        steps.tick(t0 + ms(5999));
        assert_eq!(steps.current_step(), 1);
        steps.tick(t0 + ms(6000));
        assert_eq!(steps.current_step(), 2);
        assert!(steps.is_finished());
    }

    #[test]
    fn a_late_poll_advances_one_stage_and_rearms_from_the_poll() {
        let t0 = Instant::now();
        let mut steps = StepController::new(StepPlan::new(&[100, 100]), t0);
        steps.tick(t0 + ms(10_000));
        assert_eq!(steps.current_step(), 1);
        // The next stage measures its delay from the poll that advanced.
        steps.tick(t0 + ms(10_099));
        assert_eq!(steps.current_step(), 1);
        steps.tick(t0 + ms(10_100));
        assert_eq!(steps.current_step(), 2);
        assert!(steps.is_finished());
    }

    #[test]
    fn pause_freezes_stage_progress() {
        let t0 = Instant::now();
        let mut steps = StepController::new(StepPlan::new(&[1000]), t0);
        steps.pause(t0 + ms(400));
        steps.tick(t0 + ms(30_000));
        assert_eq!(steps.current_step(), 0);
        steps.resume(t0 + ms(30_000));
        steps.tick(t0 + ms(30_000) + ms(599));
        assert_eq!(steps.current_step(), 0);
        steps.tick(t0 + ms(30_000) + ms(600));
        assert_eq!(steps.current_step(), 1);
    }

    #[test]
    fn typewriter_reveals_one_char_per_tick() {
        let t0 = Instant::now();
        let plan = StepPlan::new(&[100]).with_reveal(RevealPlan {
            lines: vec!["abcd".into()],
            char_interval: ms(50),
            line_gap: ms(1000),
        });
        let mut steps = StepController::new(plan, t0);
        steps.tick(t0 + ms(100));
        assert!(steps.is_typing());
        steps.tick(t0 + ms(150));
        assert_eq!(steps.revealed_text(0), "a");
        steps.tick(t0 + ms(250));
        assert_eq!(steps.revealed_text(0), "abc");
        steps.tick(t0 + ms(300));
        assert_eq!(steps.revealed_text(0), "abcd");
        assert!(steps.is_finished());
    }

    #[test]
    fn typewriter_freezes_mid_line_and_resumes_from_the_same_count() {
        let t0 = Instant::now();
        let line = "forty characters of reveal text go here!".to_string();
        assert_eq!(line.chars().count(), 40);
        let plan = StepPlan::new(&[]).with_reveal(RevealPlan {
            lines: vec![line],
            char_interval: ms(50),
            line_gap: ms(1000),
        });
        let mut steps = StepController::new(plan, t0);
        // 12 of 40 characters shown.
        steps.tick(t0 + ms(600));
        assert_eq!(steps.revealed_chars(0), 12);
        steps.pause(t0 + ms(600));
        steps.tick(t0 + ms(90_000));
        assert_eq!(steps.revealed_chars(0), 12);
        steps.resume(t0 + ms(90_000));
        steps.tick(t0 + ms(90_000) + ms(50));
        assert_eq!(steps.revealed_chars(0), 13);
    }

    #[test]
    fn second_line_starts_after_the_gap() {
        let t0 = Instant::now();
        let plan = StepPlan::new(&[]).with_reveal(RevealPlan {
            lines: vec!["ab".into(), "cd".into()],
            char_interval: ms(50),
            line_gap: ms(1000),
        });
        let mut steps = StepController::new(plan, t0);
        steps.tick(t0 + ms(100));
        assert_eq!(steps.revealed_text(0), "ab");
        assert_eq!(steps.revealed_text(1), "");
        // Gap still holding.
        steps.tick(t0 + ms(1099));
        assert_eq!(steps.revealed_text(1), "");
        steps.tick(t0 + ms(1100));
        steps.tick(t0 + ms(1150));
        assert_eq!(steps.revealed_text(1), "c");
        steps.tick(t0 + ms(1200));
        assert_eq!(steps.revealed_text(1), "cd");
        assert!(steps.is_finished());
    }

    #[test]
    fn cancel_makes_the_controller_inert() {
        let t0 = Instant::now();
        let mut steps = StepController::new(StepPlan::new(&[100, 100]), t0);
        steps.cancel_all();
        steps.tick(t0 + ms(10_000));
        assert_eq!(steps.current_step(), 0);
        assert_eq!(steps.deadline(t0 + ms(10_000)), None);
    }

    #[test]
    fn empty_plan_is_immediately_done() {
        let t0 = Instant::now();
        let steps = StepController::new(StepPlan::default(), t0);
        assert!(steps.is_finished());
        assert_eq!(steps.deadline(t0), None);
    }

    #[test]
    fn busiest_day_plan_types_two_lines() {
        let plan = StepPlan::for_scene(&SceneKind::BusiestDay {
            date: Some("2024-10-03".into()),
            order_count: 5,
        });
        assert_eq!(plan.step_delays.len(), 5);
        let reveal = plan.reveal.unwrap();
        assert_eq!(reveal.lines[0], "5 orders in one day!");
        assert_eq!(reveal.lines[1], "Was that all you?...");
    }

    #[test]
    fn single_order_day_gets_the_concerned_quip() {
        let plan = StepPlan::for_scene(&SceneKind::BusiestDay {
            date: None,
            order_count: 1,
        });
        let reveal = plan.reveal.unwrap();
        assert_eq!(reveal.lines[0], "Only 1 order in one day?");
        assert_eq!(reveal.lines[1], "Is everything okay?");
    }
}
