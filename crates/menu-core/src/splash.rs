//! Splash sequence shown before the language picker
//!
//! hotel name → advertisement → language picker, each visible phase followed
//! by a fade-out. The sequence is pure data; time comes from a [`SplashClock`]
//! so it can be fast-forwarded.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplashPhase {
    Hotel,
    Ad,
    Language,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplashState {
    pub phase: SplashPhase,
    pub opacity: f32,
}

impl SplashState {
    const fn visible(phase: SplashPhase) -> Self {
        Self { phase, opacity: 1.0 }
    }

    const fn fading(phase: SplashPhase) -> Self {
        Self { phase, opacity: 0.0 }
    }
}

/// Per-phase durations in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplashTimings {
    pub hotel_ms: u64,
    pub ad_ms: u64,
    pub fade_ms: u64,
}

impl Default for SplashTimings {
    fn default() -> Self {
        Self {
            hotel_ms: 2000,
            ad_ms: 2000,
            fade_ms: 500,
        }
    }
}

/// One entry of the schedule: `state` starts at `at_ms`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplashStep {
    pub at_ms: u64,
    pub state: SplashState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SplashSequence {
    steps: Vec<SplashStep>,
}

impl SplashSequence {
    pub fn new(timings: SplashTimings) -> Self {
        let phases = [
            (SplashState::visible(SplashPhase::Hotel), timings.hotel_ms),
            (SplashState::fading(SplashPhase::Hotel), timings.fade_ms),
            (SplashState::visible(SplashPhase::Ad), timings.ad_ms),
            (SplashState::fading(SplashPhase::Ad), timings.fade_ms),
        ];

        let mut at_ms = 0;
        let mut steps = Vec::with_capacity(phases.len() + 1);
        for (state, duration) in phases {
            steps.push(SplashStep { at_ms, state });
            at_ms = at_ms.saturating_add(duration);
        }
        steps.push(SplashStep {
            at_ms,
            state: SplashState::visible(SplashPhase::Language),
        });

        Self { steps }
    }

    /// Straight to the language picker (returning visitors)
    pub fn skipped() -> Self {
        Self {
            steps: vec![SplashStep {
                at_ms: 0,
                state: SplashState::visible(SplashPhase::Language),
            }],
        }
    }

    pub fn steps(&self) -> &[SplashStep] {
        &self.steps
    }

    pub fn total(&self) -> Duration {
        Duration::from_millis(self.steps.last().map(|s| s.at_ms).unwrap_or(0))
    }

    pub fn state_at(&self, elapsed: Duration) -> SplashState {
        let elapsed_ms = elapsed.as_millis() as u64;
        self.steps
            .iter()
            .rev()
            .find(|step| step.at_ms <= elapsed_ms)
            .map(|step| step.state)
            .unwrap_or(SplashState::visible(SplashPhase::Language))
    }

    pub fn is_finished_at(&self, elapsed: Duration) -> bool {
        self.state_at(elapsed).phase == SplashPhase::Language
    }
}

pub trait SplashClock {
    fn elapsed(&self) -> Duration;
}

/// Clock that only moves when told to
#[derive(Default)]
pub struct ManualClock {
    elapsed: Cell<Duration>,
}

impl ManualClock {
    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }
}

impl SplashClock for ManualClock {
    fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }
}

pub struct SplashPlayer<C: SplashClock> {
    sequence: SplashSequence,
    clock: C,
}

impl<C: SplashClock> SplashPlayer<C> {
    pub fn new(sequence: SplashSequence, clock: C) -> Self {
        Self { sequence, clock }
    }

    pub fn current(&self) -> SplashState {
        self.sequence.state_at(self.clock.elapsed())
    }

    pub fn is_finished(&self) -> bool {
        self.sequence.is_finished_at(self.clock.elapsed())
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
