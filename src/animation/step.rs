//! The single-step gait: a four-phase state machine driving the left leg.

use std::f32::consts::PI;

/// Duration of each of the two motion phases, in seconds.
pub const STEP_MOVE_DURATION: f32 = 0.30;
/// Duration of each of the two hold phases, in seconds.
pub const STEP_HOLD_DURATION: f32 = 0.20;
/// Peak hip flexion of a step, in degrees.
pub const STEP_HIP_DEG: f32 = 35.0;
/// Peak knee flexion of a step, in degrees.
pub const STEP_KNEE_DEG: f32 = 45.0;

/// The current phase of a [`StepCycle`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepPhase {
    /// The leg eases from neutral to full flexion.
    #[default]
    MoveForward,
    /// The leg holds full flexion.
    HoldForward,
    /// The leg eases back to neutral.
    MoveBack,
    /// The leg rests at neutral before the cycle ends.
    HoldNeutral,
}

/// Cosine ease-in-out on `[0, 1]`.
#[inline]
pub fn ease(u: f32) -> f32 {
    0.5 - 0.5 * (PI * u).cos()
}

/// A single step: `MoveForward → HoldForward → MoveBack → HoldNeutral`, then inactive.
///
/// `phase_elapsed` is advanced by `dt` before the current phase is evaluated,
/// and goes back to zero on every phase change.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepCycle {
    active: bool,
    phase: StepPhase,
    phase_elapsed: f32,
}

impl StepCycle {
    /// An inactive step cycle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a step.
    ///
    /// Returns `false`, and changes nothing, if a step is already in progress.
    pub fn trigger(&mut self) -> bool {
        if self.active {
            return false;
        }

        self.active = true;
        self.phase = StepPhase::MoveForward;
        self.phase_elapsed = 0.0;
        true
    }

    /// Stops the cycle immediately, without touching any joint.
    pub fn cancel(&mut self) {
        *self = StepCycle::default();
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn phase(&self) -> StepPhase {
        self.phase
    }

    /// Time spent in the current phase, in seconds.
    #[inline]
    pub fn phase_elapsed(&self) -> f32 {
        self.phase_elapsed
    }

    fn enter(&mut self, phase: StepPhase) {
        self.phase = phase;
        self.phase_elapsed = 0.0;
    }

    /// Advances the cycle by `dt` seconds.
    ///
    /// Returns the left hip and knee angles to apply this frame, or `None` if
    /// the cycle is inactive. Hold phases return the pose they hold, so the
    /// step owns the left leg for its whole duration.
    pub fn update(&mut self, dt: f32) -> Option<(f32, f32)> {
        if !self.active {
            return None;
        }

        self.phase_elapsed += dt;
        let u = (self.phase_elapsed / STEP_MOVE_DURATION).clamp(0.0, 1.0);

        match self.phase {
            StepPhase::MoveForward => {
                let e = ease(u);
                if u >= 1.0 {
                    self.enter(StepPhase::HoldForward);
                }
                Some((STEP_HIP_DEG * e, STEP_KNEE_DEG * e))
            }
            StepPhase::HoldForward => {
                if self.phase_elapsed >= STEP_HOLD_DURATION {
                    self.enter(StepPhase::MoveBack);
                }
                Some((STEP_HIP_DEG, STEP_KNEE_DEG))
            }
            StepPhase::MoveBack => {
                let e = ease(u);
                if u >= 1.0 {
                    self.enter(StepPhase::HoldNeutral);
                }
                Some((STEP_HIP_DEG * (1.0 - e), STEP_KNEE_DEG * (1.0 - e)))
            }
            StepPhase::HoldNeutral => {
                if self.phase_elapsed >= STEP_HOLD_DURATION {
                    self.cancel();
                }
                Some((0.0, 0.0))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 1024.0;

    #[test]
    fn ease_endpoints() {
        assert_eq!(ease(0.0), 0.0);
        assert!((ease(0.5) - 0.5).abs() < 1.0e-6);
        assert!((ease(1.0) - 1.0).abs() < 1.0e-6);
    }

    #[test]
    fn inactive_cycle_writes_nothing() {
        let mut step = StepCycle::new();
        assert_eq!(step.update(DT), None);
        assert!(!step.is_active());
    }

    #[test]
    fn full_cycle_visits_every_phase() {
        let mut step = StepCycle::new();
        assert!(step.trigger());

        let mut phases = vec![step.phase()];
        let mut last_written = None;
        let mut peak: (f32, f32) = (0.0, 0.0);
        let mut frames = 0;

        while step.is_active() {
            if let Some(angles) = step.update(DT) {
                peak.0 = peak.0.max(angles.0);
                peak.1 = peak.1.max(angles.1);
                last_written = Some(angles);
            }
            frames += 1;

            if step.is_active() && phases.last() != Some(&step.phase()) {
                phases.push(step.phase());
            }
        }

        assert_eq!(
            phases,
            vec![
                StepPhase::MoveForward,
                StepPhase::HoldForward,
                StepPhase::MoveBack,
                StepPhase::HoldNeutral
            ]
        );

        let duration = frames as f32 * DT;
        assert!((duration - 1.0).abs() <= 4.0 * DT, "step lasted {duration}s");

        let (hip, knee) = last_written.unwrap();
        assert!(hip.abs() < 1.0e-5 && knee.abs() < 1.0e-5);
        assert!((peak.0 - STEP_HIP_DEG).abs() < 1.0e-4);
        assert!((peak.1 - STEP_KNEE_DEG).abs() < 1.0e-4);
    }

    #[test]
    fn retrigger_while_active_is_ignored() {
        let mut step = StepCycle::new();
        step.trigger();
        for _ in 0..100 {
            step.update(DT);
        }

        let before = step;
        assert!(!step.trigger());
        assert_eq!(step, before);
        assert_eq!(step.phase(), StepPhase::MoveForward);
        assert_eq!(step.phase_elapsed(), 100.0 * DT);
    }

    #[test]
    fn phase_time_resets_on_transition() {
        let mut step = StepCycle::new();
        step.trigger();
        step.update(0.1);
        step.update(0.1);
        assert_eq!(step.phase(), StepPhase::MoveForward);
        step.update(0.15);
        assert_eq!(step.phase(), StepPhase::HoldForward);
        assert_eq!(step.phase_elapsed(), 0.0);
    }

    #[test]
    fn hold_phases_write_the_held_pose() {
        let mut step = StepCycle::new();
        step.trigger();
        while step.phase() != StepPhase::HoldForward {
            step.update(DT);
        }
        assert_eq!(step.update(DT), Some((STEP_HIP_DEG, STEP_KNEE_DEG)));

        while step.phase() != StepPhase::HoldNeutral {
            step.update(DT);
        }
        assert_eq!(step.update(DT), Some((0.0, 0.0)));

        while step.is_active() {
            assert!(step.update(DT).is_some());
        }
        assert_eq!(step.update(DT), None);
    }

    #[test]
    fn large_dt_still_reaches_full_flexion() {
        let mut step = StepCycle::new();
        step.trigger();
        let (hip, knee) = step.update(1.0).unwrap();
        assert!((hip - STEP_HIP_DEG).abs() < 1.0e-4);
        assert!((knee - STEP_KNEE_DEG).abs() < 1.0e-4);
        assert_eq!(step.phase(), StepPhase::HoldForward);
    }
}
