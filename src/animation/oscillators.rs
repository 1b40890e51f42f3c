//! Continuous, time-driven joint generators.
//!
//! Each function maps the elapsed time `t` (seconds) to joint angles in degrees.

use std::f32::consts::PI;

/// Left hip and knee angles of the idle walk cycle.
///
/// The knee only bends forward: it stays at zero during the back swing.
#[inline]
pub fn idle_walk(t: f32) -> (f32, f32) {
    let s = (2.0 * t).sin();
    (30.0 * s, 40.0 * s.max(0.0))
}

/// Left and right shoulder angles of the arm wave, half a period apart.
#[inline]
pub fn arm_wave(t: f32) -> (f32, f32) {
    (60.0 * (1.5 * t).sin(), 60.0 * (1.5 * t + PI).sin())
}

/// Neck yaw of the head bob.
#[inline]
pub fn head_bob(t: f32) -> f32 {
    15.0 * (2.5 * t).sin()
}

/// Torso yaw of the torso sway.
#[inline]
pub fn torso_sway(t: f32) -> f32 {
    10.0 * t.sin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn idle_walk_stays_in_range() {
        let mut rng = rand::rng();

        for _ in 0..1000 {
            let t = rng.random_range(0.0..10_000.0f32);
            let (hip, knee) = idle_walk(t);
            assert!((-30.0..=30.0).contains(&hip), "hip {hip} at t = {t}");
            assert!((0.0..=40.0).contains(&knee), "knee {knee} at t = {t}");
        }
    }

    #[test]
    fn idle_walk_knee_bends_on_forward_swing_only() {
        let (hip, knee) = idle_walk(PI / 4.0);
        assert!((hip - 30.0).abs() < 1.0e-4);
        assert!((knee - 40.0).abs() < 1.0e-4);

        let (hip, knee) = idle_walk(3.0 * PI / 4.0);
        assert!((hip + 30.0).abs() < 1.0e-4);
        assert_eq!(knee, 0.0);
    }

    #[test]
    fn arms_wave_in_opposition() {
        let mut rng = rand::rng();

        for _ in 0..100 {
            let t = rng.random_range(0.0..100.0f32);
            let (left, right) = arm_wave(t);
            assert!((left + right).abs() < 1.0e-2, "t = {t}");
        }
    }

    #[test]
    fn oscillators_start_at_rest() {
        assert_eq!(idle_walk(0.0), (0.0, 0.0));
        assert_eq!(head_bob(0.0), 0.0);
        assert_eq!(torso_sway(0.0), 0.0);
        assert_eq!(arm_wave(0.0).0, 0.0);
    }

    #[test]
    fn amplitudes() {
        assert!((head_bob(PI / 5.0) - 15.0).abs() < 1.0e-4);
        assert!((torso_sway(PI / 2.0) - 10.0).abs() < 1.0e-4);
        assert!((arm_wave(PI / 3.0).0 - 60.0).abs() < 1.0e-3);
    }
}
