//! Physics integrator - rotation and decaying angular speed
//!
//! Rotation is an unbounded accumulator in degrees; speed is in degrees per
//! second and always stays within [0, max_speed].

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Rotation the wheel starts at
pub const INITIAL_ROTATION: f64 = 90.0;

/// Spin impulse range, as multiples of half the max speed
pub const IMPULSE_MIN: f64 = 0.75;
pub const IMPULSE_MAX: f64 = 1.75;

const STANDARD: PhysicsConstants = PhysicsConstants {
    resistance: -360.0,
    max_speed: 4500.0,
};

const LEGACY: PhysicsConstants = PhysicsConstants {
    resistance: -45.0,
    max_speed: 450.0,
};

/// Limit `value` to [min, max]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Named sets of physics constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhysicsPreset {
    /// Fast spins with strong braking
    #[default]
    Standard,
    /// The slow wheel of the first release
    Legacy,
    /// Values taken from `resistance` and `max_speed`
    Custom,
}

/// Persisted physics settings
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub preset: PhysicsPreset,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resistance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_speed: Option<f64>,
}

/// Resolved constants used by the integrator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConstants {
    /// Deceleration in degrees/second², always negative
    pub resistance: f64,
    /// Upper bound on angular speed in degrees/second
    pub max_speed: f64,
}

impl PhysicsConfig {
    pub fn constants(&self) -> PhysicsConstants {
        match self.preset {
            PhysicsPreset::Standard => STANDARD,
            PhysicsPreset::Legacy => LEGACY,
            PhysicsPreset::Custom => {
                // Resistance is stored as a magnitude or a negative rate; both brake
                let resistance = self
                    .resistance
                    .filter(|r| r.is_finite() && *r != 0.0)
                    .map(|r| -r.abs())
                    .unwrap_or(STANDARD.resistance);
                let max_speed = self
                    .max_speed
                    .filter(|s| s.is_finite() && *s > 0.0)
                    .unwrap_or(STANDARD.max_speed);
                PhysicsConstants {
                    resistance,
                    max_speed,
                }
            }
        }
    }
}

/// Rotation state of the wheel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelState {
    /// Accumulated rotation in degrees, never wrapped
    pub rotation: f64,
    /// Angular speed in degrees/second
    pub speed: f64,
    /// Seconds of positive elapsed time integrated so far
    pub run_time: f64,
}

impl Default for WheelState {
    fn default() -> Self {
        Self {
            rotation: INITIAL_ROTATION,
            speed: 0.0,
            run_time: 0.0,
        }
    }
}

impl WheelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_spinning(&self) -> bool {
        self.speed > 0.0
    }

    /// Advance by `dt` seconds
    ///
    /// Returns false and leaves the state untouched when `dt` is not a
    /// positive finite number.
    pub fn step(&mut self, dt: f64, constants: &PhysicsConstants) -> bool {
        if !dt.is_finite() || dt <= 0.0 {
            return false;
        }

        self.rotation += self.speed * dt;
        self.run_time += dt;
        self.speed = clamp(
            self.speed + constants.resistance * dt,
            0.0,
            constants.max_speed,
        );
        true
    }

    /// Add a random impulse and return its size
    pub fn spin<R: Rng>(&mut self, rng: &mut R, constants: &PhysicsConstants) -> f64 {
        let half_max = constants.max_speed / 2.0;
        let impulse = half_max * rng.random_range(IMPULSE_MIN..=IMPULSE_MAX);
        self.speed = clamp(self.speed + impulse, 0.0, constants.max_speed);
        impulse
    }

    /// Seconds until the wheel stops without further spins
    pub fn time_to_rest(&self, constants: &PhysicsConstants) -> f64 {
        self.speed / -constants.resistance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_initial_state() {
        let state = WheelState::new();
        assert_eq!(state.rotation, 90.0);
        assert_eq!(state.speed, 0.0);
        assert!(!state.is_spinning());
    }

    #[test]
    fn test_presets() {
        let standard = PhysicsConfig::default().constants();
        assert_eq!(standard.resistance, -360.0);
        assert_eq!(standard.max_speed, 4500.0);

        let legacy = PhysicsConfig {
            preset: PhysicsPreset::Legacy,
            ..Default::default()
        }
        .constants();
        assert_eq!(legacy.resistance, -45.0);
        assert_eq!(legacy.max_speed, 450.0);
    }

    #[test]
    fn test_custom_preset_sanitizes_values() {
        let custom = PhysicsConfig {
            preset: PhysicsPreset::Custom,
            resistance: Some(120.0),
            max_speed: Some(900.0),
        }
        .constants();
        assert_eq!(custom.resistance, -120.0);
        assert_eq!(custom.max_speed, 900.0);

        let broken = PhysicsConfig {
            preset: PhysicsPreset::Custom,
            resistance: Some(f64::NAN),
            max_speed: Some(-3.0),
        }
        .constants();
        assert_eq!(broken, STANDARD);
    }

    #[test]
    fn test_step_integrates_then_decays() {
        let constants = STANDARD;
        let mut state = WheelState {
            rotation: 0.0,
            speed: 1000.0,
            run_time: 0.0,
        };
        assert!(state.step(0.5, &constants));
        assert!((state.rotation - 500.0).abs() < 1e-9);
        assert!((state.speed - 820.0).abs() < 1e-9);
        assert!((state.run_time - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_dt_is_skipped() {
        let constants = STANDARD;
        let mut state = WheelState {
            rotation: 12.0,
            speed: 1000.0,
            run_time: 3.0,
        };
        let before = state;
        for dt in [0.0, -0.016, -10.0, f64::NAN, f64::INFINITY] {
            assert!(!state.step(dt, &constants));
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_spin_from_rest_within_impulse_range() {
        let constants = STANDARD;
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let mut state = WheelState::new();
            state.spin(&mut rng, &constants);
            let half = constants.max_speed / 2.0;
            assert!(state.speed >= 0.75 * half);
            assert!(state.speed <= (1.75 * half).min(constants.max_speed));
        }
    }

    #[test]
    fn test_spins_stack_and_clamp() {
        let constants = STANDARD;
        let mut rng = StdRng::seed_from_u64(42);
        let mut state = WheelState::new();
        state.spin(&mut rng, &constants);
        let first = state.speed;
        state.spin(&mut rng, &constants);
        assert!(state.speed > first || state.speed == constants.max_speed);
        for _ in 0..10 {
            state.spin(&mut rng, &constants);
        }
        assert_eq!(state.speed, constants.max_speed);
    }

    #[test]
    fn test_speed_stays_in_bounds() {
        let constants = LEGACY;
        let mut rng = StdRng::seed_from_u64(1234);
        let mut state = WheelState::new();
        for i in 0..5000 {
            if i % 37 == 0 {
                state.spin(&mut rng, &constants);
            }
            let dt = match i % 5 {
                0 => -0.02,
                1 => 0.0,
                2 => 0.25,
                _ => 0.016,
            };
            state.step(dt, &constants);
            assert!(state.speed >= 0.0);
            assert!(state.speed <= constants.max_speed);
        }
    }

    #[test]
    fn test_speed_decays_to_exact_zero() {
        let constants = STANDARD;
        let mut rng = StdRng::seed_from_u64(99);
        let mut state = WheelState::new();
        state.spin(&mut rng, &constants);

        let limit = (state.time_to_rest(&constants) / 0.016).ceil() as usize + 1;
        let mut previous = state.speed;
        let mut frames = 0;
        while state.is_spinning() {
            state.step(0.016, &constants);
            assert!(state.speed <= previous);
            assert!(state.speed >= 0.0);
            previous = state.speed;
            frames += 1;
            assert!(frames <= limit);
        }
        assert_eq!(state.speed, 0.0);

        // Resting wheel no longer moves
        let rotation = state.rotation;
        state.step(1.0, &constants);
        assert_eq!(state.rotation, rotation);
    }

    #[test]
    fn test_rotation_is_not_wrapped() {
        let constants = STANDARD;
        let mut state = WheelState {
            rotation: 350.0,
            speed: 4500.0,
            run_time: 0.0,
        };
        state.step(1.0, &constants);
        assert!(state.rotation > 360.0);
    }
}
