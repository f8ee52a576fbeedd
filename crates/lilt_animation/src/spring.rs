//! Spring physics
//!
//! A damped harmonic oscillator pulling `value` toward `target`, integrated
//! one frame at a time with a fixed step of [`FRAME_DT`]. Each frame
//! updates velocity from the spring and damping forces, then moves the value
//! by the new velocity.
//!
//! The integration is plain `f64` arithmetic in a fixed order, so a given
//! configuration and start state always produce the same frame sequence.

use crate::error::{AnimationError, Result};
use crate::presets::SpringPreset;
use crate::scheduler::{AnimationHandle, AnimationScheduler};

/// Fixed integration step: one frame at 60 fps
pub const FRAME_DT: f64 = 1.0 / 60.0;

/// Displacement from target at or below which a spring is settled
pub const SETTLE_THRESHOLD: f64 = 0.001;

/// Physical tuning of a spring
///
/// Fields are private so a config can only be built through
/// [`SpringConfig::new`], which rejects values the integrator cannot handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    stiffness: f64,
    damping: f64,
    mass: f64,
}

impl SpringConfig {
    /// Create a validated spring configuration
    ///
    /// `stiffness` and `mass` must be finite and positive, `damping` finite
    /// and non-negative.
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Result<Self> {
        if !stiffness.is_finite() || stiffness <= 0.0 {
            return Err(AnimationError::InvalidConfiguration {
                field: "stiffness",
                value: stiffness,
                reason: "must be finite and greater than zero",
            });
        }
        if !damping.is_finite() || damping < 0.0 {
            return Err(AnimationError::InvalidConfiguration {
                field: "damping",
                value: damping,
                reason: "must be finite and not negative",
            });
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(AnimationError::InvalidConfiguration {
                field: "mass",
                value: mass,
                reason: "must be finite and greater than zero",
            });
        }

        Ok(Self {
            stiffness,
            damping,
            mass,
        })
    }

    /// Build a config from values already known to be valid (preset table)
    pub(crate) const fn from_parts(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Damping ratio of the continuous system: c / (2 * sqrt(k * m))
    ///
    /// Below 1.0 the spring overshoots its target before settling.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        SpringPreset::Default.config()
    }
}

/// Lifecycle of a spring animation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    /// Constructed, no frame scheduled yet
    Idle,
    /// Scheduled and producing frames
    Running,
    /// Within the threshold of its target, or cancelled
    Settled,
}

/// A single animated value driven by spring physics
#[derive(Clone, Debug)]
pub struct SpringAnimation {
    config: SpringConfig,
    target: f64,
    current: f64,
    velocity: f64,
    state: AnimationState,
}

impl SpringAnimation {
    /// Create an idle spring resting at 0.0 with target 0.0
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            target: 0.0,
            current: 0.0,
            velocity: 0.0,
            state: AnimationState::Idle,
        }
    }

    /// Create an idle spring using one of the named presets
    pub fn from_preset(preset: SpringPreset) -> Self {
        Self::new(preset.config())
    }

    /// Set the value the spring settles at
    pub fn with_target(mut self, target: f64) -> Self {
        self.target = target;
        self
    }

    /// Set the value the spring starts from
    pub fn with_value(mut self, value: f64) -> Self {
        self.current = value;
        self
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn value(&self) -> f64 {
        self.current
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_settled(&self) -> bool {
        self.state == AnimationState::Settled
    }

    /// Whether the displacement from target still exceeds [`SETTLE_THRESHOLD`]
    pub fn needs_frame(&self) -> bool {
        (self.target - self.current).abs() > SETTLE_THRESHOLD
    }

    /// Advance the physics by one frame and return the new value
    ///
    /// Does not touch the lifecycle state; see [`SpringAnimation::frame`].
    pub fn step(&mut self) -> f64 {
        let force = -self.config.stiffness * (self.current - self.target);
        let damping = -self.config.damping * self.velocity;
        let acceleration = (force + damping) / self.config.mass;

        self.velocity += acceleration * FRAME_DT;
        self.current += self.velocity * FRAME_DT;

        self.current
    }

    /// Mark the spring as running so the next frame is produced
    pub(crate) fn start(&mut self) {
        self.state = AnimationState::Running;
    }

    /// Stop producing frames without reaching the target
    pub(crate) fn stop(&mut self) {
        self.state = AnimationState::Settled;
    }

    /// Run one frame: step, report the value, then decide whether to continue
    ///
    /// Returns `true` while another frame should be scheduled. Once this
    /// returns `false` the spring is [`AnimationState::Settled`].
    pub fn frame(&mut self, mut callback: impl FnMut(f64)) -> bool {
        let value = self.step();
        callback(value);

        if self.needs_frame() {
            self.state = AnimationState::Running;
            true
        } else {
            self.state = AnimationState::Settled;
            false
        }
    }

    /// Hand the spring to `scheduler`, calling `callback` with the value once per frame
    ///
    /// The returned handle cancels the animation before it settles.
    pub fn animate<F>(self, scheduler: &mut AnimationScheduler, callback: F) -> AnimationHandle
    where
        F: FnMut(f64) + 'static,
    {
        scheduler.animate(self, callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bouncy() -> SpringConfig {
        SpringPreset::Bouncy.config()
    }

    #[test]
    fn test_new_spring_is_idle_at_rest() {
        let spring = SpringAnimation::new(bouncy());

        assert_eq!(spring.state(), AnimationState::Idle);
        assert_eq!(spring.value(), 0.0);
        assert_eq!(spring.velocity(), 0.0);
        assert_eq!(spring.target(), 0.0);
        assert!(!spring.needs_frame());
    }

    #[test]
    fn test_config_rejects_non_positive_mass() {
        for mass in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = SpringConfig::new(200.0, 20.0, mass).unwrap_err();
            assert!(matches!(
                err,
                AnimationError::InvalidConfiguration { field: "mass", .. }
            ));
        }
    }

    #[test]
    fn test_config_rejects_bad_stiffness_and_damping() {
        assert!(matches!(
            SpringConfig::new(0.0, 20.0, 1.0),
            Err(AnimationError::InvalidConfiguration {
                field: "stiffness",
                ..
            })
        ));
        assert!(matches!(
            SpringConfig::new(200.0, -0.5, 1.0),
            Err(AnimationError::InvalidConfiguration {
                field: "damping",
                ..
            })
        ));
        // Undamped springs are allowed
        assert!(SpringConfig::new(200.0, 0.0, 1.0).is_ok());
    }

    #[test]
    fn test_first_bouncy_frame() {
        let mut spring = SpringAnimation::new(bouncy()).with_target(1.0);
        let value = spring.step();

        let velocity = 200.0 * (1.0 / 60.0);
        assert_eq!(spring.velocity(), velocity);
        assert_eq!(value, velocity * (1.0 / 60.0));
        assert!((spring.velocity() - 3.333_333).abs() < 1e-6);
        assert!((value - 0.055_555).abs() < 1e-6);
    }

    #[test]
    fn test_frame_at_target_settles_after_one_callback() {
        let mut spring = SpringAnimation::new(SpringConfig::default());
        let mut values = Vec::new();

        let again = spring.frame(|v| values.push(v));

        assert!(!again);
        assert_eq!(values, vec![0.0]);
        assert!(spring.is_settled());
    }

    #[test]
    fn test_damping_ratio() {
        assert!(bouncy().damping_ratio() < 1.0);
        let critical = SpringConfig::new(100.0, 20.0, 1.0).unwrap();
        assert!((critical.damping_ratio() - 1.0).abs() < 1e-12);
    }
}
