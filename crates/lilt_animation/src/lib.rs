//! Lilt Animation
//!
//! Spring physics for UI values, driven one frame at a time.
//!
//! # Features
//!
//! - **Spring Physics**: fixed-step Euler integration of a damped spring with stiffness, damping, mass
//! - **Presets**: a read-only registry of named spring tunings
//! - **Scheduler**: a cooperative frame loop with cancellation handles
//!
//! # Example
//!
//! ```rust
//! use lilt_animation::{AnimationScheduler, SpringAnimation, SpringPreset};
//!
//! let mut scheduler = AnimationScheduler::new();
//!
//! let handle = SpringAnimation::from_preset(SpringPreset::Bouncy)
//!     .with_target(1.0)
//!     .animate(&mut scheduler, |opacity| {
//!         let _offset = 20.0 * (1.0 - opacity);
//!     });
//!
//! // One tick per rendered frame
//! scheduler.tick();
//! assert!(scheduler.is_running(handle));
//!
//! scheduler.run_until_idle(600);
//! assert!(!scheduler.has_active_animations());
//! ```

pub mod error;
pub mod presets;
pub mod scheduler;
pub mod spring;

pub use error::{AnimationError, Result};
pub use presets::{SpringPreset, SPRING_CONFIGS};
pub use scheduler::{AnimationHandle, AnimationScheduler};
pub use spring::{AnimationState, SpringAnimation, SpringConfig, FRAME_DT, SETTLE_THRESHOLD};
