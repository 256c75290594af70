//! # Arbor - morphing particle signature
//!
//! A few thousand crystal particles that assemble into a tapered tree and
//! burst apart into a spherical cloud, then find their way back.
//!
//! Arbor owns the particle state and the per-frame morph math. It does not
//! open windows or talk to a GPU: a host supplies the morph signal and the
//! frame clock, and consumes one transform and one color per particle for
//! instanced drawing.
//!
//! ## Quick Start
//!
//! ```ignore
//! use arbor::prelude::*;
//!
//! let config = TreeConfig::default().with_count(1800);
//! let mut animator = MorphAnimator::from_config(&config)?;
//! let mut instances = vec![InstanceRaw::zeroed(); animator.len()];
//! let mut time = Time::new();
//! let mut state = MorphState::Formation;
//!
//! loop {
//!     let (elapsed, delta) = time.update();
//!     animator.tick(state, delta, elapsed)?;
//!     animator.write_instances(&mut instances)?;
//!     // upload bytemuck::cast_slice(&instances) and draw
//!
//!     if clicked {
//!         state = state.toggle();
//!     }
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Descriptors
//!
//! [`generate`] draws a [`ParticleDescriptor`] per particle: a position and
//! orientation inside the tree cone, another pair inside the scatter sphere,
//! a resting scale, a speed factor and a palette color. Descriptors never
//! change after generation.
//!
//! ### Live transforms
//!
//! A [`LiveTransform`] is what gets drawn. Every [`tick`] blends it toward
//! whichever pose the current [`MorphState`] selects:
//!
//! | Step | Effect |
//! |------|--------|
//! | Position | lerp toward target, rate `delta * base_rate * speed_factor` |
//! | Hover | small vertical sine offset, phase-shifted per particle |
//! | Orientation | slerp toward target composed with a slow spin about Y |
//! | Scale | base scale with a +/-10% sine pulse |
//!
//! Formation pulls at 2.5/s, scattering at 1.5/s. Switching state mid-flight
//! just re-targets; there is no transition state.
//!
//! ## Features
//!
//! - `parallel` - run the per-particle pass on rayon's thread pool.

#![warn(missing_docs)]

pub mod animator;
pub mod config;
pub mod error;
pub mod generator;
pub mod instance;
pub mod palette;
pub mod particle;
pub mod spawn;
pub mod time;

pub use animator::{tick, MorphAnimator};
pub use bytemuck;
pub use config::TreeConfig;
pub use error::{AnimatorError, ConfigError};
pub use generator::{generate, generate_with_rng};
pub use glam::{Mat4, Quat, Vec3};
pub use instance::{write_instances, InstanceRaw};
pub use particle::{LiveTransform, MorphState, ParticleDescriptor};
pub use spawn::SpawnContext;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use arbor::prelude::*;
/// ```
pub mod prelude {
    pub use crate::animator::{tick, MorphAnimator};
    pub use crate::config::TreeConfig;
    pub use crate::error::{AnimatorError, ConfigError};
    pub use crate::generator::generate;
    pub use crate::instance::InstanceRaw;
    pub use crate::particle::{LiveTransform, MorphState, ParticleDescriptor};
    pub use crate::time::Time;
    pub use crate::{Quat, Vec3};
    pub use bytemuck::Zeroable;
}
