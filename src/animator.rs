//! Per-frame morph update.
//!
//! Every frame each particle's live transform is pulled toward the pose the
//! current [`MorphState`] selects, using an exponential blend whose rate
//! depends on the state and the particle's own speed factor. On top of the
//! blend sit three small overlays: a vertical hover, a slow spin folded into
//! the target orientation, and a scale pulse.
//!
//! ```ignore
//! use arbor::{MorphAnimator, MorphState, TreeConfig};
//!
//! let mut animator = MorphAnimator::from_config(&TreeConfig::default())?;
//! let mut state = MorphState::Formation;
//!
//! // In the render loop:
//! let (elapsed, delta) = time.update();
//! animator.tick(state, delta, elapsed)?;
//! animator.write_instances(&mut instances)?;
//!
//! // On click:
//! state = state.toggle();
//! ```
//!
//! With the `parallel` feature the per-particle pass runs on rayon's thread
//! pool. Particles never read each other's state, so the result is the same.

use crate::config::TreeConfig;
use crate::error::{AnimatorError, ConfigError};
use crate::generator;
use crate::instance::{self, InstanceRaw};
use crate::particle::{LiveTransform, MorphState, ParticleDescriptor};
use glam::Quat;
use log::info;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Hover oscillation frequency (radians per second).
pub const HOVER_FREQUENCY: f32 = 0.5;
/// Hover offset added to y each frame.
pub const HOVER_AMPLITUDE: f32 = 0.005;
/// Spin about the vertical axis (radians per second, before speed factor).
pub const SPIN_RATE: f32 = 0.1;
/// Scale pulse frequency (radians per second).
pub const PULSE_FREQUENCY: f32 = 2.0;
/// Pulse phase offset between consecutive particles.
pub const PULSE_PHASE_STEP: f32 = 0.1;
/// Relative scale pulse amplitude.
pub const PULSE_AMPLITUDE: f32 = 0.1;

/// Advance every live transform by one frame.
///
/// `descriptors` and `live` must have the same length and `delta_time` must
/// be non-negative; both are checked once before any particle is touched.
pub fn tick(
    descriptors: &[ParticleDescriptor],
    live: &mut [LiveTransform],
    state: MorphState,
    delta_time: f32,
    elapsed_time: f32,
) -> Result<(), AnimatorError> {
    instance::check_lengths(descriptors.len(), live.len())?;
    if !delta_time.is_finite() || delta_time < 0.0 {
        return Err(AnimatorError::NegativeDelta(delta_time));
    }

    #[cfg(not(feature = "parallel"))]
    for (i, (descriptor, transform)) in descriptors.iter().zip(live.iter_mut()).enumerate() {
        update_particle(i, descriptor, transform, state, delta_time, elapsed_time);
    }

    #[cfg(feature = "parallel")]
    live.par_iter_mut()
        .zip(descriptors.par_iter())
        .enumerate()
        .for_each(|(i, (transform, descriptor))| {
            update_particle(i, descriptor, transform, state, delta_time, elapsed_time);
        });

    Ok(())
}

/// Blend factor for one particle this frame, clamped to [0, 1].
#[inline]
pub fn blend_alpha(state: MorphState, speed_factor: f32, delta_time: f32) -> f32 {
    (delta_time * state.base_rate() * speed_factor).clamp(0.0, 1.0)
}

#[inline]
fn update_particle(
    index: usize,
    descriptor: &ParticleDescriptor,
    transform: &mut LiveTransform,
    state: MorphState,
    delta_time: f32,
    elapsed_time: f32,
) {
    let phase = index as f32;
    let alpha = blend_alpha(state, descriptor.speed_factor, delta_time);

    let mut position = transform
        .position
        .lerp(descriptor.target_position(state), alpha);
    position.y += (elapsed_time * HOVER_FREQUENCY + phase).sin() * HOVER_AMPLITUDE;

    // The target keeps turning, so the slerp chases a moving goal
    let spin = Quat::from_rotation_y(elapsed_time * SPIN_RATE * descriptor.speed_factor);
    let goal = descriptor.target_orientation(state) * spin;
    let orientation = transform.orientation.slerp(goal, alpha).normalize();

    let pulse = 1.0
        + (elapsed_time * PULSE_FREQUENCY + phase * PULSE_PHASE_STEP).sin() * PULSE_AMPLITUDE;

    *transform = LiveTransform {
        position,
        orientation,
        scale: descriptor.base_scale * pulse,
    };
}

/// A particle session: the fixed descriptor set plus its live transforms.
///
/// The particle count is fixed at construction.
#[derive(Debug, Clone)]
pub struct MorphAnimator {
    descriptors: Vec<ParticleDescriptor>,
    transforms: Vec<LiveTransform>,
}

impl MorphAnimator {
    /// Start a session from existing descriptors, every particle on its
    /// formation pose.
    pub fn new(descriptors: Vec<ParticleDescriptor>) -> Self {
        let transforms = descriptors.iter().map(LiveTransform::at_formation).collect();
        Self {
            descriptors,
            transforms,
        }
    }

    /// Generate a fresh layout and start a session on it.
    pub fn from_config(config: &TreeConfig) -> Result<Self, ConfigError> {
        let descriptors = generator::generate(config)?;
        info!("Particle session started with {} particles", descriptors.len());
        Ok(Self::new(descriptors))
    }

    /// Static per-particle data.
    pub fn descriptors(&self) -> &[ParticleDescriptor] {
        &self.descriptors
    }

    /// Current rendered poses.
    pub fn transforms(&self) -> &[LiveTransform] {
        &self.transforms
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the session has no particles.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Advance all particles by one frame.
    pub fn tick(
        &mut self,
        state: MorphState,
        delta_time: f32,
        elapsed_time: f32,
    ) -> Result<(), AnimatorError> {
        tick(
            &self.descriptors,
            &mut self.transforms,
            state,
            delta_time,
            elapsed_time,
        )
    }

    /// Fill a renderer instance buffer from the current poses.
    pub fn write_instances(&self, out: &mut [InstanceRaw]) -> Result<(), AnimatorError> {
        instance::write_instances(&self.descriptors, &self.transforms, out)
    }

    /// Mean distance from each particle to the target `state` selects.
    pub fn mean_distance_to(&self, state: MorphState) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        let total: f32 = self
            .descriptors
            .iter()
            .zip(&self.transforms)
            .map(|(d, t)| t.position.distance(d.target_position(state)))
            .sum();
        total / self.len() as f32
    }
}
