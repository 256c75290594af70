//! Per-particle data.
//!
//! A [`ParticleDescriptor`] is written once by the generator and only read
//! afterwards. The pose that actually moves every frame lives in a separate
//! [`LiveTransform`], owned by the animator.

use glam::{Mat4, Quat, Vec3};

/// Which configuration particles are currently heading toward.
///
/// There is no in-between state: switching mid-flight simply re-targets
/// every particle on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MorphState {
    /// Assembled into the cone-shaped tree.
    #[default]
    Formation,
    /// Dispersed into the spherical cloud.
    Scattered,
}

impl MorphState {
    /// The other state.
    #[inline]
    pub fn toggle(self) -> Self {
        match self {
            MorphState::Formation => MorphState::Scattered,
            MorphState::Scattered => MorphState::Formation,
        }
    }

    /// Blend rate per second before the per-particle speed factor.
    ///
    /// Assembly is snappier than dispersal.
    #[inline]
    pub fn base_rate(self) -> f32 {
        match self {
            MorphState::Formation => 2.5,
            MorphState::Scattered => 1.5,
        }
    }
}

/// Immutable per-particle data: both target poses and static attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleDescriptor {
    /// Target position inside the tree cone.
    pub formation_position: Vec3,
    /// Target orientation while assembled.
    pub formation_orientation: Quat,
    /// Target position inside the scatter sphere.
    pub scatter_position: Vec3,
    /// Target orientation while dispersed.
    pub scatter_orientation: Quat,
    /// Resting scale before the pulse.
    pub base_scale: f32,
    /// Per-particle animation rate multiplier, in [0.5, 2.0).
    pub speed_factor: f32,
    /// Palette color (sRGB, 0.0-1.0).
    pub color: Vec3,
    /// Normalized height the formation position was sampled at.
    pub height_fraction: f32,
}

impl ParticleDescriptor {
    /// Target position selected by `state`.
    #[inline]
    pub fn target_position(&self, state: MorphState) -> Vec3 {
        match state {
            MorphState::Formation => self.formation_position,
            MorphState::Scattered => self.scatter_position,
        }
    }

    /// Target orientation selected by `state`.
    #[inline]
    pub fn target_orientation(&self, state: MorphState) -> Quat {
        match state {
            MorphState::Formation => self.formation_orientation,
            MorphState::Scattered => self.scatter_orientation,
        }
    }
}

/// The pose rendered for one particle this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveTransform {
    /// Current world-space position, hover offset included.
    pub position: Vec3,
    /// Current orientation (unit quaternion).
    pub orientation: Quat,
    /// Current uniform scale, pulse included.
    pub scale: f32,
}

impl LiveTransform {
    /// Pose sitting exactly on the target selected by `state`.
    pub fn at_target(descriptor: &ParticleDescriptor, state: MorphState) -> Self {
        Self {
            position: descriptor.target_position(state),
            orientation: descriptor.target_orientation(state),
            scale: descriptor.base_scale,
        }
    }

    /// Pose sitting on the tree formation, the initial state of a session.
    pub fn at_formation(descriptor: &ParticleDescriptor) -> Self {
        Self::at_target(descriptor, MorphState::Formation)
    }

    /// Model matrix for instanced rendering (uniform scale).
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.orientation,
            self.position,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> ParticleDescriptor {
        ParticleDescriptor {
            formation_position: Vec3::new(1.0, 2.0, 3.0),
            formation_orientation: Quat::from_rotation_x(0.5),
            scatter_position: Vec3::new(-4.0, 0.0, 4.0),
            scatter_orientation: Quat::from_rotation_z(1.0),
            base_scale: 0.1,
            speed_factor: 1.0,
            color: Vec3::ONE,
            height_fraction: 0.5,
        }
    }

    #[test]
    fn test_toggle_is_involution() {
        for s in [MorphState::Formation, MorphState::Scattered] {
            assert_ne!(s.toggle(), s);
            assert_eq!(s.toggle().toggle(), s);
        }
        assert_eq!(MorphState::default(), MorphState::Formation);
    }

    #[test]
    fn test_target_selection() {
        let d = descriptor();
        assert_eq!(d.target_position(MorphState::Formation), d.formation_position);
        assert_eq!(d.target_position(MorphState::Scattered), d.scatter_position);
        assert_eq!(
            d.target_orientation(MorphState::Scattered),
            d.scatter_orientation
        );
    }

    #[test]
    fn test_to_matrix_roundtrips_pose() {
        let t = LiveTransform::at_formation(&descriptor());
        let (scale, rotation, translation) = t.to_matrix().to_scale_rotation_translation();
        assert!((scale - Vec3::splat(0.1)).length() < 1e-5);
        assert!(rotation.angle_between(t.orientation) < 1e-2);
        assert!((translation - t.position).length() < 1e-5);
    }
}
