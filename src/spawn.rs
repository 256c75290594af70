//! Sampling helpers for particle generation.
//!
//! [`SpawnContext`] wraps an RNG and exposes the handful of distributions the
//! layout generator draws from: the jittered cone of the tree, the uniform
//! sphere of the scattered cloud, random Euler orientations and palette picks.

use crate::palette;
use glam::{EulerRot, Quat, Vec3};
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// A point sampled inside the tree cone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeSample {
    /// World-space position.
    pub position: Vec3,
    /// Normalized height the point was drawn at (0 = base, 1 = tip).
    pub height_fraction: f32,
}

/// Sampling context handed to the generator.
///
/// Borrowing the RNG rather than owning it lets callers choose between an
/// entropy-seeded generator for real sessions and a fixed seed in tests.
pub struct SpawnContext<'a, R: Rng> {
    rng: &'a mut R,
}

impl<'a, R: Rng> SpawnContext<'a, R> {
    /// Wrap an RNG.
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }

    // ========== Random primitives ==========

    /// Random f32 in [0.0, 1.0).
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in [min, max).
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    // ========== Position helpers ==========

    /// Random point inside a vertically centered cone tapering to a tip.
    ///
    /// The radius at normalized height `t` is `(1 - t) * base_radius`,
    /// scaled by a jitter in [0.8, 1.2) so the surface is not a clean cone.
    pub fn random_in_cone(&mut self, base_radius: f32, height: f32) -> ConeSample {
        let t = self.random();
        let y = t * height - height / 2.0;

        let r = (1.0 - t) * base_radius * self.random_range(0.8, 1.2);
        let angle = self.random() * TAU;

        ConeSample {
            position: Vec3::new(angle.cos() * r, y, angle.sin() * r),
            height_fraction: t,
        }
    }

    /// Random point inside a sphere of given radius, centered at origin.
    ///
    /// Distribution is uniform throughout the volume.
    pub fn random_in_sphere(&mut self, radius: f32) -> Vec3 {
        let theta = TAU * self.random();
        // acos of a uniform cosine keeps the poles from bunching up
        let phi = (2.0 * self.random() - 1.0).clamp(-1.0, 1.0).acos();
        // Cube root for uniform volume distribution
        let r = radius * self.random().cbrt();

        Vec3::new(
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        )
    }

    // ========== Orientation helpers ==========

    /// Random orientation with each Euler angle in [0, max_angle).
    ///
    /// Angles are applied X, then Y, then Z (intrinsic).
    pub fn random_orientation(&mut self, max_angle: f32) -> Quat {
        let x = self.random() * max_angle;
        let y = self.random() * max_angle;
        let z = self.random() * max_angle;
        Quat::from_euler(EulerRot::XYZ, x, y, z)
    }

    /// Orientation for a tree particle: each angle in [0, PI).
    pub fn formation_orientation(&mut self) -> Quat {
        self.random_orientation(PI)
    }

    /// Orientation for a scattered particle: each angle in [0, 2*PI).
    pub fn scatter_orientation(&mut self) -> Quat {
        self.random_orientation(TAU)
    }

    // ========== Color helpers ==========

    /// Uniformly chosen entry of the signature palette.
    pub fn palette_color(&mut self) -> Vec3 {
        let colors = palette::colors();
        colors[self.rng.gen_range(0..colors.len())]
    }
}
