//! Per-instance data handed to the renderer.
//!
//! The renderer draws one copy of a fixed mesh per particle. Each copy needs
//! a model matrix (rewritten every frame) and a color (constant for the
//! session). [`InstanceRaw`] packs both into a GPU-friendly layout that can
//! be uploaded with `bytemuck::cast_slice`.

use crate::error::AnimatorError;
use crate::palette;
use crate::particle::{LiveTransform, ParticleDescriptor};
use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// One instance slot, laid out for a vertex buffer with instance step mode.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct InstanceRaw {
    /// Column-major model matrix.
    pub model: [[f32; 4]; 4],
    /// Linear RGB color, alpha fixed at 1.
    pub color: [f32; 4],
}

impl InstanceRaw {
    /// Build an instance from a live pose and an sRGB palette color.
    pub fn from_parts(transform: &LiveTransform, color: Vec3) -> Self {
        Self {
            model: transform.to_matrix().to_cols_array_2d(),
            color: palette::srgb_to_linear(color).extend(1.0).to_array(),
        }
    }
}

/// Fill `out` with one instance per particle.
///
/// All three slices must have the same length.
pub fn write_instances(
    descriptors: &[ParticleDescriptor],
    live: &[LiveTransform],
    out: &mut [InstanceRaw],
) -> Result<(), AnimatorError> {
    check_lengths(descriptors.len(), live.len())?;
    check_lengths(descriptors.len(), out.len())?;

    for ((slot, descriptor), transform) in out.iter_mut().zip(descriptors).zip(live) {
        *slot = InstanceRaw::from_parts(transform, descriptor.color);
    }
    Ok(())
}

#[inline]
pub(crate) fn check_lengths(descriptors: usize, transforms: usize) -> Result<(), AnimatorError> {
    if descriptors != transforms {
        return Err(AnimatorError::LengthMismatch {
            descriptors,
            transforms,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Mat4, Quat};

    fn descriptor(color: Vec3) -> ParticleDescriptor {
        ParticleDescriptor {
            formation_position: Vec3::new(1.0, -1.0, 0.5),
            formation_orientation: Quat::from_rotation_y(0.8),
            scatter_position: Vec3::ZERO,
            scatter_orientation: Quat::IDENTITY,
            base_scale: 0.15,
            speed_factor: 1.0,
            color,
            height_fraction: 0.2,
        }
    }

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<InstanceRaw>(), 80);
        let zero = InstanceRaw::zeroed();
        let bytes: &[u8] = bytemuck::bytes_of(&zero);
        assert!(bytes.iter().all(|b| *b == 0));
    }

    #[test]
    fn test_write_instances_encodes_pose_and_color() {
        let colors = palette::colors();
        let descriptors = vec![descriptor(colors[1]), descriptor(colors[5])];
        let live: Vec<_> = descriptors.iter().map(LiveTransform::at_formation).collect();
        let mut out = vec![InstanceRaw::zeroed(); 2];

        write_instances(&descriptors, &live, &mut out).unwrap();

        for ((slot, d), t) in out.iter().zip(&descriptors).zip(&live) {
            let model = Mat4::from_cols_array_2d(&slot.model);
            assert!(model.abs_diff_eq(t.to_matrix(), 1e-6));
            let linear = palette::srgb_to_linear(d.color);
            assert_eq!(slot.color, [linear.x, linear.y, linear.z, 1.0]);
        }
    }

    #[test]
    fn test_write_instances_rejects_short_buffer() {
        let descriptors = vec![descriptor(Vec3::ONE); 3];
        let live: Vec<_> = descriptors.iter().map(LiveTransform::at_formation).collect();
        let mut out = vec![InstanceRaw::zeroed(); 2];
        assert_eq!(
            write_instances(&descriptors, &live, &mut out),
            Err(AnimatorError::LengthMismatch {
                descriptors: 3,
                transforms: 2
            })
        );
    }
}
