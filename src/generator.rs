//! Particle layout generation.
//!
//! Runs once per session. Each particle gets an independent draw of both
//! target poses plus its scale, speed and color; the layout is never
//! reproduced or stored.

use crate::config::TreeConfig;
use crate::error::ConfigError;
use crate::particle::ParticleDescriptor;
use crate::spawn::SpawnContext;
use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Range of the resting scale.
pub const BASE_SCALE_RANGE: (f32, f32) = (0.08, 0.20);

/// Range of the per-particle speed factor.
pub const SPEED_FACTOR_RANGE: (f32, f32) = (0.5, 2.0);

/// Generate a fresh layout with an entropy-seeded RNG.
///
/// Returns exactly `config.count` descriptors.
pub fn generate(config: &TreeConfig) -> Result<Vec<ParticleDescriptor>, ConfigError> {
    let mut rng = SmallRng::from_entropy();
    generate_with_rng(config, &mut rng)
}

/// Generate a layout drawing from the given RNG.
pub fn generate_with_rng<R: Rng>(
    config: &TreeConfig,
    rng: &mut R,
) -> Result<Vec<ParticleDescriptor>, ConfigError> {
    config.validate()?;

    debug!(
        "Generating {} particles (cone r={} h={}, scatter r={})",
        config.count, config.base_radius, config.height, config.scatter_radius
    );

    let mut ctx = SpawnContext::new(rng);
    let particles = (0..config.count)
        .map(|_| spawn_particle(&mut ctx, config))
        .collect();

    Ok(particles)
}

fn spawn_particle<R: Rng>(ctx: &mut SpawnContext<'_, R>, config: &TreeConfig) -> ParticleDescriptor {
    let cone = ctx.random_in_cone(config.base_radius, config.height);
    let formation_orientation = ctx.formation_orientation();

    let scatter_position = ctx.random_in_sphere(config.scatter_radius);
    let scatter_orientation = ctx.scatter_orientation();

    ParticleDescriptor {
        formation_position: cone.position,
        formation_orientation,
        scatter_position,
        scatter_orientation,
        base_scale: ctx.random_range(BASE_SCALE_RANGE.0, BASE_SCALE_RANGE.1),
        speed_factor: ctx.random_range(SPEED_FACTOR_RANGE.0, SPEED_FACTOR_RANGE.1),
        color: ctx.palette_color(),
        height_fraction: cone.height_fraction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;
    use glam::Vec3;

    fn seeded(seed: u64) -> SmallRng {
        SmallRng::seed_from_u64(seed)
    }

    #[test]
    fn test_count_matches_config() {
        for count in [0, 1, 17, 1800] {
            let config = TreeConfig::default().with_count(count);
            let particles = generate_with_rng(&config, &mut seeded(1)).unwrap();
            assert_eq!(particles.len(), count as usize);
        }
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = TreeConfig::default().with_scatter_radius(0.0);
        assert_eq!(
            generate(&config),
            Err(ConfigError::NonPositiveScatterRadius(0.0))
        );
    }

    #[test]
    fn test_attribute_ranges() {
        let config = TreeConfig::default().with_count(2000);
        for p in generate_with_rng(&config, &mut seeded(2)).unwrap() {
            assert!(p.base_scale >= 0.08 && p.base_scale < 0.20);
            assert!(p.speed_factor >= 0.5 && p.speed_factor < 2.0);
            assert!(palette::index_of(p.color).is_some());
            assert!(p.formation_orientation.is_normalized());
            assert!(p.scatter_orientation.is_normalized());
        }
    }

    #[test]
    fn test_envelopes() {
        let config = TreeConfig::new(2000, 2.5, 6.5, 12.0);
        for p in generate_with_rng(&config, &mut seeded(3)).unwrap() {
            assert!(p.scatter_position.length() <= 12.0 + 1e-3);

            let f = p.formation_position;
            assert!(f.y >= -3.25 && f.y <= 3.25);
            let horizontal = Vec3::new(f.x, 0.0, f.z).length();
            assert!(horizontal <= 1.2 * 2.5 * (1.0 - p.height_fraction) + 1e-4);
        }
    }

    #[test]
    fn test_unseeded_layouts_differ() {
        let config = TreeConfig::default().with_count(8);
        let a = generate(&config).unwrap();
        let b = generate(&config).unwrap();
        assert_ne!(a, b);
    }
}
