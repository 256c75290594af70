//! Layout configuration.
//!
//! A [`TreeConfig`] fixes the particle count and the two envelopes particles
//! are sampled into: the tapered cone of the tree and the sphere of the
//! scattered cloud. It is built once per session and never changes.
//!
//! ```ignore
//! use arbor::TreeConfig;
//!
//! let config = TreeConfig::default()
//!     .with_count(4000)
//!     .with_scatter_radius(16.0);
//! config.validate()?;
//! ```

use crate::error::ConfigError;

/// Geometry and size of a particle layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeConfig {
    /// Number of particles.
    pub count: u32,
    /// Radius of the cone at its base.
    pub base_radius: f32,
    /// Height of the cone, centered on y = 0.
    pub height: f32,
    /// Radius of the sphere particles disperse into.
    pub scatter_radius: f32,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            count: 1800,
            base_radius: 2.5,
            height: 6.5,
            scatter_radius: 12.0,
        }
    }
}

impl TreeConfig {
    /// Create a config with explicit values.
    pub fn new(count: u32, base_radius: f32, height: f32, scatter_radius: f32) -> Self {
        Self {
            count,
            base_radius,
            height,
            scatter_radius,
        }
    }

    /// Set the number of particles.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Set the cone base radius.
    pub fn with_base_radius(mut self, base_radius: f32) -> Self {
        self.base_radius = base_radius;
        self
    }

    /// Set the cone height.
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Set the scatter sphere radius.
    pub fn with_scatter_radius(mut self, scatter_radius: f32) -> Self {
        self.scatter_radius = scatter_radius;
        self
    }

    /// Check that all geometric parameters are positive and finite.
    ///
    /// A count of zero is valid and produces an empty layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.base_radius) {
            return Err(ConfigError::NonPositiveBaseRadius(self.base_radius));
        }
        if !is_positive(self.height) {
            return Err(ConfigError::NonPositiveHeight(self.height));
        }
        if !is_positive(self.scatter_radius) {
            return Err(ConfigError::NonPositiveScatterRadius(self.scatter_radius));
        }
        Ok(())
    }
}

#[inline]
fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = TreeConfig::default();
        assert_eq!(config.count, 1800);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_chain() {
        let config = TreeConfig::default()
            .with_count(10)
            .with_base_radius(1.0)
            .with_height(2.0)
            .with_scatter_radius(3.0);
        assert_eq!(config, TreeConfig::new(10, 1.0, 2.0, 3.0));
    }

    #[test]
    fn test_zero_count_is_valid() {
        assert!(TreeConfig::default().with_count(0).validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_geometry() {
        assert_eq!(
            TreeConfig::default().with_base_radius(0.0).validate(),
            Err(ConfigError::NonPositiveBaseRadius(0.0))
        );
        assert_eq!(
            TreeConfig::default().with_height(-2.0).validate(),
            Err(ConfigError::NonPositiveHeight(-2.0))
        );
        assert!(matches!(
            TreeConfig::default().with_scatter_radius(f32::NAN).validate(),
            Err(ConfigError::NonPositiveScatterRadius(_))
        ));
        assert!(TreeConfig::default()
            .with_height(f32::INFINITY)
            .validate()
            .is_err());
    }
}
