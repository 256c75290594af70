//! Error types for Arbor.
//!
//! Both enums describe caller contract violations: a layout requested with
//! impossible geometry, or a frame update fed mismatched buffers or a
//! backwards clock. Neither is expected in a correctly wired host.

use std::fmt;

/// Errors raised when validating a [`TreeConfig`](crate::TreeConfig).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Cone base radius was zero, negative or not finite.
    NonPositiveBaseRadius(f32),
    /// Cone height was zero, negative or not finite.
    NonPositiveHeight(f32),
    /// Scatter sphere radius was zero, negative or not finite.
    NonPositiveScatterRadius(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveBaseRadius(r) => {
                write!(f, "Base radius must be a positive finite number, got {}", r)
            }
            ConfigError::NonPositiveHeight(h) => {
                write!(f, "Tree height must be a positive finite number, got {}", h)
            }
            ConfigError::NonPositiveScatterRadius(r) => {
                write!(f, "Scatter radius must be a positive finite number, got {}", r)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors raised by a frame update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimatorError {
    /// The descriptor and transform slices disagree in length.
    LengthMismatch {
        /// Number of particle descriptors supplied.
        descriptors: usize,
        /// Number of live transforms (or instance slots) supplied.
        transforms: usize,
    },
    /// Delta time was negative or not finite.
    NegativeDelta(f32),
}

impl fmt::Display for AnimatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimatorError::LengthMismatch {
                descriptors,
                transforms,
            } => write!(
                f,
                "Particle buffers out of sync: {} descriptors but {} transforms",
                descriptors, transforms
            ),
            AnimatorError::NegativeDelta(dt) => {
                write!(f, "Delta time must be finite and non-negative, got {}", dt)
            }
        }
    }
}

impl std::error::Error for AnimatorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_message() {
        let err = AnimatorError::LengthMismatch {
            descriptors: 3,
            transforms: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("3 descriptors"));
        assert!(msg.contains("2 transforms"));
    }

    #[test]
    fn test_config_error_message() {
        let msg = ConfigError::NonPositiveHeight(-1.0).to_string();
        assert!(msg.contains("height"));
        assert!(msg.contains("-1"));
    }
}
