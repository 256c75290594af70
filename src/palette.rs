//! The signature color palette.
//!
//! Deep midnight blue through electric blue, vivid purple and two pinks,
//! closed off by a metallic silver. Every particle picks one entry at
//! generation time and keeps it for the session.

use glam::Vec3;

/// Number of palette entries.
pub const PALETTE_SIZE: usize = 6;

/// Palette entries as 24-bit sRGB hex codes.
pub const SIGNATURE_HEX: [u32; PALETTE_SIZE] = [
    0x0D1B2A, // Midnight blue
    0x3D5AFE, // Electric blue
    0xD500F9, // Vibrant purple
    0xF50057, // Hot pink
    0xFF80AB, // Soft pink
    0xE0E0E0, // Platinum
];

/// Palette entries as RGB in 0.0-1.0.
pub fn colors() -> [Vec3; PALETTE_SIZE] {
    SIGNATURE_HEX.map(hex_to_rgb)
}

/// Convert a `0xRRGGBB` code to RGB channels in 0.0-1.0.
pub fn hex_to_rgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    )
}

/// Convert an sRGB-encoded color to linear RGB for shading.
pub fn srgb_to_linear(color: Vec3) -> Vec3 {
    fn channel(c: f32) -> f32 {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    Vec3::new(channel(color.x), channel(color.y), channel(color.z))
}

/// Index of `color` in the palette, if it is one of the entries.
pub fn index_of(color: Vec3) -> Option<usize> {
    colors().iter().position(|c| *c == color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb() {
        let pink = hex_to_rgb(0xF50057);
        assert!((pink.x - 245.0 / 255.0).abs() < 1e-6);
        assert_eq!(pink.y, 0.0);
        assert!((pink.z - 87.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_palette_entries_distinct() {
        for (i, a) in colors().iter().enumerate() {
            assert_eq!(index_of(*a), Some(i));
        }
    }

    #[test]
    fn test_srgb_to_linear_endpoints() {
        assert_eq!(srgb_to_linear(Vec3::ZERO), Vec3::ZERO);
        let white = srgb_to_linear(Vec3::ONE);
        assert!((white - Vec3::ONE).length() < 1e-5);
        // Mid-gray darkens in linear space
        assert!(srgb_to_linear(Vec3::splat(0.5)).x < 0.5);
    }
}
