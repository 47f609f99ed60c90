//! RGB color samples
//!
//! The standard sample type carried by a [`Grid`](crate::Grid) when
//! segmenting color data. The segmentation core never inspects samples
//! itself; it only hands pairs of them to an edge weighter.

/// An 8-bit-per-channel RGB color sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a sample from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack a `0xRRGGBB` word.
    #[inline]
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    /// Pack into a `0xRRGGBB` word.
    #[inline]
    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Rec. 601 luma approximation in `[0.0, 255.0]`.
    #[inline]
    pub fn luma(self) -> f64 {
        0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_roundtrip() {
        let colors = [
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(0x12, 0x34, 0x56),
        ];
        for color in colors {
            assert_eq!(Rgb::from_packed(color.to_packed()), color);
        }
        assert_eq!(Rgb::from_packed(0xffaa01), Rgb::new(0xff, 0xaa, 0x01));
    }

    #[test]
    fn test_luma_bounds() {
        assert_eq!(Rgb::new(0, 0, 0).luma(), 0.0);
        assert!((Rgb::new(255, 255, 255).luma() - 255.0).abs() < 1e-9);
        assert!(Rgb::new(255, 0, 0).luma() < Rgb::new(0, 255, 0).luma());
    }
}
