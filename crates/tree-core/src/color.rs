use std::fmt;

/// Opaque 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` literal.
    pub const fn hex(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    /// CSS color string with an alpha channel, e.g. `rgba(255, 215, 0, 0.1)`.
    pub fn with_alpha(self, alpha: f32) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            alpha.clamp(0.0, 1.0)
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_unpacks_channels_and_formats_back() {
        let c = Rgb::hex(0x2e8b57);
        assert_eq!(c, Rgb::new(0x2e, 0x8b, 0x57));
        assert_eq!(c.to_string(), "#2e8b57");
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Rgb::hex(0xffd700).with_alpha(2.0), "rgba(255, 215, 0, 1)");
    }
}
