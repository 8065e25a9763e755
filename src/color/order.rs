use super::Rgb;

/// Channel order expected by a pixel sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorOrder {
    #[default]
    Rgb,
    Grb,
    Brg,
}

impl ColorOrder {
    /// Pack a color into the low 24 bits, first wire channel in the highest byte
    pub const fn pack(self, color: Rgb) -> u32 {
        let [first, second, third] = self.wire_channels(color);
        ((first as u32) << 16) | ((second as u32) << 8) | third as u32
    }

    /// Reorder channels so that a driver writing `r, g, b` emits this order
    pub const fn reorder(self, color: Rgb) -> Rgb {
        let [r, g, b] = self.wire_channels(color);
        Rgb { r, g, b }
    }

    const fn wire_channels(self, color: Rgb) -> [u8; 3] {
        match self {
            Self::Rgb => [color.r, color.g, color.b],
            Self::Grb => [color.g, color.r, color.b],
            Self::Brg => [color.b, color.r, color.g],
        }
    }
}
