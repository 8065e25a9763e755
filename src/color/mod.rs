mod interpolated;
mod order;

pub use interpolated::{FloatChannel, InterpolatedColor};
pub use order::ColorOrder;
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Black, all channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Per-channel signed value, used for speeds that differ between channels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignedColor {
    pub r: i16,
    pub g: i16,
    pub b: i16,
}

impl SignedColor {
    pub const fn new(r: i16, g: i16, b: i16) -> Self {
        Self { r, g, b }
    }

    /// Channels in `r, g, b` order
    pub const fn channels(self) -> [i16; 3] {
        [self.r, self.g, self.b]
    }
}

/// Channels of a color in `r, g, b` order
pub const fn channels(color: Rgb) -> [u8; 3] {
    [color.r, color.g, color.b]
}

/// Highest channel value of a color
pub fn peak(color: Rgb) -> u8 {
    color.r.max(color.g).max(color.b)
}

/// Apply `f` to every channel
pub fn map_channels(color: Rgb, mut f: impl FnMut(u8) -> u8) -> Rgb {
    Rgb {
        r: f(color.r),
        g: f(color.g),
        b: f(color.b),
    }
}

/// Convert a float channel value into a byte, clamping to `0..=255`
#[inline]
pub fn clamp_channel(value: f32) -> u8 {
    if value <= 0.0 {
        0
    } else if value >= 255.0 {
        255
    } else {
        value as u8
    }
}

/// Copy `src` into `dst` end-to-end mirrored
pub fn mirror_into(src: &[Rgb], dst: &mut [Rgb]) {
    for (slot, color) in dst.iter_mut().zip(src.iter().rev()) {
        *slot = *color;
    }
}
