//! 8-bit integer helpers shared by effects and modifiers

use crate::color::{Rgb, map_channels};

/// Linear blend between two 8-bit values
///
/// `amount` of 0 yields `a`, 255 yields `b`. Intermediate values are floored
/// so that the result never overshoots in either direction.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn lerp8(a: u8, b: u8, amount: u8) -> u8 {
    let delta = b as i32 - a as i32;
    (a as i32 + (delta * amount as i32).div_euclid(255)) as u8
}

/// Blend two colors channel by channel, see [`lerp8`]
#[inline]
pub fn lerp_colors(a: Rgb, b: Rgb, amount: u8) -> Rgb {
    Rgb {
        r: lerp8(a.r, b.r, amount),
        g: lerp8(a.g, b.g, amount),
        b: lerp8(a.b, b.b, amount),
    }
}

/// Brightness falloff of a trail or flake pixel
///
/// Bright values halve, dim values keep 70%, so trails fade quickly at
/// first and then linger.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn falloff8(value: u8) -> u8 {
    if value > 32 {
        value / 2
    } else {
        (value as u16 * 7 / 10) as u8
    }
}

/// Apply [`falloff8`] to every channel
#[inline]
pub fn falloff_color(color: Rgb) -> Rgb {
    map_channels(color, falloff8)
}

/// Round a value down to a multiple of `step`
#[inline]
pub const fn quantize8(value: u8, step: u8) -> u8 {
    if step == 0 {
        return value;
    }
    value / step * step
}

/// Cross-fade between two values over `total` sub-steps
///
/// At `current == 0` the result is `from`, at `current == total` it is `to`.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn crossfade8(from: u8, to: u8, current: u16, total: u16) -> u8 {
    if total == 0 {
        return to;
    }
    let current = if current > total { total } else { current };
    (((total - current) as u32 * from as u32 + current as u32 * to as u32) / total as u32) as u8
}
