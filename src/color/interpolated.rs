//! Fractional colors for effects that need sub-pixel precision
//!
//! Every channel carries its current value and the amount it changes by on
//! each step of the running effect.

use super::{Rgb, clamp_channel};

/// A single color channel with its per-step delta
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FloatChannel {
    /// Current channel value
    pub value: f32,
    /// Change applied on every step
    pub delta: f32,
}

impl FloatChannel {
    pub const ZERO: Self = Self {
        value: 0.0,
        delta: 0.0,
    };

    pub const fn new(value: f32, delta: f32) -> Self {
        Self { value, delta }
    }
}

/// Color with fractional channel values
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InterpolatedColor {
    pub r: FloatChannel,
    pub g: FloatChannel,
    pub b: FloatChannel,
}

impl InterpolatedColor {
    pub const BLACK: Self = Self {
        r: FloatChannel::ZERO,
        g: FloatChannel::ZERO,
        b: FloatChannel::ZERO,
    };

    /// Create a color with the given values and no delta
    pub fn from_rgb(color: Rgb) -> Self {
        Self {
            r: FloatChannel::new(f32::from(color.r), 0.0),
            g: FloatChannel::new(f32::from(color.g), 0.0),
            b: FloatChannel::new(f32::from(color.b), 0.0),
        }
    }

    /// Truncate the current values into an 8-bit color
    pub fn to_rgb(&self) -> Rgb {
        Rgb {
            r: clamp_channel(self.r.value),
            g: clamp_channel(self.g.value),
            b: clamp_channel(self.b.value),
        }
    }

    /// Channel by index (`0 = r`, `1 = g`, anything else `b`)
    pub const fn channel(&self, index: usize) -> &FloatChannel {
        match index {
            0 => &self.r,
            1 => &self.g,
            _ => &self.b,
        }
    }

    /// Mutable channel by index (`0 = r`, `1 = g`, anything else `b`)
    pub const fn channel_mut(&mut self, index: usize) -> &mut FloatChannel {
        match index {
            0 => &mut self.r,
            1 => &mut self.g,
            _ => &mut self.b,
        }
    }

    /// Iterate mutably over all three channels
    pub fn channels_mut(&mut self) -> [&mut FloatChannel; 3] {
        [&mut self.r, &mut self.g, &mut self.b]
    }
}
