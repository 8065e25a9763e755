//! Fixed little-endian layout of the persisted configuration

use crate::color::{Rgb, SignedColor};
use crate::config::{
    Configuration, CycleOptions, LinesOptions, MAX_KEY_COLORS, PulseOptions, RainbowOptions,
    ScheduleState, SnakeOptions, SnowflakeOptions, StroboscopeOptions, WavesOptions,
    WorkingFields,
};
use crate::mode::ModeId;

const RGB_SIZE: usize = 3;
const SIGNED_COLOR_SIZE: usize = 6;
const KEY_COLORS_SIZE: usize = RGB_SIZE * MAX_KEY_COLORS;

/// Sequential writer into a byte slice; writes past the end are dropped
pub(crate) struct ByteWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> ByteWriter<'a> {
    pub(crate) const fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub(crate) fn bytes(&mut self, bytes: &[u8]) {
        for byte in bytes {
            if let Some(slot) = self.buf.get_mut(self.pos) {
                *slot = *byte;
            }
            self.pos += 1;
        }
    }

    pub(crate) fn u8(&mut self, value: u8) {
        self.bytes(&[value]);
    }

    pub(crate) fn i8(&mut self, value: i8) {
        self.bytes(&value.to_le_bytes());
    }

    pub(crate) fn bool(&mut self, value: bool) {
        self.u8(u8::from(value));
    }

    pub(crate) fn u16(&mut self, value: u16) {
        self.bytes(&value.to_le_bytes());
    }

    pub(crate) fn i16(&mut self, value: i16) {
        self.bytes(&value.to_le_bytes());
    }

    pub(crate) fn u32(&mut self, value: u32) {
        self.bytes(&value.to_le_bytes());
    }

    pub(crate) fn rgb(&mut self, color: Rgb) {
        self.bytes(&[color.r, color.g, color.b]);
    }

    pub(crate) fn signed(&mut self, color: SignedColor) {
        self.i16(color.r);
        self.i16(color.g);
        self.i16(color.b);
    }

    pub(crate) fn mode(&mut self, mode: ModeId) {
        self.u8(mode.as_raw());
    }
}

/// Sequential reader over a byte slice; reads past the end yield zero
pub(crate) struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub(crate) const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn array<const LEN: usize>(&mut self) -> [u8; LEN] {
        let mut out = [0; LEN];
        for slot in &mut out {
            *slot = self.buf.get(self.pos).copied().unwrap_or(0);
            self.pos += 1;
        }
        out
    }

    pub(crate) fn u8(&mut self) -> u8 {
        self.array::<1>()[0]
    }

    pub(crate) fn i8(&mut self) -> i8 {
        i8::from_le_bytes(self.array())
    }

    pub(crate) fn bool(&mut self) -> bool {
        self.u8() != 0
    }

    pub(crate) fn u16(&mut self) -> u16 {
        u16::from_le_bytes(self.array())
    }

    pub(crate) fn i16(&mut self) -> i16 {
        i16::from_le_bytes(self.array())
    }

    pub(crate) fn u32(&mut self) -> u32 {
        u32::from_le_bytes(self.array())
    }

    pub(crate) fn rgb(&mut self) -> Rgb {
        let [r, g, b] = self.array();
        Rgb { r, g, b }
    }

    pub(crate) fn signed(&mut self) -> SignedColor {
        SignedColor::new(self.i16(), self.i16(), self.i16())
    }

    /// Out-of-range ids fall back to `Off`
    pub(crate) fn mode(&mut self) -> ModeId {
        ModeId::from_raw(self.u8()).unwrap_or(ModeId::Off)
    }
}

/// A record with a fixed encoded size
pub(crate) trait Persist: Sized {
    const SIZE: usize;

    fn encode(&self, w: &mut ByteWriter<'_>);

    fn decode(r: &mut ByteReader<'_>) -> Self;
}

fn encode_key_colors(w: &mut ByteWriter<'_>, colors: &[Rgb; MAX_KEY_COLORS]) {
    for color in colors {
        w.rgb(*color);
    }
}

fn decode_key_colors(r: &mut ByteReader<'_>) -> [Rgb; MAX_KEY_COLORS] {
    let mut colors = [Rgb::default(); MAX_KEY_COLORS];
    for color in &mut colors {
        *color = r.rgb();
    }
    colors
}

impl Persist for WavesOptions {
    const SIZE: usize = RGB_SIZE * 3 + SIGNED_COLOR_SIZE;

    fn encode(&self, w: &mut ByteWriter<'_>) {
        w.rgb(self.color_min);
        w.rgb(self.color_max);
        w.rgb(self.count);
        w.signed(self.speed);
    }

    fn decode(r: &mut ByteReader<'_>) -> Self {
        Self {
            color_min: r.rgb(),
            color_max: r.rgb(),
            count: r.rgb(),
            speed: r.signed(),
        }
    }
}

impl Persist for RainbowOptions {
    const SIZE: usize = KEY_COLORS_SIZE + 3;

    fn encode(&self, w: &mut ByteWriter<'_>) {
        encode_key_colors(w, &self.colors);
        w.u8(self.count);
        w.i8(self.speed);
        w.bool(self.reverse);
    }

    fn decode(r: &mut ByteReader<'_>) -> Self {
        Self {
            colors: decode_key_colors(r),
            count: r.u8(),
            speed: r.i8(),
            reverse: r.bool(),
        }
    }
}

impl Persist for LinesOptions {
    const SIZE: usize = KEY_COLORS_SIZE + 4;

    fn encode(&self, w: &mut ByteWriter<'_>) {
        encode_key_colors(w, &self.colors);
        w.u8(self.count);
        w.i8(self.speed);
        w.bool(self.reverse);
        w.bool(self.multi_color);
    }

    fn decode(r: &mut ByteReader<'_>) -> Self {
        Self {
            colors: decode_key_colors(r),
            count: r.u8(),
            speed: r.i8(),
            reverse: r.bool(),
            multi_color: r.bool(),
        }
    }
}

impl Persist for SnowflakeOptions {
    const SIZE: usize = RGB_SIZE + 4;

    fn encode(&self, w: &mut ByteWriter<'_>) {
        w.rgb(self.color);
        w.bool(self.multi_color);
        w.u8(self.flake_size);
        w.u8(self.count);
        w.u8(self.fading);
    }

    fn decode(r: &mut ByteReader<'_>) -> Self {
        Self {
            color: r.rgb(),
            multi_color: r.bool(),
            flake_size: r.u8(),
            count: r.u8(),
            fading: r.u8(),
        }
    }
}

impl Persist for StroboscopeOptions {
    const SIZE: usize = RGB_SIZE + 2;

    fn encode(&self, w: &mut ByteWriter<'_>) {
        w.rgb(self.color);
        w.bool(self.multi_color);
        w.u8(self.count);
    }

    fn decode(r: &mut ByteReader<'_>) -> Self {
        Self {
            color: r.rgb(),
            multi_color: r.bool(),
            count: r.u8(),
        }
    }
}

impl Persist for SnakeOptions {
    const SIZE: usize = RGB_SIZE + 4;

    fn encode(&self, w: &mut ByteWriter<'_>) {
        w.rgb(self.color);
        w.u8(self.count);
        w.i8(self.speed);
        w.bool(self.multi_color);
        w.bool(self.reverse);
    }

    fn decode(r: &mut ByteReader<'_>) -> Self {
        Self {
            color: r.rgb(),
            count: r.u8(),
            speed: r.i8(),
            multi_color: r.bool(),
            reverse: r.bool(),
        }
    }
}

impl Persist for PulseOptions {
    const SIZE: usize = RGB_SIZE * 2 + 1;

    fn encode(&self, w: &mut ByteWriter<'_>) {
        w.rgb(self.color_min);
        w.rgb(self.color_max);
        w.i8(self.speed);
    }

    fn decode(r: &mut ByteReader<'_>) -> Self {
        Self {
            color_min: r.rgb(),
            color_max: r.rgb(),
            speed: r.i8(),
        }
    }
}

impl Persist for CycleOptions {
    const SIZE: usize = 4 + 4 + 4;

    fn encode(&self, w: &mut ByteWriter<'_>) {
        w.u32(self.next_change);
        w.u32(self.period);
        w.u8(self.current);
        w.u8(self.fading);
        w.bool(self.is_random);
        w.bool(self.need_to_fade);
    }

    fn decode(r: &mut ByteReader<'_>) -> Self {
        Self {
            next_change: r.u32(),
            period: r.u32(),
            current: r.u8(),
            fading: r.u8(),
            is_random: r.bool(),
            need_to_fade: r.bool(),
        }
    }
}

impl Persist for WorkingFields {
    const SIZE: usize = 4 + 1 + 2 + 1 + RGB_SIZE;

    fn encode(&self, w: &mut ByteWriter<'_>) {
        w.u32(self.effect_creating);
        w.i8(self.direction);
        w.i16(self.position);
        w.i8(self.step);
        w.rgb(self.current_color);
    }

    fn decode(r: &mut ByteReader<'_>) -> Self {
        Self {
            effect_creating: r.u32(),
            direction: r.i8(),
            position: r.i16(),
            step: r.i8(),
            current_color: r.rgb(),
        }
    }
}

impl Persist for Configuration {
    const SIZE: usize = 2
        + WavesOptions::SIZE
        + RainbowOptions::SIZE
        + LinesOptions::SIZE
        + SnowflakeOptions::SIZE
        + StroboscopeOptions::SIZE
        + SnakeOptions::SIZE
        + PulseOptions::SIZE
        + CycleOptions::SIZE
        + WorkingFields::SIZE;

    fn encode(&self, w: &mut ByteWriter<'_>) {
        w.mode(self.mode);
        w.mode(self.special_mode);
        self.waves.encode(w);
        self.rainbow.encode(w);
        self.lines.encode(w);
        self.snowflake.encode(w);
        self.stroboscope.encode(w);
        self.snake.encode(w);
        self.pulse.encode(w);
        self.cycle.encode(w);
        self.working.encode(w);
    }

    fn decode(r: &mut ByteReader<'_>) -> Self {
        Self {
            mode: r.mode(),
            special_mode: r.mode(),
            waves: WavesOptions::decode(r),
            rainbow: RainbowOptions::decode(r),
            lines: LinesOptions::decode(r),
            snowflake: SnowflakeOptions::decode(r),
            stroboscope: StroboscopeOptions::decode(r),
            snake: SnakeOptions::decode(r),
            pulse: PulseOptions::decode(r),
            cycle: CycleOptions::decode(r),
            working: WorkingFields::decode(r),
        }
    }
}

impl Persist for ScheduleState {
    const SIZE: usize = 2;

    fn encode(&self, w: &mut ByteWriter<'_>) {
        w.u8(self.count);
        w.u8(self.current);
    }

    fn decode(r: &mut ByteReader<'_>) -> Self {
        Self {
            count: r.u8(),
            current: r.u8(),
        }
    }
}
