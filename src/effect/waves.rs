//! Independent triangle waves on each color channel
//!
//! Each channel holds a triangle wave between its floor and ceiling. Moving
//! the wave by one pixel is split into `101 - |speed|` sub-steps: on every
//! sub-step a pixel gives away its delta and takes the delta of the pixel
//! behind it. When a full pixel has been travelled, the deltas are
//! recomputed from the new values.

use libm::floorf;

use super::Effect;
use crate::color::{FloatChannel, channels};
use crate::context::{SpeedSource, StepContext};
use crate::scheduler::MAX_SPEED;

/// Floor applied to values pushed below zero by float drift
const MIN_VALUE: f32 = 0.01;

pub(crate) struct Waves;

/// Number of sub-steps that move a wave by one pixel
fn sub_steps(speed: i16) -> u16 {
    u16::from(MAX_SPEED) + 1 - speed.unsigned_abs().min(u16::from(MAX_SPEED))
}

/// Value of a triangle wave with half period `len` at position `x`
fn triangle(x: f32, len: f32, min: f32, amplitude: f32) -> f32 {
    let current = amplitude * x / len;
    let period = floorf(x / len);
    if period as u32 % 2 == 0 {
        min + current - period * amplitude
    } else {
        min - current + (period + 1.0) * amplitude
    }
}

impl Effect for Waves {
    fn init<const N: usize>(ctx: &mut StepContext<'_, N>) {
        let options = ctx.config.waves;
        let mins = channels(options.color_min);
        let maxs = channels(options.color_max);
        let counts = channels(options.count);
        let speeds = options.speed.channels();

        for ch in 0..3 {
            let half_period = N as f32 / f32::from(counts[ch].max(1)) / 2.0;
            let min = f32::from(mins[ch]);
            let amplitude = f32::from(maxs[ch]) - min;
            let sub_steps = f32::from(sub_steps(speeds[ch]));
            for (index, color) in ctx.frame.working.iter_mut().enumerate() {
                let value = triangle(index as f32, half_period, min, amplitude);
                *color.channel_mut(ch) = FloatChannel::new(value, value / sub_steps);
            }
        }
        ctx.frame.commit_working();
        ctx.runtime.wave_phase = [0; 3];

        ctx.select_speed(SpeedSource::Default);
        let speed = ctx.effect_speed();
        ctx.schedule(speed);
        ctx.modifier.cancel();
    }

    fn advance<const N: usize>(ctx: &mut StepContext<'_, N>) {
        if N == 0 {
            return;
        }
        let speeds = ctx.config.waves.speed.channels();

        for (ch, speed) in speeds.into_iter().enumerate() {
            if speed == 0 {
                continue;
            }
            let phase = &mut ctx.runtime.wave_phase[ch];
            *phase = phase.saturating_add(speed.signum() as i8);
            let travelled = phase.unsigned_abs();

            for index in 0..N {
                let behind = if speed > 0 {
                    (index + N - 1) % N
                } else {
                    (index + 1) % N
                };
                let incoming = ctx.frame.working[behind].channel(ch).delta;
                let channel = ctx.frame.working[index].channel_mut(ch);
                channel.value = channel.value - channel.delta + incoming;
                if channel.value < 0.0 {
                    channel.value = MIN_VALUE;
                }
            }

            let sub_steps = sub_steps(speed);
            if u16::from(travelled) >= sub_steps {
                ctx.runtime.wave_phase[ch] = 0;
                for color in &mut ctx.frame.working {
                    let channel = color.channel_mut(ch);
                    channel.delta = channel.value / f32::from(sub_steps);
                }
            }
        }
        ctx.frame.commit_working();
    }
}
