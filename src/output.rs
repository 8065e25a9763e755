//! Adapter from [`OutputDriver`] onto `smart-leds` drivers

#[cfg(feature = "esp32-log")]
use esp_println::println;
use smart_leds::SmartLedsWrite;

use crate::OutputDriver;
use crate::color::{BLACK, ColorOrder, Rgb};

/// Buffers pixels and writes the whole strip on flush
pub struct SmartLedsOutput<W, const N: usize>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    writer: W,
    order: ColorOrder,
    pixels: [Rgb; N],
}

impl<W, const N: usize> SmartLedsOutput<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            order: ColorOrder::Rgb,
            pixels: [BLACK; N],
        }
    }

    /// Reorder channels before writing, for drivers that send them verbatim
    #[must_use]
    pub fn with_order(mut self, order: ColorOrder) -> Self {
        self.order = order;
        self
    }

    /// Pixels staged for the next flush
    pub const fn pixels(&self) -> &[Rgb; N] {
        &self.pixels
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W, const N: usize> OutputDriver for SmartLedsOutput<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn flush(&mut self) {
        let order = self.order;
        let frame = self.pixels.iter().map(|color| order.reorder(*color));
        if self.writer.write(frame).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsOutput.flush] write failed");
        }
    }
}
