//! LED strip views
//!
//! A [`Strip`] addresses a window of frames inside a [`StripBuffer`]. Range
//! views share the parent's store but carry their own brightness and channel
//! order. Every call locks the store for its whole duration, so views may be
//! driven from different contexts. A sequence of calls is not atomic though:
//! callers that need one must serialize it themselves.
//!
//! Out-of-range arguments are clamped or ignored, never reported.

use core::convert::Infallible;

#[cfg(feature = "esp32-log")]
use esp_println::println;
use smart_leds::SmartLedsWrite;

use crate::buffer::{Inner, StripBuffer};
use crate::channel_order::ChannelOrder;
use crate::color::{Rgb, rgb_to_u32};
use crate::config::StripConfig;
use crate::effect::{BarGraphEffect, Effect, RainbowEffect, StaticColorEffect};
use crate::frame::{
    FRAME_SIZE, Frame, MAX_BRIGHTNESS, START_FRAME_LEN, brightness_byte, clear_color,
    decode_color, encode_color, end_frame_len,
};
use crate::math8::{quad_ramp8, scale8};
use crate::transport::Transport;

/// Idle draw per LED, in tenths of a milliampere
const IDLE_CURRENT_DECI_MA: u32 = 7;
/// Draw per unit of summed channel value, in 1/10000 mA
const CHANNEL_CURRENT_FACTOR: u32 = 480;

/// View over a range of LED frames
pub struct Strip<'a, T, const LEDS: usize> {
    buffer: &'a StripBuffer<T, LEDS>,
    start: usize,
    length: usize,
    brightness: u8,
    order: ChannelOrder,
    matrix_width: usize,
}

impl<'a, T: Transport, const LEDS: usize> Strip<'a, T, LEDS> {
    /// Create a root strip of `pixel_count` pixels with default settings.
    pub fn new(buffer: &'a StripBuffer<T, LEDS>, pixel_count: usize, order: ChannelOrder) -> Self {
        Self::with_config(buffer, &StripConfig::new(pixel_count, order))
    }

    /// Create a root strip
    ///
    /// Configures the transport once and stamps the configured brightness
    /// into every frame of the strip.
    pub fn with_config(buffer: &'a StripBuffer<T, LEDS>, config: &StripConfig) -> Self {
        buffer.with_transport(|transport| transport.configure(&config.transport));

        let mut strip = Self {
            buffer,
            start: 0,
            length: config.pixel_count.min(LEDS),
            brightness: 0,
            order: config.order,
            matrix_width: 0,
        };
        strip.set_brightness(config.brightness);

        #[cfg(feature = "esp32-log")]
        println!(
            "[Strip.new] {} pixels, order {}, brightness {}, {} Hz",
            strip.length,
            strip.order.as_str(),
            strip.brightness,
            config.transport.frequency_hz
        );
        strip
    }

    /// Number of pixels in the view
    pub const fn len(&self) -> usize {
        self.length
    }

    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Position of the first pixel within the backing store
    pub const fn offset(&self) -> usize {
        self.start
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn channel_order(&self) -> ChannelOrder {
        self.order
    }

    /// Set the color of a pixel
    ///
    /// Indices outside the view are ignored.
    pub fn set_pixel(&self, index: usize, rgb: u32) {
        if index >= self.length {
            return;
        }
        let order = self.order;
        self.with_view(|view| encode_color(&mut view[index], order, rgb));
    }

    /// Color of a pixel, if the index is inside the view
    pub fn pixel(&self, index: usize) -> Option<u32> {
        if index >= self.length {
            return None;
        }
        let order = self.order;
        Some(self.with_view(|view| decode_color(&view[index], order)))
    }

    /// Set every pixel of the view to one color
    pub fn set_all(&self, rgb: u32) {
        let order = self.order;
        self.with_view(|view| {
            for frame in view {
                encode_color(frame, order, rgb);
            }
        });
    }

    /// Turn off every pixel, keeping brightness bytes
    pub fn clear(&self) {
        self.with_view(|view| view.iter_mut().for_each(clear_color));
    }

    /// Set the global brightness (0-31) of every frame in the view
    pub fn set_brightness(&mut self, level: u8) {
        self.brightness = level & MAX_BRIGHTNESS;
        let byte = brightness_byte(self.brightness);
        self.with_view(|view| {
            for frame in view {
                frame[0] = byte;
            }
        });
    }

    /// Create a view over `length` pixels starting at `offset`
    ///
    /// The range is clamped to this view. The new view shares the backing
    /// store and starts with this view's brightness and channel order.
    pub fn range(&self, offset: usize, length: usize) -> Strip<'a, T, LEDS> {
        let relative = offset.min(self.length.saturating_sub(1));
        let start = self.start + relative;
        let clamped_length = length.min(self.length - relative);

        #[cfg(feature = "esp32-log")]
        if relative != offset || clamped_length != length {
            println!(
                "[Strip.range] clamped {}+{} to {}+{}",
                offset, length, relative, clamped_length
            );
        }

        let mut strip = Strip {
            buffer: self.buffer,
            start,
            length: clamped_length,
            brightness: self.brightness,
            order: self.order,
            matrix_width: 0,
        };
        strip.set_brightness(self.brightness);
        strip
    }

    /// Shift pixels towards the end of the view by `offset` (negative
    /// shifts towards the start)
    ///
    /// Vacated frames are zeroed, then the brightness byte of the first
    /// frame is restamped. Other vacated frames keep a zero brightness byte.
    pub fn shift(&self, offset: isize) {
        let brightness = brightness_byte(self.brightness);
        self.with_view(|view| {
            let len = view.len();
            let distance = offset.unsigned_abs();
            if distance >= len {
                view.fill([0; FRAME_SIZE]);
            } else if offset > 0 {
                view.copy_within(..len - distance, distance);
                view[..distance].fill([0; FRAME_SIZE]);
            } else if offset < 0 {
                view.copy_within(distance.., 0);
                view[len - distance..].fill([0; FRAME_SIZE]);
            }
            if let Some(first) = view.first_mut() {
                first[0] = brightness;
            }
        });
    }

    /// Rotate pixels towards the end of the view by `offset` (negative
    /// rotates towards the start)
    pub fn rotate(&self, offset: isize) {
        self.with_view(|view| {
            if view.is_empty() {
                return;
            }
            let distance = offset.unsigned_abs() % view.len();
            if offset > 0 {
                view.rotate_right(distance);
            } else {
                view.rotate_left(distance);
            }
        });
    }

    /// Send the view to the strip
    ///
    /// Emits the start frame, every frame of the view in order and the end
    /// frame. Blocks until the transport has taken every byte.
    pub fn flush(&self) {
        let (start, end) = self.bounds();
        let end_frame = end_frame_len(self.length);
        self.buffer.with_inner(|inner| {
            let Inner { frames, transport } = inner;
            for _ in 0..START_FRAME_LEN {
                transport.write_byte(0);
            }
            for frame in &frames[start..end] {
                for &byte in frame {
                    transport.write_byte(byte);
                }
            }
            for _ in 0..end_frame {
                transport.write_byte(0);
            }
        });
    }

    /// Render `effect` into the view and flush
    pub fn show(&self, effect: &impl Effect) {
        effect.render(self);
        self.flush();
    }

    /// Fill the view with one color and flush
    pub fn show_color(&self, rgb: u32) {
        self.show(&StaticColorEffect::new(rgb));
    }

    /// Show a clockwise rainbow between two hues and flush
    pub fn show_rainbow(&self, start_hue: i32, end_hue: i32) {
        self.show(&RainbowEffect::new(start_hue, end_hue));
    }

    /// Show `value` as a bar graph against `high` and flush
    pub fn show_bar_graph(&self, value: i32, high: i32) {
        self.show(&BarGraphEffect::new(value, high));
    }

    /// Set the row width for matrix addressing
    ///
    /// A width of 0 disables matrix addressing.
    pub fn set_matrix_width(&mut self, width: usize) {
        self.matrix_width = width.min(self.length);
    }

    /// Set a pixel addressed as `(x, y)` on a row-major grid
    ///
    /// Coordinates outside the grid are ignored.
    pub fn set_matrix_color(&self, x: usize, y: usize, rgb: u32) {
        let width = self.matrix_width;
        if width == 0 {
            return;
        }
        let rows = self.length / width;
        if x >= width || y >= rows {
            return;
        }
        self.set_pixel(y * width + x, rgb);
    }

    /// Fade the color bytes in and out along the view
    pub fn ease_brightness(&self) {
        self.with_view(|view| {
            let len = view.len();
            for (position, frame) in view.iter_mut().enumerate() {
                let scale = quad_ramp8(position, len);
                for channel in &mut frame[1..] {
                    *channel = scale8(*channel, scale);
                }
            }
        });
    }

    /// Rough current draw of the view in milliamperes
    #[allow(clippy::cast_possible_truncation)]
    pub fn estimated_current_ma(&self) -> u32 {
        let channels: u32 = self.with_view(|view| {
            view.iter()
                .flat_map(|frame| frame[1..].iter())
                .map(|&channel| u32::from(channel))
                .sum()
        });
        let weighted = channels * u32::from(self.brightness) / u32::from(MAX_BRIGHTNESS);
        self.length as u32 * IDLE_CURRENT_DECI_MA / 10 + weighted * CHANNEL_CURRENT_FACTOR / 10_000
    }

    const fn bounds(&self) -> (usize, usize) {
        (self.start, self.start + self.length)
    }

    fn with_view<R>(&self, f: impl FnOnce(&mut [Frame]) -> R) -> R {
        let (start, end) = self.bounds();
        self.buffer.with_frames(|frames| f(&mut frames[start..end]))
    }
}

impl<T: Transport, const LEDS: usize> SmartLedsWrite for Strip<'_, T, LEDS> {
    type Error = Infallible;
    type Color = Rgb;

    /// Write colors from pixel 0 onwards and flush
    ///
    /// Colors beyond the end of the view are dropped.
    fn write<Iter, Item>(&mut self, iterator: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Item>,
        Item: Into<Self::Color>,
    {
        for (index, color) in iterator.into_iter().take(self.length).enumerate() {
            self.set_pixel(index, rgb_to_u32(color.into()));
        }
        self.flush();
        Ok(())
    }
}
