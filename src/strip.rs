//! The strip engine
//!
//! Owns the per-LED wire-order byte buffer and every operation that
//! mutates it. The buffer holds exactly `3 * led_count` bytes in
//! (green, red, blue) order, the sequence the WS2812 chip expects on
//! the wire. Every visible mutation pushes the full buffer to the
//! [`StripSink`], so callers never observe partial state.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use heapless::Vec;

use crate::StripSink;
use crate::color::scale;
use crate::pins::{DigitalPin, PinSelect, to_digital};
use crate::range::LedRange;

/// Bytes per LED on the wire: one each for green, red and blue.
pub const CHANNELS_PER_LED: usize = 3;

/// Byte capacity required for a strip of `led_count` LEDs.
pub const fn buffer_capacity(led_count: usize) -> usize {
    led_count * CHANNELS_PER_LED
}

/// Error returned by validated buffer writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripError {
    /// The 1-based range does not fit into `[1, led_count]`.
    InvalidRange { from: u16, to: u16 },
}

/// An addressable LED strip with its buffer and configuration.
///
/// `BUF_CAP` is the byte capacity of the backing buffer, three bytes
/// per LED (see [`buffer_capacity`]). The actual strip length is set
/// at construction and may be replaced with [`Strip::reinit`].
pub struct Strip<S: StripSink, const BUF_CAP: usize> {
    sink: S,
    pin: DigitalPin,
    brightness: u8,
    led_count: usize,
    buf: Vec<u8, BUF_CAP>,
}

impl<S: StripSink, const BUF_CAP: usize> Strip<S, BUF_CAP> {
    /// Create a strip on the given pin with `led_count` LEDs, all off.
    ///
    /// The pin selector is resolved once here and cached. A count
    /// exceeding the buffer capacity is clamped; a zero count yields an
    /// empty strip on which every operation is a no-op.
    pub fn new(sink: S, pin: PinSelect, led_count: usize) -> Self {
        let mut strip = Self {
            sink,
            pin: to_digital(pin),
            brightness: 255,
            led_count: 0,
            buf: Vec::new(),
        };
        strip.reinit(led_count);
        strip
    }

    /// Replace the buffer with a zeroed one of the new length.
    pub fn reinit(&mut self, led_count: usize) {
        let led_count = led_count.min(BUF_CAP / CHANNELS_PER_LED);
        self.led_count = led_count;
        self.buf.clear();
        // Cannot fail, the length was clamped to the capacity above.
        let _ = self.buf.resize_default(led_count * CHANNELS_PER_LED);
        #[cfg(feature = "esp32-log")]
        println!("strip: buffer reset to {} leds", led_count);
    }

    pub const fn led_count(&self) -> usize {
        self.led_count
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Set the brightness used by subsequent writes (0-255).
    ///
    /// Non-retroactive: already written LEDs keep their scaled values.
    pub fn set_brightness(&mut self, value: u8) {
        self.brightness = value;
    }

    /// The wire-order byte buffer, `3 * led_count` bytes.
    pub fn buffer(&self) -> &[u8] {
        &self.buf
    }

    /// Read back one LED as wire-order (green, red, blue) bytes.
    ///
    /// `index` is 1-based; out-of-strip indices yield `None`.
    pub fn led(&self, index: usize) -> Option<(u8, u8, u8)> {
        if index < 1 || index > self.led_count {
            return None;
        }
        let at = (index - 1) * CHANNELS_PER_LED;
        Some((self.buf[at], self.buf[at + 1], self.buf[at + 2]))
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Write the scaled color to every LED in the 1-based inclusive range.
    ///
    /// Returns [`StripError::InvalidRange`] and writes nothing when the
    /// range does not fit into `[1, led_count]`. On success the buffer
    /// is flushed once.
    pub fn set_range(&mut self, range: LedRange, color: u32) -> Result<(), StripError> {
        let from = usize::from(range.from);
        let to = usize::from(range.to);
        if from < 1 || to < from || to > self.led_count {
            return Err(StripError::InvalidRange {
                from: range.from,
                to: range.to,
            });
        }
        for index in (from - 1)..to {
            self.write_led(index, color);
        }
        self.flush();
        Ok(())
    }

    /// Legacy single-argument entry point.
    ///
    /// `raw` is either a plain 1-based LED index or a packed range (see
    /// [`LedRange::encode`]). Malformed encodings and out-of-strip
    /// indices degrade to "write nothing"; the buffer is flushed either
    /// way, preserving the observable behavior of the block runtime.
    pub fn set_index_color(&mut self, raw: i32, color: u32) {
        if let Some(range) = LedRange::from_raw(raw) {
            for index in (usize::from(range.from) - 1)..usize::from(range.to) {
                self.write_led(index, color);
            }
        }
        self.flush();
    }

    /// Write the scaled color to every LED, then flush.
    pub fn set_all(&mut self, color: u32) {
        for index in 0..self.led_count {
            self.write_led(index, color);
        }
        self.flush();
    }

    /// Turn every LED off.
    pub fn clear(&mut self) {
        self.set_all(0x00_0000);
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    /// Write one LED (0-based) in wire order, scaled by brightness.
    ///
    /// Out-of-strip writes are dropped silently; range validation is
    /// the caller's concern.
    pub(crate) fn write_led(&mut self, index: usize, color: u32) {
        if index >= self.led_count {
            return;
        }
        let px = scale(color, self.brightness);
        let at = index * CHANNELS_PER_LED;
        self.buf[at] = px.g;
        self.buf[at + 1] = px.r;
        self.buf[at + 2] = px.b;
    }

    /// Push the full buffer and cached pin to the sink.
    pub(crate) fn flush(&mut self) {
        self.sink.send(&self.buf, self.pin);
    }
}
