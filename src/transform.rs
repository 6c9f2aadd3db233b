//! Linear shift and circular rotation over the strip buffer
//!
//! Both operate on whole LEDs (three bytes at a time) and flush once on
//! completion. `shift` discards displaced content and introduces
//! blanks; `rotate` is lossless, LEDs leaving one end reappear at the
//! other.

use crate::StripSink;
use crate::strip::{CHANNELS_PER_LED, Strip};

impl<S: StripSink, const BUF_CAP: usize> Strip<S, BUF_CAP> {
    /// Displace the strip content by `offset` LEDs.
    ///
    /// Positive offsets move content toward higher indices and blank
    /// the `offset` lowest LEDs; negative offsets mirror that. An
    /// offset of zero or a strip shorter than two LEDs is a no-op
    /// without a flush. An offset magnitude of at least the strip
    /// length clears the whole buffer.
    pub fn shift(&mut self, offset: i32) {
        if offset == 0 || self.led_count() <= 1 {
            return;
        }
        let steps = self.led_count();
        let magnitude = offset.unsigned_abs() as usize;
        if magnitude >= steps {
            self.buffer_mut().fill(0);
            self.flush();
            return;
        }

        let kept = (steps - magnitude) * CHANNELS_PER_LED;
        let blank = magnitude * CHANNELS_PER_LED;
        let buf = self.buffer_mut();
        if offset > 0 {
            buf.copy_within(..kept, blank);
            buf[..blank].fill(0);
        } else {
            buf.copy_within(blank.., 0);
            buf[kept..].fill(0);
        }
        self.flush();
    }

    /// Rotate the strip content circularly by `offset` LEDs.
    ///
    /// The offset is reduced modulo the strip length, preserving sign.
    /// A reduced offset of zero or a strip shorter than two LEDs is a
    /// no-op without a flush.
    pub fn rotate(&mut self, offset: i32) {
        if self.led_count() <= 1 {
            return;
        }
        #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
        let offset = offset % self.led_count() as i32;
        if offset == 0 {
            return;
        }

        let bytes = offset.unsigned_abs() as usize * CHANNELS_PER_LED;
        let buf = self.buffer_mut();
        if offset > 0 {
            buf.rotate_right(bytes);
        } else {
            buf.rotate_left(bytes);
        }
        self.flush();
    }
}
