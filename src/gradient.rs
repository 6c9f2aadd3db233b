//! Hue gradient fill
//!
//! Interpolates a hue ramp across an index range in 1/100th-degree
//! fixed point and writes it through the HSL codec. Saturation and
//! luminance are fixed; only hue varies along the clockwise path from
//! the start hue to the end hue.

use crate::StripSink;
use crate::color::hsl_to_rgb;
use crate::strip::Strip;

const GRADIENT_SATURATION: i32 = 100;
const GRADIENT_LUMINANCE: i32 = 50;

impl<S: StripSink, const BUF_CAP: usize> Strip<S, BUF_CAP> {
    /// Fill LEDs `start..=end` (1-based) with a hue gradient.
    ///
    /// Indices are swapped when `end < start` and clamped to the strip.
    /// The first and last LED receive exactly `start_hue` and `end_hue`
    /// so the boundary colors match caller intent; interior LEDs get
    /// the interpolated hue. Flushes once after all writes.
    ///
    /// A single-LED range receives `start_hue` plus the raw scaled step
    /// increment instead of plain `start_hue`. The block runtime does
    /// the same, and buffers written by both must stay comparable.
    #[allow(clippy::cast_sign_loss)]
    pub fn gradient(&mut self, start: i32, end: i32, start_hue: i32, end_hue: i32) {
        let mut start = start - 1;
        let mut end = end - 1;
        if end < start {
            core::mem::swap(&mut start, &mut end);
        }

        #[allow(clippy::cast_possible_wrap)]
        let led_count = self.led_count() as i32;
        let start = start.clamp(0, led_count);
        let end = end.clamp(0, led_count);
        let steps = end - start + 1;

        // Clockwise hue distance, interpolated in 1/100th degrees.
        let h_dist_cw = ((end_hue + 360) - start_hue).rem_euclid(360);
        let h_step = h_dist_cw * 100 / steps;
        let h1_100 = start_hue * 100;

        if steps == 1 {
            self.write_led(
                start as usize,
                hsl_to_rgb(start_hue + h_step, GRADIENT_SATURATION, GRADIENT_LUMINANCE),
            );
        } else {
            self.write_led(
                start as usize,
                hsl_to_rgb(start_hue, GRADIENT_SATURATION, GRADIENT_LUMINANCE),
            );
            for i in (start + 1)..(start + steps - 1) {
                let h = (h1_100 + i * h_step) / 100 + 360;
                self.write_led(
                    i as usize,
                    hsl_to_rgb(h, GRADIENT_SATURATION, GRADIENT_LUMINANCE),
                );
            }
            self.write_led(
                (start + steps - 1) as usize,
                hsl_to_rgb(end_hue, GRADIENT_SATURATION, GRADIENT_LUMINANCE),
            );
        }
        self.flush();
    }
}
