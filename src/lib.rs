#![no_std]

pub mod color;
pub mod gradient;
pub mod pins;
pub mod range;
pub mod servo;
pub mod shared;
pub mod strip;
pub mod transform;

pub use color::{Rgb, hsl_to_rgb, pack_rgb, rgb_from_u32, scale};
pub use pins::{AnalogPin, DigitalPin, PinSelect};
pub use range::LedRange;
pub use servo::{RotateDirection, ServoActuator, run_180, run_360};
pub use shared::SharedStrip;
pub use strip::{CHANNELS_PER_LED, Strip, StripError, buffer_capacity};

/// Abstract strip driver trait
///
/// Implement this trait to support different hardware platforms.
/// The strip engine is generic over this trait and hands it the full
/// wire-order byte buffer after every visible mutation.
pub trait StripSink {
    /// Write the buffer to the physical strip on the given pin
    fn send(&mut self, buffer: &[u8], pin: DigitalPin);
}
