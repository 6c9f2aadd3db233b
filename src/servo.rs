//! Hobby servo helpers
//!
//! Positional servos take an angle in 0..=180 degrees; continuous
//! rotation servos reuse the same angle range as a speed control
//! centered on the neutral midpoint. PWM generation is the actuator's
//! concern, reached through the [`ServoActuator`] seam.

use crate::pins::{AnalogPin, PinSelect, to_pwm};

pub const MIN_ANGLE: i32 = 0;
pub const MAX_ANGLE: i32 = 180;

/// Rotation direction for continuous servos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDirection {
    Clockwise,
    CounterClockwise,
}

/// Abstract servo driver trait
///
/// Implement this trait to support different hardware platforms.
pub trait ServoActuator {
    /// Drive the servo on `pin` to the given angle in degrees
    fn write_angle(&mut self, pin: AnalogPin, degrees: u8);

    /// Switch the servo on `pin` between positional and continuous mode
    fn set_continuous(&mut self, pin: AnalogPin, enabled: bool);
}

/// Position a 180 degree servo, clamping the angle to 0..=180.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn run_180<A: ServoActuator>(actuator: &mut A, pin: PinSelect, degrees: i32) {
    let degrees = degrees.clamp(MIN_ANGLE, MAX_ANGLE);
    let pin = to_pwm(pin);
    actuator.set_continuous(pin, false);
    actuator.write_angle(pin, degrees as u8);
}

/// Spin a continuous rotation servo at `speed` percent (0..=100).
///
/// The signed speed is mapped linearly onto the angle range around the
/// neutral midpoint: full counter-clockwise lands on 0, stop on 90 and
/// full clockwise on 180.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn run_360<A: ServoActuator>(
    actuator: &mut A,
    pin: PinSelect,
    speed: i32,
    direction: RotateDirection,
) {
    let speed = speed.clamp(0, 100);
    let signed = match direction {
        RotateDirection::Clockwise => speed,
        RotateDirection::CounterClockwise => -speed,
    };
    let degrees = ((signed + 100) * (MAX_ANGLE - MIN_ANGLE) / 200 + MIN_ANGLE)
        .clamp(MIN_ANGLE, MAX_ANGLE);
    let pin = to_pwm(pin);
    actuator.set_continuous(pin, true);
    actuator.write_angle(pin, degrees as u8);
}
