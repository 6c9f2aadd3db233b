//! Pin selectors and their resolution to concrete pins
//!
//! Callers pick a logical [`PinSelect`]; the engine resolves it once to
//! the concrete digital or PWM-capable pin identifier and caches the
//! result.

/// Logical pin selector exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinSelect {
    P0,
    P1,
    P2,
}

/// Concrete digital pin identifier handed to the strip sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitalPin {
    P0,
    P1,
    P2,
}

/// Concrete PWM-capable pin identifier handed to the servo actuator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalogPin {
    P0,
    P1,
    P2,
}

pub const fn to_digital(pin: PinSelect) -> DigitalPin {
    match pin {
        PinSelect::P0 => DigitalPin::P0,
        PinSelect::P1 => DigitalPin::P1,
        PinSelect::P2 => DigitalPin::P2,
    }
}

pub const fn to_pwm(pin: PinSelect) -> AnalogPin {
    match pin {
        PinSelect::P0 => AnalogPin::P0,
        PinSelect::P1 => AnalogPin::P1,
        PinSelect::P2 => AnalogPin::P2,
    }
}
