mod tests {
    use ws2812_strip_engine::{
        AnalogPin, PinSelect, RotateDirection, ServoActuator, run_180, run_360,
    };

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        Continuous(AnalogPin, bool),
        Angle(AnalogPin, u8),
    }

    #[derive(Default)]
    struct RecordingActuator {
        calls: Vec<Call>,
    }

    impl ServoActuator for RecordingActuator {
        fn write_angle(&mut self, pin: AnalogPin, degrees: u8) {
            self.calls.push(Call::Angle(pin, degrees));
        }

        fn set_continuous(&mut self, pin: AnalogPin, enabled: bool) {
            self.calls.push(Call::Continuous(pin, enabled));
        }
    }

    #[test]
    fn test_run_180_disables_continuous_before_writing() {
        let mut servo = RecordingActuator::default();
        run_180(&mut servo, PinSelect::P1, 90);
        assert_eq!(
            servo.calls,
            vec![
                Call::Continuous(AnalogPin::P1, false),
                Call::Angle(AnalogPin::P1, 90),
            ]
        );
    }

    #[test]
    fn test_run_180_clamps_angle() {
        let mut servo = RecordingActuator::default();
        run_180(&mut servo, PinSelect::P0, -20);
        run_180(&mut servo, PinSelect::P0, 200);
        assert_eq!(servo.calls[1], Call::Angle(AnalogPin::P0, 0));
        assert_eq!(servo.calls[3], Call::Angle(AnalogPin::P0, 180));
    }

    #[test]
    fn test_run_360_stop_is_neutral_midpoint() {
        let mut servo = RecordingActuator::default();
        run_360(&mut servo, PinSelect::P2, 0, RotateDirection::Clockwise);
        assert_eq!(
            servo.calls,
            vec![
                Call::Continuous(AnalogPin::P2, true),
                Call::Angle(AnalogPin::P2, 90),
            ]
        );
    }

    #[test]
    fn test_run_360_full_speed_endpoints() {
        let mut servo = RecordingActuator::default();
        run_360(&mut servo, PinSelect::P0, 100, RotateDirection::Clockwise);
        run_360(&mut servo, PinSelect::P0, 100, RotateDirection::CounterClockwise);
        assert_eq!(servo.calls[1], Call::Angle(AnalogPin::P0, 180));
        assert_eq!(servo.calls[3], Call::Angle(AnalogPin::P0, 0));
    }

    #[test]
    fn test_run_360_speed_is_clamped_and_mapped() {
        let mut servo = RecordingActuator::default();
        run_360(&mut servo, PinSelect::P0, 150, RotateDirection::Clockwise);
        run_360(&mut servo, PinSelect::P0, 50, RotateDirection::CounterClockwise);
        assert_eq!(servo.calls[1], Call::Angle(AnalogPin::P0, 180));
        // (-50 + 100) * 180 / 200 = 45 degrees
        assert_eq!(servo.calls[3], Call::Angle(AnalogPin::P0, 45));
    }
}
