// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Position control for the tapper mechanism.
//!
//! The tapper has exactly two physical positions: UP (released) and DOWN (pressed). A transition
//! drives two outputs together — the active-signal GPIO and the servo angle. The `is_down` flag
//! tracks the last applied transition and makes repeated commands no-ops, so a flood of identical
//! command bytes never produces redundant hardware writes.

use embedded_hal::{digital::v2::OutputPin, PwmPin};

use crate::drivers::Sg90;
use crate::protocol::Command;

/// Servo angle held while released.
pub const PITCH_UP_DEG: f32 = 15.0;

/// Servo angle held while pressed.
pub const PITCH_DOWN_DEG: f32 = 32.0;

/// Two-position press mechanism.
///
/// Owns the active-signal pin and the servo. Generic over the pin and PWM channel so the
/// transition logic runs on hardware and under host tests alike.
pub struct Tapper<PIN, PWM> {
    active: PIN,
    servo: Sg90<PWM>,
    is_down: bool,
}

impl<PIN, PWM> Tapper<PIN, PWM>
where
    PIN: OutputPin,
    PWM: PwmPin<Duty = u16>,
{
    /// Construct the tapper and force the hardware into the known UP state: active signal low,
    /// servo at the UP angle.
    pub fn new(mut active: PIN, mut servo: Sg90<PWM>) -> Self {
        active.set_low().ok();
        servo.set_angle(PITCH_UP_DEG);

        Self {
            active,
            servo,
            is_down: false,
        }
    }

    /// Release the tapper. No-op when already up.
    pub fn up(&mut self) {
        if !self.is_down {
            return;
        }

        self.active.set_low().ok();
        self.servo.set_angle(PITCH_UP_DEG);

        self.is_down = false;
    }

    /// Press the tapper down. No-op when already down.
    pub fn down(&mut self) {
        if self.is_down {
            return;
        }

        self.active.set_high().ok();
        self.servo.set_angle(PITCH_DOWN_DEG);

        self.is_down = true;
    }

    /// Apply one decoded command.
    #[inline]
    pub fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::Down => self.down(),
            Command::Up => self.up(),
        }
    }

    /// Whether the tapper is currently pressed.
    #[inline]
    pub fn is_down(&self) -> bool {
        self.is_down
    }

    /// Tear down the controller and return the pin and servo.
    pub fn free(self) -> (PIN, Sg90<PWM>) {
        (self.active, self.servo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    // Duty counts for the two calibration angles at 20_000 max duty (one count per microsecond),
    // through the default 544-2400 us pulse range.
    const UP_DUTY: u16 = 698;
    const DOWN_DUTY: u16 = 873;

    struct MockPin {
        high: bool,
        writes: usize,
    }

    impl MockPin {
        fn new() -> Self {
            Self {
                high: true, // deliberately not the reset state, so init must write it
                writes: 0,
            }
        }
    }

    impl OutputPin for MockPin {
        type Error = Infallible;

        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    struct MockPwm {
        duty: u16,
        writes: usize,
    }

    impl PwmPin for MockPwm {
        type Duty = u16;

        fn disable(&mut self) {}

        fn enable(&mut self) {}

        fn get_duty(&self) -> u16 {
            self.duty
        }

        fn get_max_duty(&self) -> u16 {
            20_000
        }

        fn set_duty(&mut self, duty: u16) {
            self.duty = duty;
            self.writes += 1;
        }
    }

    fn tapper() -> Tapper<MockPin, MockPwm> {
        Tapper::new(MockPin::new(), Sg90::new(MockPwm { duty: 0, writes: 0 }))
    }

    fn feed(t: &mut Tapper<MockPin, MockPwm>, bytes: &[u8]) {
        for &b in bytes {
            t.apply(Command::from_byte(b));
        }
    }

    #[test]
    fn starts_released_with_pin_low_and_servo_up() {
        let t = tapper();
        assert!(!t.is_down());
        assert!(!t.active.high);
        assert_eq!(t.servo.free().duty, UP_DUTY);
    }

    #[test]
    fn single_d_presses_down() {
        let mut t = tapper();
        feed(&mut t, b"D");

        assert!(t.is_down());
        assert!(t.active.high);
        assert_eq!(t.servo.free().duty, DOWN_DUTY);
    }

    #[test]
    fn repeated_d_writes_hardware_once() {
        let mut t = tapper();
        feed(&mut t, b"DD");

        // One write from init, one from the first D. The second D is a no-op.
        assert!(t.is_down());
        assert_eq!(t.active.writes, 2);
        assert_eq!(t.servo.free().writes, 2);
    }

    #[test]
    fn non_d_byte_releases() {
        let mut t = tapper();
        feed(&mut t, b"DX");

        assert!(!t.is_down());
        assert!(!t.active.high);
        assert_eq!(t.servo.free().duty, UP_DUTY);
    }

    #[test]
    fn up_commands_while_released_are_no_ops() {
        let mut t = tapper();
        feed(&mut t, b"XYZ!");

        assert!(!t.is_down());
        // Only the init writes.
        assert_eq!(t.active.writes, 1);
        assert_eq!(t.servo.free().writes, 1);
    }

    #[test]
    fn state_follows_the_most_recent_byte() {
        let mut t = tapper();

        let cases: &[(&[u8], bool)] = &[
            (b"D", true),
            (b"DU", false),
            (b"UDUD", true),
            (b"DDDDx", false),
            (b"xxDxD", true),
        ];
        for &(bytes, down) in cases {
            let mut t2 = tapper();
            feed(&mut t2, bytes);
            assert_eq!(t2.is_down(), down, "sequence {:?}", bytes);
        }

        feed(&mut t, b"");
        assert!(!t.is_down());
    }
}
