// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Driver for SG90-class hobby servos on a 50 Hz PWM channel.
//!
//! The servo position is set by the pulse width inside each 20 ms frame. The default calibration
//! maps 0°–180° onto 544 µs–2400 µs, the pulse range the tapper mechanism is trimmed against.
//!
//! Wiring:
//! - Orange: PWM signal
//! - Red:    5V supply
//! - Brown:  Ground

use embedded_hal::PwmPin;

/// Pulse width commanded at 0°.
pub const DEFAULT_MIN_PULSE_US: u16 = 544;

/// Pulse width commanded at 180°.
pub const DEFAULT_MAX_PULSE_US: u16 = 2400;

/// PWM frame period for standard hobby servos.
const FRAME_US: u32 = 20_000;

/// Hobby servo on a single PWM channel.
///
/// Generic over any `PwmPin` with `u16` duty so it runs against the TIM4 channel on hardware and
/// against a mock in host tests.
pub struct Sg90<PWM> {
    pwm: PWM,
    min_pulse_us: u16,
    max_pulse_us: u16,
}

impl<PWM> Sg90<PWM>
where
    PWM: PwmPin<Duty = u16>,
{
    /// Construct a servo with the default 544–2400 µs pulse calibration.
    pub fn new(pwm: PWM) -> Self {
        Self::with_calibration(pwm, DEFAULT_MIN_PULSE_US, DEFAULT_MAX_PULSE_US)
    }

    /// Construct a servo with an explicit pulse range for 0°–180°.
    pub fn with_calibration(mut pwm: PWM, min_pulse_us: u16, max_pulse_us: u16) -> Self {
        pwm.enable();
        Self {
            pwm,
            min_pulse_us,
            max_pulse_us,
        }
    }

    /// Command the servo to an angle in degrees. Angles outside 0°–180° are clamped.
    pub fn set_angle(&mut self, deg: f32) {
        let deg = deg.clamp(0.0, 180.0);

        let range = (self.max_pulse_us - self.min_pulse_us) as f32;
        let pulse_us = self.min_pulse_us as f32 + (deg / 180.0) * range;

        self.pwm.set_duty(self.duty_for_pulse(pulse_us as u16));
    }

    /// Scale a pulse width in microseconds into the channel's duty range.
    fn duty_for_pulse(&self, pulse_us: u16) -> u16 {
        let max_duty = self.pwm.get_max_duty() as u32;
        (pulse_us as u32 * max_duty / FRAME_US) as u16
    }

    /// Stop driving the signal line. The servo will stop holding position.
    pub fn release(&mut self) {
        self.pwm.disable();
    }

    /// Tear down the driver and return the PWM channel.
    pub fn free(self) -> PWM {
        self.pwm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPwm {
        duty: u16,
        enabled: bool,
    }

    impl PwmPin for MockPwm {
        type Duty = u16;

        fn disable(&mut self) {
            self.enabled = false;
        }

        fn enable(&mut self) {
            self.enabled = true;
        }

        fn get_duty(&self) -> u16 {
            self.duty
        }

        // Same resolution as the TIM4 channel: one duty count per microsecond.
        fn get_max_duty(&self) -> u16 {
            20_000
        }

        fn set_duty(&mut self, duty: u16) {
            self.duty = duty;
        }
    }

    fn servo() -> Sg90<MockPwm> {
        Sg90::new(MockPwm {
            duty: 0,
            enabled: false,
        })
    }

    #[test]
    fn construction_enables_the_channel() {
        let s = servo();
        assert!(s.pwm.enabled);
    }

    #[test]
    fn endpoint_angles_hit_the_calibration_pulses() {
        let mut s = servo();

        s.set_angle(0.0);
        assert_eq!(s.pwm.duty, DEFAULT_MIN_PULSE_US);

        s.set_angle(180.0);
        assert_eq!(s.pwm.duty, DEFAULT_MAX_PULSE_US);
    }

    #[test]
    fn tapper_calibration_angles() {
        let mut s = servo();

        // 544 + (15/180) * 1856
        s.set_angle(15.0);
        assert_eq!(s.pwm.duty, 698);

        // 544 + (32/180) * 1856
        s.set_angle(32.0);
        assert_eq!(s.pwm.duty, 873);
    }

    #[test]
    fn out_of_range_angles_clamp() {
        let mut s = servo();

        s.set_angle(-20.0);
        assert_eq!(s.pwm.duty, DEFAULT_MIN_PULSE_US);

        s.set_angle(300.0);
        assert_eq!(s.pwm.duty, DEFAULT_MAX_PULSE_US);
    }

    #[test]
    fn release_disables_the_channel() {
        let mut s = servo();
        s.release();
        assert!(!s.pwm.enabled);
    }
}
