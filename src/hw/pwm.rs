// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Servo PWM output via an STM32F7 timer in PWM mode.
//!
//! This module configures TIM4 CH1 registers for a 50 Hz output with a 1 MHz counter tick, so the
//! duty value is the pulse width in microseconds. The channel is exposed through the
//! `embedded-hal` [`PwmPin`] trait so device drivers stay portable.

use embedded_hal::PwmPin;
use stm32f7xx_hal::{
    gpio::{gpiod, Alternate},
    pac,
    rcc::Clocks,
};

/// PWM frame period in counter ticks (20 ms at the 1 MHz tick).
const PERIOD_US: u16 = 20_000;

/// Counter tick rate chosen so one tick is one microsecond.
const TICK_HZ: u32 = 1_000_000;

/// TIM4 CH1 servo PWM channel (PD12, AF2).
pub struct ServoPwm {
    tim: pac::TIM4,
    _pin: gpiod::PD12<Alternate<2>>,
}

impl ServoPwm {
    /// Configure TIM4 CH1 for 50 Hz PWM and start the counter with the output at 0% duty.
    ///
    /// The TIM4 bus clock must already be enabled in RCC. `clocks` is used to derive the APB1
    /// timer clock for the prescaler.
    pub fn tim4_ch1(tim4: pac::TIM4, pin: gpiod::PD12<Alternate<2>>, clocks: &Clocks) -> Self {
        let tim = tim4;

        // APB1 timer clock runs at 2x PCLK1 whenever the APB1 prescaler is not 1.
        let pclk1 = clocks.pclk1().raw();
        let timclk = if clocks.hclk().raw() == pclk1 {
            pclk1
        } else {
            pclk1 * 2
        };

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        // 1 MHz counter tick
        tim.psc.write(|w| w.psc().bits((timclk / TICK_HZ - 1) as u16));

        // Auto-reload: one 20 ms frame
        tim.arr.write(|w| unsafe { w.bits(PERIOD_US as u32 - 1) });

        // CH1: PWM mode 1, preloaded compare so duty updates land on frame boundaries
        tim.ccmr1_output()
            .modify(|_, w| w.oc1m().bits(0b110).oc1pe().set_bit());

        // Active-high output, channel enabled
        tim.ccer.modify(|_, w| w.cc1p().clear_bit().cc1e().set_bit());

        // Start with the output idle
        tim.ccr1().write(|w| unsafe { w.bits(0) });

        // Load PSC/ARR immediately
        tim.egr.write(|w| w.ug().set_bit());

        // Enable the counter with ARR preload
        tim.cr1.modify(|_, w| w.arpe().set_bit().cen().set_bit());

        Self { tim, _pin: pin }
    }

    /// Consume the wrapper and return the underlying timer peripheral.
    #[inline]
    pub fn free(self) -> pac::TIM4 {
        self.tim
    }
}

impl PwmPin for ServoPwm {
    type Duty = u16;

    fn disable(&mut self) {
        self.tim.ccer.modify(|_, w| w.cc1e().clear_bit());
    }

    fn enable(&mut self) {
        self.tim.ccer.modify(|_, w| w.cc1e().set_bit());
    }

    fn get_duty(&self) -> u16 {
        self.tim.ccr1().read().bits() as u16
    }

    fn get_max_duty(&self) -> u16 {
        PERIOD_US
    }

    fn set_duty(&mut self, duty: u16) {
        self.tim.ccr1().write(|w| unsafe { w.bits(duty as u32) });
    }
}
