// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the STM32F777 tapper board.

use stm32f7xx_hal::{
    gpio::{gpioa, gpiob, gpiod, Alternate, Output, PushPull},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOD);
/// ```
pub struct BoardPins {
    pub led: LedPins,
    pub debug: DebugUsartPins,
    pub link: LinkUsartPins,
    pub tapper: TapperPins,
}

pub struct LedPins {
    pub green: gpiob::PB0<Output<PushPull>>,
}

/// USART1 debug terminal
pub struct DebugUsartPins {
    pub tx: gpioa::PA9<Alternate<7>>,
    pub rx: gpioa::PA10<Alternate<7>>,
}

/// USART3 command link (9600 baud, RX carries the command bytes)
pub struct LinkUsartPins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

/// Tapper mechanism pins
pub struct TapperPins {
    pub servo: gpiod::PD12<Alternate<2>>, // TIM4_CH1 (PWM)
    pub active: gpiod::PD13<Output<PushPull>>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(gpioa: pac::GPIOA, gpiob: pac::GPIOB, gpiod: pac::GPIOD) -> Self {
        let gpioa = gpioa.split();
        let gpiob = gpiob.split();
        let gpiod = gpiod.split();

        Self {
            led: LedPins {
                green: gpiob.pb0.into_push_pull_output(),
            },

            debug: DebugUsartPins {
                tx: gpioa.pa9.into_alternate::<7>(),
                rx: gpioa.pa10.into_alternate::<7>(),
            },

            link: LinkUsartPins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },

            tapper: TapperPins {
                servo: gpiod.pd12.into_alternate::<2>(),
                active: gpiod.pd13.into_push_pull_output(),
            },
        }
    }
}
