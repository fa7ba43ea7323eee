#![no_main]
#![no_std]

use cortex_m_rt::entry;
use panic_halt as _;

use hal::{
    pac,
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use tapper::{
    control::Tapper,
    drivers::Sg90,
    hw::{BoardPins, Led, ServoPwm, Usart},
    protocol::Command,
};

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();

    // TIM4 bus clock for the servo PWM, before RCC is constrained
    dp.RCC.apb1enr.modify(|_, w| w.tim4en().set_bit());

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    // GPIO
    let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOD);

    // LED
    let mut led_green = Led::new(pins.led.green);

    // USART1 (DBG)
    let usart_cfg = Config {
        baud_rate: 115_200.bps(),
        ..Default::default()
    };
    let serial = Serial::new(dp.USART1, (pins.debug.tx, pins.debug.rx), &clocks, usart_cfg);
    let mut debug = Usart::new(serial);

    // USART3 (command link)
    let link_cfg = Config {
        baud_rate: 9_600.bps(),
        ..Default::default()
    };
    let serial = Serial::new(dp.USART3, (pins.link.tx, pins.link.rx), &clocks, link_cfg);
    let mut link = Usart::new(serial);

    // Servo on TIM4 CH1, tapper released
    let pwm = ServoPwm::tim4_ch1(dp.TIM4, pins.tapper.servo, &clocks);
    let mut tapper = Tapper::new(pins.tapper.active, Sg90::new(pwm));

    debug.println("tapper: boot, released");

    loop {
        match link.read_byte() {
            Some(byte) => {
                tapper.apply(Command::from_byte(byte));
                led_green.toggle();

                debug.write_str("cmd ");
                debug.print_hex_u8(byte);
                debug.println(if tapper.is_down() { " -> down" } else { " -> up" });
            }
            None => cortex_m::asm::nop(),
        }
    }
}
