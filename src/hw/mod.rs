pub mod led;
pub mod pins;
pub mod pwm;
pub mod usart;

pub use led::Led;
pub use pins::BoardPins;
pub use pwm::ServoPwm;
pub use usart::Usart;
