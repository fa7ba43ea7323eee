// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Tapper Firmware
//!
//! This crate contains the firmware for the tapper — a servo-driven press mechanism commanded by
//! single bytes over a serial link — written in Rust, targeting an STM32F777 MCU.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | MCU-level wrappers around USART, timer PWM, GPIO pins |
//! | [`drivers`] | Device-level drivers (e.g., SG90 hobby servo) |
//! | [`control`] | High-level position control for the tapper mechanism |
//! | [`protocol`] | Command byte protocol for the serial link |
//!
//! ## Getting Started
//!
//! Build docs:
//!
//! ```bash
//! cargo doc --no-deps --open
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![no_std]

pub mod control;
pub mod drivers;
pub mod hw;
pub mod protocol;
