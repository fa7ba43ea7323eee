// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains device-specific drivers that sit above the raw `hw/` layer and below the
//! application logic.
//!
//! ## Existing drivers
//!
//! - [`sg90`] – SG90-class hobby servo on a 50 Hz PWM channel

pub mod sg90;

pub use sg90::Sg90;
