// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # High-Level Control
//!
//! Application-level control logic layered above `drivers`.
//!
//! ## Modules
//!
//! - [`tapper`] - Two-position press mechanism (servo + active signal).

pub mod tapper;

pub use tapper::Tapper;
