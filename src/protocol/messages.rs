// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Command byte protocol used to drive the tapper over the serial link.
//!
//! One byte per command, no framing, no checksum, and nothing is ever sent back. The link is
//! deliberately fail-open: any byte that is not the down command releases the tapper, so line
//! noise can never leave it pressed.

/// Command byte that presses the tapper down.
pub const CMD_DOWN: u8 = b'D';

/// Target position selected by a command byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Down,
    Up,
}

impl Command {
    /// Decode a single received byte. `'D'` presses down; every other byte value releases.
    #[inline]
    pub fn from_byte(byte: u8) -> Self {
        if byte == CMD_DOWN {
            Command::Down
        } else {
            Command::Up
        }
    }
}
