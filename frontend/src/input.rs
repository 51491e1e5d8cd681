//! Keyboard → keypad input latch.
//!
//! Stands in for the emulated controller port: mapped keys assert their
//! hardware code on an active-low byte, exactly as the console's
//! memory-mapped input register reads. The hardware registers at most one
//! keypad key at a time, so the latch tracks a single held key.

use faceplate_core::hotspot::{
    KEY_0, KEY_1, KEY_2, KEY_3, KEY_4, KEY_5, KEY_6, KEY_7, KEY_8, KEY_9, KEY_CLEAR, KEY_ENTER,
};
use sdl2::keyboard::Scancode;

/// Map a scancode to a keypad code. Digits map to their keys; the
/// brackets map to Clear and Enter.
pub fn keypad_code(scancode: Scancode) -> Option<u8> {
    match scancode {
        Scancode::Num1 => Some(KEY_1),
        Scancode::Num2 => Some(KEY_2),
        Scancode::Num3 => Some(KEY_3),
        Scancode::Num4 => Some(KEY_4),
        Scancode::Num5 => Some(KEY_5),
        Scancode::Num6 => Some(KEY_6),
        Scancode::Num7 => Some(KEY_7),
        Scancode::Num8 => Some(KEY_8),
        Scancode::Num9 => Some(KEY_9),
        Scancode::Num0 => Some(KEY_0),
        Scancode::LeftBracket => Some(KEY_CLEAR),
        Scancode::RightBracket => Some(KEY_ENTER),
        _ => None,
    }
}

/// Active-low input latch: idle reads 0xFF, a held key clears its code
/// bits.
pub struct KeypadLatch {
    held: Option<u8>,
}

impl KeypadLatch {
    pub fn new() -> Self {
        Self { held: None }
    }

    pub fn press(&mut self, code: u8) {
        self.held = Some(code);
    }

    /// Release only clears the latch when the released key is the one
    /// currently held, so overlapping press/release pairs don't drop a
    /// still-held key.
    pub fn release(&mut self, code: u8) {
        if self.held == Some(code) {
            self.held = None;
        }
    }

    /// The raw port value, active-low.
    pub fn raw(&self) -> u8 {
        match self.held {
            Some(code) => !code,
            None => 0xFF,
        }
    }
}
