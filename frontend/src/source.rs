//! Synthetic console frame source.
//!
//! The real console core (CPU, video chip, audio) is an external
//! collaborator; this source feeds the compositor a deterministic
//! animated test frame at the native resolution so the whole publish
//! path can be exercised without it.

use faceplate_core::layout::{CONSOLE_NATIVE_HEIGHT, CONSOLE_NATIVE_WIDTH};
use faceplate_core::pixel::{PixelBuffer, argb};

pub struct TestPatternSource {
    frame: PixelBuffer,
    tick: u32,
}

impl TestPatternSource {
    /// Returns `None` when the native frame cannot be allocated.
    pub fn new() -> Option<Self> {
        let frame = PixelBuffer::try_new(CONSOLE_NATIVE_WIDTH, CONSOLE_NATIVE_HEIGHT, 0)?;
        Some(Self { frame, tick: 0 })
    }

    /// Render the next frame: vertical color bands with a scrolling
    /// scanline, purely a function of the tick counter.
    pub fn next_frame(&mut self) -> &PixelBuffer {
        let w = self.frame.width();
        let h = self.frame.height();
        let band = (w / 8).max(1);
        let sweep = (self.tick % h) as i32;

        for y in 0..h as i32 {
            for x in 0..w as i32 {
                let shade = (0x30 + (x as u32 / band) * 0x18) as u8;
                let px = if y == sweep {
                    argb(0xFF, 0xFF, 0xFF, 0xFF)
                } else {
                    argb(0xFF, shade, shade, shade)
                };
                self.frame.put(x, y, px);
            }
        }
        self.tick = self.tick.wrapping_add(1);
        &self.frame
    }
}
