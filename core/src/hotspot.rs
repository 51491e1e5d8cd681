//! Keypad hotspot table: maps overlay regions to hardware input codes.
//!
//! The physical keypad is a 4×3 grid (1 2 3 / 4 5 6 / 7 8 9 / C 0 E).
//! Each key asserts a fixed bit pattern on the input port; the scan-matrix
//! wiring means some patterns share bits (pressing 5 asserts a superset of
//! the bits that 2 asserts), which is why selection works by the most
//! specific contained code rather than a plain first-match scan.

use crate::layout::Rect;

// ---------------------------------------------------------------------------
// Hardware input codes
// ---------------------------------------------------------------------------

pub const KEY_1: u8 = 0x02;
pub const KEY_2: u8 = 0x03;
pub const KEY_3: u8 = 0x04;
pub const KEY_4: u8 = 0x13;
pub const KEY_5: u8 = 0x23;
pub const KEY_6: u8 = 0x14;
pub const KEY_7: u8 = 0x84;
pub const KEY_8: u8 = 0x44;
pub const KEY_9: u8 = 0x24;
pub const KEY_CLEAR: u8 = 0x88;
pub const KEY_0: u8 = 0x48;
pub const KEY_ENTER: u8 = 0x28;

/// Codes in physical layout order, row-major top to bottom.
pub const KEYPAD_CODES: [u8; HOTSPOT_COUNT] = [
    KEY_1, KEY_2, KEY_3, KEY_4, KEY_5, KEY_6, KEY_7, KEY_8, KEY_9, KEY_CLEAR, KEY_0, KEY_ENTER,
];

pub const KEYPAD_ROWS: u32 = 4;
pub const KEYPAD_COLS: u32 = 3;
pub const HOTSPOT_COUNT: usize = (KEYPAD_ROWS * KEYPAD_COLS) as usize;

// ---------------------------------------------------------------------------
// Latch polarity
// ---------------------------------------------------------------------------

/// Whether held keys read as cleared bits (active-low) or set bits on the
/// raw input port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatchPolarity {
    ActiveLow,
    ActiveHigh,
}

/// The board exposes the keypad port active-low.
pub const BOARD_POLARITY: LatchPolarity = LatchPolarity::ActiveLow;

impl LatchPolarity {
    /// Normalize a raw port value so set bits mean "held".
    pub const fn normalize(self, raw: u8) -> u8 {
        match self {
            LatchPolarity::ActiveLow => !raw,
            LatchPolarity::ActiveHigh => raw,
        }
    }
}

// ---------------------------------------------------------------------------
// Hotspots
// ---------------------------------------------------------------------------

/// One keypad cell: a rectangle in overlay-local coordinates, an id in
/// 1..=12 assigned row-major, and the input code the cell represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotspot {
    pub rect: Rect,
    pub id: u8,
    pub code: u8,
}

/// Grid constants for the hotspot table. Cell geometry shrinks
/// proportionally when an overlay is too small to hold the nominal grid,
/// so every rectangle stays inside the overlay.
#[derive(Debug, Clone, Copy)]
pub struct KeypadLayout {
    pub cell_width: u32,
    pub cell_height: u32,
    pub gap_x: u32,
    pub gap_y: u32,
    pub top_margin: u32,
}

impl Default for KeypadLayout {
    fn default() -> Self {
        Self {
            cell_width: 70,
            cell_height: 70,
            gap_x: 28,
            gap_y: 29,
            top_margin: 30,
        }
    }
}

/// Build the 12-entry hotspot table for an overlay of the given dimensions.
///
/// Pure function of (dimensions, layout constants): row-major order,
/// id = row×cols + col + 1, horizontally centered, fixed top margin.
/// Must be re-run whenever a new overlay asset loads.
pub fn build_table(
    overlay_width: u32,
    overlay_height: u32,
    layout: &KeypadLayout,
) -> [Hotspot; HOTSPOT_COUNT] {
    let (cell_w, gap_x) = fit_axis(layout.cell_width, layout.gap_x, KEYPAD_COLS, overlay_width);
    let grid_w = KEYPAD_COLS * cell_w + (KEYPAD_COLS - 1) * gap_x;
    let origin_x = ((overlay_width - grid_w) / 2) as i32;

    let v_span = overlay_height.saturating_sub(layout.top_margin);
    let (cell_h, gap_y) = fit_axis(layout.cell_height, layout.gap_y, KEYPAD_ROWS, v_span);
    let grid_h = KEYPAD_ROWS * cell_h + (KEYPAD_ROWS - 1) * gap_y;
    let origin_y = layout.top_margin.min(overlay_height.saturating_sub(grid_h)) as i32;

    let mut table = [Hotspot {
        rect: Rect::new(0, 0, 0, 0),
        id: 0,
        code: 0,
    }; HOTSPOT_COUNT];

    for row in 0..KEYPAD_ROWS {
        for col in 0..KEYPAD_COLS {
            let idx = (row * KEYPAD_COLS + col) as usize;
            table[idx] = Hotspot {
                rect: Rect::new(
                    origin_x + (col * (cell_w + gap_x)) as i32,
                    origin_y + (row * (cell_h + gap_y)) as i32,
                    cell_w,
                    cell_h,
                ),
                id: idx as u8 + 1,
                code: KEYPAD_CODES[idx],
            };
        }
    }
    table
}

/// Shrink `cell` and `gap` proportionally until `count` cells fit in
/// `span`. Integer floors only ever shrink, so the fitted grid never
/// exceeds the span.
fn fit_axis(cell: u32, gap: u32, count: u32, span: u32) -> (u32, u32) {
    let needed = count * cell + (count - 1) * gap;
    if needed <= span || needed == 0 {
        return (cell, gap);
    }
    (cell * span / needed, gap * span / needed)
}

/// Select the hotspot for a normalized latch value: the hotspot whose code
/// is fully contained in `pressed` (`pressed & code == code`), preferring
/// the most specific code; ties break by id order, never by recency.
///
/// At most one hotspot matches per frame; the hardware registers at most
/// one simultaneous key in the code ranges modeled here.
pub fn active_hotspot(table: &[Hotspot], pressed: u8) -> Option<&Hotspot> {
    let mut best: Option<&Hotspot> = None;
    for h in table {
        if h.code != 0 && pressed & h.code == h.code {
            match best {
                Some(b) if b.code.count_ones() >= h.code.count_ones() => {}
                _ => best = Some(h),
            }
        }
    }
    best
}
