//! Workspace composition: layered back-to-front draw of the published
//! frame, plus the active-hotspot highlight pass.
//!
//! The workspace buffer is fully redrawn every frame from its layer
//! sources. Nothing carries over between frames, which eliminates
//! dirty-region bookkeeping and stale-highlight bugs at the cost of a
//! full redraw; the layer sources themselves are immutable between title
//! loads.

use crate::asset::Asset;
use crate::hotspot::{self, HOTSPOT_COUNT, Hotspot, KeypadLayout, LatchPolarity};
use crate::layout::{
    self, CONSOLE_REGION, CONSOLE_SCALE, PANEL_ANCHOR, PANEL_REGION, UTILITY_CONTROLS,
};
use crate::osd;
use crate::pixel::{PixelBuffer, alpha, blend_over};

/// Owns the workspace buffer and its layer sources.
///
/// Layer assets are replaced wholesale at title-load boundaries (the old
/// buffer is dropped when the slot is overwritten) and never mutated in
/// place, so a reload cannot interleave with an in-flight composite on
/// the single frame-pump thread.
pub struct Workspace {
    buffer: PixelBuffer,
    overlay: Option<Asset>,
    base: Option<Asset>,
    hotspots: [Hotspot; HOTSPOT_COUNT],
    keypad_layout: KeypadLayout,
}

impl Workspace {
    /// Allocate the workspace buffer. Returns `None` when the allocation
    /// fails; the publisher then stays in plain-console mode until a later
    /// title load retries.
    pub fn try_new() -> Option<Self> {
        let buffer = PixelBuffer::try_new(
            layout::WORKSPACE_WIDTH,
            layout::WORKSPACE_HEIGHT,
            layout::BACKGROUND,
        )?;
        let keypad_layout = KeypadLayout::default();
        Some(Self {
            buffer,
            overlay: None,
            base: None,
            hotspots: hotspot::build_table(PANEL_REGION.w, PANEL_REGION.h, &keypad_layout),
            keypad_layout,
        })
    }

    /// Install the static base-device art. Loaded once at startup; the
    /// previous buffer (if any) is dropped on replace.
    pub fn set_base(&mut self, asset: Asset) {
        self.base = Some(asset);
    }

    /// Install a new per-title overlay and rebuild the hotspot table for
    /// its dimensions. The previous overlay buffer is dropped on replace.
    pub fn load_overlay(&mut self, asset: Asset) {
        self.hotspots =
            hotspot::build_table(asset.buffer.width(), asset.buffer.height(), &self.keypad_layout);
        self.overlay = Some(asset);
    }

    pub fn hotspots(&self) -> &[Hotspot] {
        &self.hotspots
    }

    pub fn overlay(&self) -> Option<&Asset> {
        self.overlay.as_ref()
    }

    pub fn base(&self) -> Option<&Asset> {
        self.base.as_ref()
    }

    /// The composed frame.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Rebuild the workspace frame back-to-front: background fill, the
    /// console frame upscaled into its region, overlay art, base-device
    /// art, utility controls.
    ///
    /// Overlay and base placement uses the binary alpha test: a source
    /// pixel either overwrites the destination (alpha nonzero) or is
    /// skipped entirely. Partial alpha is not blended at this tier:
    /// the art works as masked cutouts, not soft edges.
    pub fn compose(&mut self, console: Option<&PixelBuffer>) {
        self.buffer.fill(layout::BACKGROUND);
        self.draw_console(console);
        self.draw_panel();
        self.draw_utility_controls();
    }

    /// Nearest-neighbor integer upscale of the console frame into its
    /// region. Destination (x, y) samples source (x/scale, y/scale);
    /// source coordinates outside the frame fall back to background, so a
    /// geometry mismatch degrades instead of smearing or crashing. A null
    /// console source leaves the region at background fill.
    fn draw_console(&mut self, console: Option<&PixelBuffer>) {
        let Some(frame) = console else {
            return;
        };
        for y in 0..CONSOLE_REGION.h as i32 {
            let src_y = y / CONSOLE_SCALE as i32;
            for x in 0..CONSOLE_REGION.w as i32 {
                let src_x = x / CONSOLE_SCALE as i32;
                let px = frame.get(src_x, src_y).unwrap_or(layout::BACKGROUND);
                self.buffer
                    .put(CONSOLE_REGION.x + x, CONSOLE_REGION.y + y, px);
            }
        }
    }

    /// Panel fill, then overlay under base. Single pass over the panel
    /// region: transparent windows in the base art let the overlay show
    /// through, transparent overlay pixels fall back to the panel fill.
    fn draw_panel(&mut self) {
        let overlay_dx = self.overlay_offset_x();
        let base_dx = self
            .base
            .as_ref()
            .map(|a| PANEL_ANCHOR.offset_x(PANEL_REGION.w, a.buffer.width()))
            .unwrap_or(0);

        for y in 0..PANEL_REGION.h as i32 {
            for x in 0..PANEL_REGION.w as i32 {
                let mut px = layout::PANEL_BACKGROUND;

                if let Some(art) = &self.overlay
                    && let Some(p) = art.buffer.get(x - overlay_dx, y)
                    && alpha(p) != 0
                {
                    px = p;
                }

                if let Some(art) = &self.base
                    && let Some(p) = art.buffer.get(x - base_dx, y)
                    && alpha(p) != 0
                {
                    px = p;
                }

                self.buffer.put(PANEL_REGION.x + x, PANEL_REGION.y + y, px);
            }
        }
    }

    fn draw_utility_controls(&mut self) {
        for control in &UTILITY_CONTROLS {
            let r = control.rect;
            self.buffer
                .fill_rect(r.x, r.y, r.w, r.h, layout::UTILITY_FILL);

            let tw = osd::text_width(control.label);
            let tx = r.x + (r.w as i32 - tw as i32) / 2;
            let ty = r.y + (r.h as i32 - osd::GLYPH_HEIGHT as i32) / 2;
            osd::draw_text(&mut self.buffer, tx, ty, control.label, layout::UTILITY_LABEL);
        }
    }

    /// Blend the highlight over the hotspot matching the current latch,
    /// if any. This is the only true alpha blend in the pipeline; the
    /// destination stays fully opaque.
    pub fn highlight(&mut self, raw_latch: u8, polarity: LatchPolarity) {
        let pressed = polarity.normalize(raw_latch);
        let Some(h) = hotspot::active_hotspot(&self.hotspots, pressed) else {
            return;
        };

        // Hotspot rects are overlay-local; translate into workspace
        // coordinates through the overlay's panel placement.
        let dx = PANEL_REGION.x + self.overlay_offset_x();
        let dy = PANEL_REGION.y;
        let rect = h.rect;

        for y in 0..rect.h as i32 {
            for x in 0..rect.w as i32 {
                let wx = dx + rect.x + x;
                let wy = dy + rect.y + y;
                // Clip to the panel: an overlay wider than its region must
                // not spill highlight into the console area.
                if PANEL_REGION.contains(wx, wy)
                    && let Some(dst) = self.buffer.get(wx, wy)
                {
                    self.buffer.put(wx, wy, blend_over(layout::HIGHLIGHT, dst));
                }
            }
        }
    }

    fn overlay_offset_x(&self) -> i32 {
        self.overlay
            .as_ref()
            .map(|a| PANEL_ANCHOR.offset_x(PANEL_REGION.w, a.buffer.width()))
            .unwrap_or(0)
    }
}
