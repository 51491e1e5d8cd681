use faceplate_core::asset::{self, Asset, Provenance};
use faceplate_core::hotspot::{KEY_5, LatchPolarity};
use faceplate_core::layout::{
    BACKGROUND, CONSOLE_REGION, PANEL_ANCHOR, PANEL_REGION, UTILITY_CONTROLS, WORKSPACE_HEIGHT,
    WORKSPACE_WIDTH,
};
use faceplate_core::pixel::{PixelBuffer, alpha, argb, blue, green, red};
use faceplate_core::workspace::Workspace;

const GRAY: u32 = argb(0xFF, 0x80, 0x80, 0x80);

fn solid_asset(w: u32, h: u32, color: u32) -> Asset {
    Asset {
        buffer: PixelBuffer::try_new(w, h, color).unwrap(),
        provenance: Provenance::Placeholder,
    }
}

fn gray_console() -> PixelBuffer {
    PixelBuffer::try_new(352, 224, GRAY).unwrap()
}

#[test]
fn compose_is_idempotent_for_static_inputs() {
    let console = gray_console();
    let mut ws = Workspace::try_new().unwrap();
    ws.set_base(solid_asset(446, 620, argb(0xFF, 10, 20, 30)));
    ws.load_overlay(Asset {
        buffer: asset::placeholder(370, 600),
        provenance: Provenance::Placeholder,
    });

    ws.compose(Some(&console));
    let first: Vec<u32> = ws.buffer().pixels().to_vec();
    ws.compose(Some(&console));
    assert_eq!(ws.buffer().pixels(), &first[..]);
}

#[test]
fn gray_console_and_absent_assets_scenario() {
    let console = gray_console();
    let mut ws = Workspace::try_new().unwrap();
    // Absent overlay art degrades to the placeholder pattern.
    ws.load_overlay(Asset {
        buffer: asset::placeholder(370, 600),
        provenance: Provenance::Placeholder,
    });

    ws.compose(Some(&console));
    let buf = ws.buffer();
    assert_eq!(buf.width(), WORKSPACE_WIDTH);
    assert_eq!(buf.height(), WORKSPACE_HEIGHT);

    // Console region: 2x-scaled uniform gray.
    assert_eq!(buf.get(0, 0), Some(GRAY));
    assert_eq!(buf.get(CONSOLE_REGION.right() - 1, 0), Some(GRAY));
    assert_eq!(
        buf.get(CONSOLE_REGION.right() - 1, CONSOLE_REGION.bottom() - 1),
        Some(GRAY)
    );

    // Panel region: placeholder quadrants (blue top-left, white bottom-right).
    assert_eq!(buf.get(PANEL_REGION.x, PANEL_REGION.y), Some(0xFF00_00FF));
    assert_eq!(
        buf.get(PANEL_REGION.right() - 1, PANEL_REGION.bottom() - 1),
        Some(0xFFFF_FFFF)
    );

    // Elsewhere: background fill (just right of the panel region).
    assert_eq!(buf.get(PANEL_REGION.right(), 0), Some(BACKGROUND));
    // Below the console region, clear of the utility controls.
    assert_eq!(buf.get(200, 500), Some(BACKGROUND));
}

#[test]
fn null_console_source_renders_background_region() {
    let mut ws = Workspace::try_new().unwrap();
    ws.compose(None);
    let buf = ws.buffer();
    assert_eq!(buf.get(0, 0), Some(BACKGROUND));
    assert_eq!(
        buf.get(CONSOLE_REGION.right() - 1, CONSOLE_REGION.bottom() - 1),
        Some(BACKGROUND)
    );
}

#[test]
fn undersized_console_source_pads_with_background() {
    // A 10x10 source cannot fill the 352x224 sample grid; out-of-range
    // samples must fall back to background, not wrap or crash.
    let small = PixelBuffer::try_new(10, 10, GRAY).unwrap();
    let mut ws = Workspace::try_new().unwrap();
    ws.compose(Some(&small));
    let buf = ws.buffer();
    assert_eq!(buf.get(0, 0), Some(GRAY));
    assert_eq!(buf.get(19, 19), Some(GRAY)); // samples (9, 9)
    assert_eq!(buf.get(20, 0), Some(BACKGROUND)); // samples (10, 0): out of range
    assert_eq!(buf.get(CONSOLE_REGION.right() - 1, 0), Some(BACKGROUND));
}

#[test]
fn transparent_overlay_contributes_nothing() {
    // Fully transparent 370x600 overlay under a fully opaque base: the
    // base occludes it everywhere it covers; panel fill shows elsewhere.
    let base_color = argb(0xFF, 40, 50, 60);
    let mut ws = Workspace::try_new().unwrap();
    ws.load_overlay(solid_asset(370, 600, argb(0x00, 0xEE, 0xEE, 0xEE)));
    ws.set_base(solid_asset(370, 600, base_color));
    ws.compose(None);

    let buf = ws.buffer();
    for (x, y) in [
        (PANEL_REGION.x, PANEL_REGION.y),
        (PANEL_REGION.x + 100, PANEL_REGION.y + 300),
        (PANEL_REGION.right() - 1, PANEL_REGION.bottom() - 1),
    ] {
        assert_eq!(buf.get(x, y), Some(base_color));
    }
}

#[test]
fn base_windows_reveal_overlay() {
    // Transparent cutout in the base lets the overlay show through.
    let overlay_color = argb(0xFF, 200, 0, 0);
    let mut ws = Workspace::try_new().unwrap();
    ws.load_overlay(solid_asset(370, 600, overlay_color));

    let mut base = PixelBuffer::try_new(370, 600, argb(0xFF, 40, 50, 60)).unwrap();
    base.fill_rect(100, 100, 50, 50, 0);
    ws.set_base(Asset {
        buffer: base,
        provenance: Provenance::Placeholder,
    });

    ws.compose(None);
    let buf = ws.buffer();
    assert_eq!(
        buf.get(PANEL_REGION.x + 120, PANEL_REGION.y + 120),
        Some(overlay_color)
    );
    assert_eq!(
        buf.get(PANEL_REGION.x + 10, PANEL_REGION.y + 10),
        Some(argb(0xFF, 40, 50, 60))
    );
}

#[test]
fn narrow_art_is_centered_in_panel() {
    let overlay_color = argb(0xFF, 0, 120, 0);
    let mut ws = Workspace::try_new().unwrap();
    ws.load_overlay(solid_asset(300, 600, overlay_color));
    ws.compose(None);

    let dx = PANEL_ANCHOR.offset_x(PANEL_REGION.w, 300);
    assert_eq!(dx, 35);
    let buf = ws.buffer();
    // Inside the centered art.
    assert_eq!(
        buf.get(PANEL_REGION.x + dx, PANEL_REGION.y),
        Some(overlay_color)
    );
    // Left gutter shows the panel fill.
    assert_eq!(buf.get(PANEL_REGION.x, PANEL_REGION.y), Some(0xFF1A_1A1A));
    assert_eq!(
        buf.get(PANEL_REGION.right() - 1, PANEL_REGION.y),
        Some(0xFF1A_1A1A)
    );
}

#[test]
fn utility_controls_are_drawn() {
    let mut ws = Workspace::try_new().unwrap();
    ws.compose(None);
    let buf = ws.buffer();
    for c in &UTILITY_CONTROLS {
        // Corner pixel carries the fill; labels sit mid-cell.
        assert_eq!(buf.get(c.rect.x, c.rect.y), Some(0xFFFF_D700));
    }
}

#[test]
fn highlight_shifts_only_the_matched_hotspot() {
    let console = gray_console();
    let mut ws = Workspace::try_new().unwrap();
    ws.load_overlay(solid_asset(370, 600, argb(0xFF, 128, 128, 128)));
    ws.compose(Some(&console));
    let before: Vec<u32> = ws.buffer().pixels().to_vec();

    // Raw active-low latch with key 5 held.
    ws.highlight(!KEY_5, LatchPolarity::ActiveLow);

    let rect = ws
        .hotspots()
        .iter()
        .find(|h| h.id == 5)
        .unwrap()
        .rect;
    let dx = PANEL_REGION.x + PANEL_ANCHOR.offset_x(PANEL_REGION.w, 370);
    let after = ws.buffer();

    let mut changed = 0usize;
    for y in 0..WORKSPACE_HEIGHT as i32 {
        for x in 0..WORKSPACE_WIDTH as i32 {
            let idx = y as usize * WORKSPACE_WIDTH as usize + x as usize;
            let inside = x >= dx + rect.x
                && x < dx + rect.right()
                && y >= PANEL_REGION.y + rect.y
                && y < PANEL_REGION.y + rect.bottom();
            if inside {
                assert_ne!(after.pixels()[idx], before[idx]);
                // Shifted toward the translucent green highlight.
                let p = after.pixels()[idx];
                assert_eq!(alpha(p), 0xFF);
                assert!(green(p) > green(before[idx]));
                assert!(red(p) < red(before[idx]));
                assert!(blue(p) < blue(before[idx]));
                changed += 1;
            } else {
                assert_eq!(after.pixels()[idx], before[idx]);
            }
        }
    }
    assert_eq!(changed, (rect.w * rect.h) as usize);
}

#[test]
fn unmatched_latch_leaves_frame_untouched() {
    let mut ws = Workspace::try_new().unwrap();
    ws.compose(None);
    let before: Vec<u32> = ws.buffer().pixels().to_vec();
    ws.highlight(0xFF, LatchPolarity::ActiveLow); // idle port
    assert_eq!(ws.buffer().pixels(), &before[..]);
}

#[test]
fn asset_slots_report_their_provenance() {
    let mut ws = Workspace::try_new().unwrap();
    assert!(ws.overlay().is_none());
    assert!(ws.base().is_none());

    ws.load_overlay(solid_asset(370, 600, GRAY));
    ws.set_base(solid_asset(446, 620, GRAY));
    assert_eq!(ws.overlay().unwrap().provenance, Provenance::Placeholder);
    assert_eq!(ws.base().unwrap().buffer.width(), 446);
}

#[test]
fn loading_overlay_rebuilds_hotspot_table() {
    let mut ws = Workspace::try_new().unwrap();
    let nominal = ws.hotspots().to_vec();
    ws.load_overlay(solid_asset(200, 300, argb(0xFF, 1, 2, 3)));
    assert_ne!(ws.hotspots(), &nominal[..]);
    for h in ws.hotspots() {
        assert!(h.rect.right() <= 200);
        assert!(h.rect.bottom() <= 300);
    }
}
