//! Workspace geometry: fixed regions, colors, and the panel anchor policy.
//!
//! The published workspace is a single 1100×968 frame:
//!
//! | Region            | Position    | Size     | Content                       |
//! |-------------------|-------------|----------|-------------------------------|
//! | Console           | (0, 0)      | 704×448  | Native frame, 2× upscaled     |
//! | Panel             | (704, 0)    | 370×600  | Overlay art under base art    |
//! | Utility controls  | (10, 468…)  | 60×50 ×6 | Labeled host-command buttons  |
//!
//! Regions never overlap and the total dimensions are constant for the
//! process lifetime.

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// Axis-aligned rectangle. Position is signed so anchor offsets can push
/// art partially out of a region; all drawing remains bounds-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// One past the rightmost column.
    pub const fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    /// One past the bottom row.
    pub const fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// True when the two rectangles share at least one pixel.
    pub const fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
            && self.w > 0
            && self.h > 0
            && other.w > 0
            && other.h > 0
    }
}

// ---------------------------------------------------------------------------
// Workspace regions
// ---------------------------------------------------------------------------

pub const WORKSPACE_WIDTH: u32 = 1100;
pub const WORKSPACE_HEIGHT: u32 = 968;

/// Nominal native console resolution, used for plain-mode geometry.
pub const CONSOLE_NATIVE_WIDTH: u32 = 352;
pub const CONSOLE_NATIVE_HEIGHT: u32 = 224;

/// Integer nearest-neighbor upscale factor for the console frame.
pub const CONSOLE_SCALE: u32 = 2;

/// Where the upscaled console frame lands in the workspace.
pub const CONSOLE_REGION: Rect = Rect::new(0, 0, 704, 448);

/// Where overlay and base-device art land in the workspace.
pub const PANEL_REGION: Rect = Rect::new(704, 0, 370, 600);

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

/// Workspace background fill.
pub const BACKGROUND: u32 = 0xFF00_0000;

/// Panel-region fill shown behind and around the art.
pub const PANEL_BACKGROUND: u32 = 0xFF1A_1A1A;

/// Translucent green blended over the active hotspot.
pub const HIGHLIGHT: u32 = 0xAA00_FF00;

/// Utility control fill and label colors.
pub const UTILITY_FILL: u32 = 0xFFFF_D700;
pub const UTILITY_LABEL: u32 = 0xFF00_0000;

// ---------------------------------------------------------------------------
// Panel anchor policy
// ---------------------------------------------------------------------------

/// How art is anchored horizontally inside the panel region. Art is always
/// top-aligned vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAnchor {
    /// Centered in the region.
    CenterTop,
    /// Flush against the region's right edge.
    RightTop,
}

impl PanelAnchor {
    /// Horizontal offset of the art's left edge from the region's left
    /// edge. Negative when the art is wider than the region (the excess is
    /// clipped symmetrically or on the left, respectively).
    pub const fn offset_x(self, region_w: u32, art_w: u32) -> i32 {
        match self {
            PanelAnchor::CenterTop => (region_w as i32 - art_w as i32) / 2,
            PanelAnchor::RightTop => region_w as i32 - art_w as i32,
        }
    }
}

/// The one anchor policy used for both overlay and base-device art.
pub const PANEL_ANCHOR: PanelAnchor = PanelAnchor::CenterTop;

// ---------------------------------------------------------------------------
// Utility controls
// ---------------------------------------------------------------------------

/// Host-side command a utility control maps to. The compositor only draws
/// the controls; acting on the commands is the host's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtilityCommand {
    Menu,
    Pause,
    Rewind,
    Save,
    Load,
    SwapOverlay,
}

/// A labeled control rectangle below the console region.
pub struct UtilityControl {
    pub rect: Rect,
    pub label: &'static str,
    pub command: UtilityCommand,
}

pub const UTILITY_CONTROL_WIDTH: u32 = 60;
pub const UTILITY_CONTROL_HEIGHT: u32 = 50;

pub const UTILITY_CONTROLS: [UtilityControl; 6] = [
    UtilityControl {
        rect: Rect::new(10, 468, UTILITY_CONTROL_WIDTH, UTILITY_CONTROL_HEIGHT),
        label: "MENU",
        command: UtilityCommand::Menu,
    },
    UtilityControl {
        rect: Rect::new(10, 528, UTILITY_CONTROL_WIDTH, UTILITY_CONTROL_HEIGHT),
        label: "PAUSE",
        command: UtilityCommand::Pause,
    },
    UtilityControl {
        rect: Rect::new(10, 588, UTILITY_CONTROL_WIDTH, UTILITY_CONTROL_HEIGHT),
        label: "REWIND",
        command: UtilityCommand::Rewind,
    },
    UtilityControl {
        rect: Rect::new(10, 648, UTILITY_CONTROL_WIDTH, UTILITY_CONTROL_HEIGHT),
        label: "SAVE",
        command: UtilityCommand::Save,
    },
    UtilityControl {
        rect: Rect::new(10, 708, UTILITY_CONTROL_WIDTH, UTILITY_CONTROL_HEIGHT),
        label: "LOAD",
        command: UtilityCommand::Load,
    },
    UtilityControl {
        rect: Rect::new(10, 768, UTILITY_CONTROL_WIDTH, UTILITY_CONTROL_HEIGHT),
        label: "<>",
        command: UtilityCommand::SwapOverlay,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_do_not_overlap() {
        assert!(!CONSOLE_REGION.intersects(&PANEL_REGION));
        for c in &UTILITY_CONTROLS {
            assert!(!c.rect.intersects(&CONSOLE_REGION));
            assert!(!c.rect.intersects(&PANEL_REGION));
        }
    }

    #[test]
    fn regions_fit_inside_workspace() {
        for r in [CONSOLE_REGION, PANEL_REGION] {
            assert!(r.x >= 0 && r.y >= 0);
            assert!(r.right() <= WORKSPACE_WIDTH as i32);
            assert!(r.bottom() <= WORKSPACE_HEIGHT as i32);
        }
        for c in &UTILITY_CONTROLS {
            assert!(c.rect.right() <= WORKSPACE_WIDTH as i32);
            assert!(c.rect.bottom() <= WORKSPACE_HEIGHT as i32);
        }
    }

    #[test]
    fn utility_controls_carry_distinct_commands() {
        for (i, a) in UTILITY_CONTROLS.iter().enumerate() {
            for b in &UTILITY_CONTROLS[i + 1..] {
                assert_ne!(a.command, b.command);
            }
        }
        assert_eq!(UTILITY_CONTROLS[0].command, UtilityCommand::Menu);
        assert_eq!(UTILITY_CONTROLS[5].command, UtilityCommand::SwapOverlay);
    }

    #[test]
    fn console_region_is_scaled_native() {
        assert_eq!(CONSOLE_REGION.w, CONSOLE_NATIVE_WIDTH * CONSOLE_SCALE);
        assert_eq!(CONSOLE_REGION.h, CONSOLE_NATIVE_HEIGHT * CONSOLE_SCALE);
    }

    #[test]
    fn center_anchor_splits_margin() {
        assert_eq!(PanelAnchor::CenterTop.offset_x(370, 370), 0);
        assert_eq!(PanelAnchor::CenterTop.offset_x(370, 300), 35);
        // Wider art hangs off both sides.
        assert_eq!(PanelAnchor::CenterTop.offset_x(370, 400), -15);
        assert_eq!(PanelAnchor::RightTop.offset_x(370, 300), 70);
    }
}
