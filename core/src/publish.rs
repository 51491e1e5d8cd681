//! Frame publication: chooses which buffer the host video sink sees.
//!
//! Normal operation publishes the workspace. If workspace mode is
//! disabled, or its buffer could not be allocated, the publisher
//! downgrades to the plain console frame and stays there until a later
//! title load re-evaluates availability. Either way a frame goes out
//! every pump tick; no asset or compositing failure stops publication.

use crate::layout;
use crate::pixel::PixelBuffer;
use crate::workspace::Workspace;

/// Which of the two fixed outputs is being published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Full workspace: console view plus overlay/base art.
    Workspace,
    /// Plain console frame, native resolution.
    Console,
}

/// Reported once per title load so downstream display scaling stays
/// correct for whichever mode and asset sizes are active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub base_width: u32,
    pub base_height: u32,
    pub max_width: u32,
    pub max_height: u32,
    pub aspect_ratio: f32,
}

/// Host video output. Receives the chosen buffer exactly once per frame.
pub trait VideoSink {
    /// `pitch` is the row stride in bytes (width × 4).
    fn present(&mut self, pixels: &[u32], width: u32, height: u32, pitch: usize);
}

pub struct FramePublisher {
    enabled: bool,
    mode: DisplayMode,
}

impl FramePublisher {
    /// `workspace_enabled` is the host's mode switch; the publisher starts
    /// in console mode until [`select_mode`](Self::select_mode) confirms a
    /// workspace buffer exists.
    pub fn new(workspace_enabled: bool) -> Self {
        Self {
            enabled: workspace_enabled,
            mode: DisplayMode::Console,
        }
    }

    /// Re-evaluate the active mode at a title-load boundary. Workspace
    /// mode requires both the host switch and a live workspace buffer;
    /// otherwise the publisher (re)enters console mode.
    pub fn select_mode(&mut self, workspace_available: bool) -> DisplayMode {
        let mode = if self.enabled && workspace_available {
            DisplayMode::Workspace
        } else {
            DisplayMode::Console
        };
        if mode != self.mode {
            tracing::info!(?mode, "display mode changed");
        }
        self.mode = mode;
        mode
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Geometry for the active mode. The aspect ratio is recomputed from
    /// the reported dimensions, never hard-coded.
    pub fn geometry(&self, console_width: u32, console_height: u32) -> Geometry {
        let (w, h) = match self.mode {
            DisplayMode::Workspace => (layout::WORKSPACE_WIDTH, layout::WORKSPACE_HEIGHT),
            DisplayMode::Console => (console_width, console_height),
        };
        Geometry {
            base_width: w,
            base_height: h,
            max_width: w,
            max_height: h,
            aspect_ratio: w as f32 / h as f32,
        }
    }

    /// Report the chosen buffer to the sink. Exactly one `present` call
    /// per invocation; a missing workspace falls back to the console
    /// frame whatever the mode says.
    pub fn publish(
        &self,
        workspace: Option<&Workspace>,
        console: &PixelBuffer,
        sink: &mut dyn VideoSink,
    ) {
        let buffer = match (self.mode, workspace) {
            (DisplayMode::Workspace, Some(ws)) => ws.buffer(),
            _ => console,
        };
        sink.present(
            buffer.pixels(),
            buffer.width(),
            buffer.height(),
            buffer.width() as usize * 4,
        );
    }
}
