//! The frame pump: load art for the title, then composite, highlight and
//! publish one frame per display refresh until quit.

use std::path::Path;

use faceplate_core::asset;
use faceplate_core::hotspot::BOARD_POLARITY;
use faceplate_core::layout::{CONSOLE_NATIVE_HEIGHT, CONSOLE_NATIVE_WIDTH};
use faceplate_core::publish::FramePublisher;
use faceplate_core::workspace::Workspace;
use sdl2::event::Event;
use sdl2::keyboard::Scancode;

use crate::art_path;
use crate::input::{self, KeypadLatch};
use crate::source::TestPatternSource;
use crate::video::Video;

pub fn run(rom_path: &Path, asset_dir: &Path, workspace_enabled: bool, scale: u32) {
    let sdl_context = sdl2::init().expect("Failed to initialize SDL2");
    let sdl_video = sdl_context.video().expect("Failed to init SDL video");

    // Title load: decode art and build the workspace before the first
    // frame. All blocking I/O happens here, outside the frame path.
    let default_art = art_path::default_candidate(asset_dir);
    let mut workspace = if workspace_enabled {
        let ws = Workspace::try_new();
        if ws.is_none() {
            tracing::warn!("workspace allocation failed, publishing plain console frames");
        }
        ws
    } else {
        None
    };
    if let Some(ws) = workspace.as_mut() {
        ws.set_base(asset::load_art(
            &art_path::base_candidate(asset_dir),
            Some(&default_art),
        ));
        ws.load_overlay(asset::load_art(
            &art_path::overlay_candidate(asset_dir, rom_path),
            Some(&default_art),
        ));
    }

    let mut publisher = FramePublisher::new(workspace_enabled);
    publisher.select_mode(workspace.is_some());
    let geometry = publisher.geometry(CONSOLE_NATIVE_WIDTH, CONSOLE_NATIVE_HEIGHT);
    tracing::info!(
        width = geometry.base_width,
        height = geometry.base_height,
        aspect = geometry.aspect_ratio,
        "publishing geometry"
    );

    let mut video = Video::new(
        &sdl_video,
        "Faceplate",
        geometry.base_width,
        geometry.base_height,
        scale,
    );
    let mut source = TestPatternSource::new().expect("Failed to allocate console frame");
    let mut latch = KeypadLatch::new();
    let mut event_pump = sdl_context.event_pump().expect("Failed to get event pump");

    'main: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'main,

                Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => break 'main,

                Event::KeyDown {
                    scancode: Some(sc),
                    repeat: false,
                    ..
                } => {
                    if let Some(code) = input::keypad_code(sc) {
                        latch.press(code);
                    }
                }

                Event::KeyUp {
                    scancode: Some(sc), ..
                } => {
                    if let Some(code) = input::keypad_code(sc) {
                        latch.release(code);
                    }
                }

                _ => {}
            }
        }

        // One compositing pass per frame: compose, highlight, publish.
        let console = source.next_frame();
        if let Some(ws) = workspace.as_mut() {
            ws.compose(Some(console));
            ws.highlight(latch.raw(), BOARD_POLARITY);
        }
        publisher.publish(workspace.as_ref(), console, &mut video);

        // Frame timing handled by VSync (present_vsync in Video::new).
    }
}
