use faceplate_core::publish::VideoSink;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};

pub struct Video {
    canvas: Canvas<Window>,
    texture_creator: TextureCreator<WindowContext>,
}

impl Video {
    /// Create an SDL window and renderer for the given published geometry.
    pub fn new(
        sdl_video: &sdl2::VideoSubsystem,
        title: &str,
        width: u32,
        height: u32,
        scale: u32,
    ) -> Self {
        let window = sdl_video
            .window(title, width * scale, height * scale)
            .position_centered()
            .build()
            .expect("Failed to create window");

        let canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .expect("Failed to create canvas");

        let texture_creator = canvas.texture_creator();

        Self {
            canvas,
            texture_creator,
        }
    }
}

impl VideoSink for Video {
    /// Upload a packed ARGB8888 frame to a streaming texture and present
    /// it. Dimensions come from the publisher, so a mode change between
    /// titles needs no renegotiation here.
    fn present(&mut self, pixels: &[u32], width: u32, height: u32, pitch: usize) {
        let mut texture = self
            .texture_creator
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .expect("Failed to create texture");

        let mut bytes = Vec::with_capacity(pixels.len() * 4);
        for px in pixels {
            bytes.extend_from_slice(&px.to_le_bytes());
        }

        texture
            .update(None, &bytes, pitch)
            .expect("Failed to update texture");

        self.canvas.clear();
        self.canvas
            .copy(&texture, None, None)
            .expect("Failed to copy texture");
        self.canvas.present();
    }
}
