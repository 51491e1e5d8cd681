pub mod asset;
pub mod hotspot;
pub mod layout;
pub mod osd;
pub mod pixel;
pub mod publish;
pub mod workspace;

pub mod prelude {
    pub use crate::asset::{Asset, Provenance};
    pub use crate::hotspot::{Hotspot, KeypadLayout, LatchPolarity};
    pub use crate::layout::Rect;
    pub use crate::pixel::PixelBuffer;
    pub use crate::publish::{DisplayMode, FramePublisher, Geometry, VideoSink};
    pub use crate::workspace::Workspace;
}
