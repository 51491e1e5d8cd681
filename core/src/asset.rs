//! Art asset decoding with a fixed fallback chain.
//!
//! Overlay and base-device art come from disk as PNG or JPEG and are
//! normalized to ARGB8888 at native resolution; nothing here scales. A
//! load that fails at every step still produces usable art: a synthetic
//! quadrant test pattern, so missing files are visually obvious instead
//! of silently blank.

use std::path::{Path, PathBuf};

use crate::pixel::{PixelBuffer, argb};

/// Dimensions of the synthetic placeholder, matching the nominal overlay.
pub const PLACEHOLDER_WIDTH: u32 = 370;
pub const PLACEHOLDER_HEIGHT: u32 = 600;

// Quadrant colors: blue / green / red / white, clockwise from top-left.
const QUADRANT_TOP_LEFT: u32 = 0xFF00_00FF;
const QUADRANT_TOP_RIGHT: u32 = 0xFF00_FF00;
const QUADRANT_BOTTOM_LEFT: u32 = 0xFFFF_0000;
const QUADRANT_BOTTOM_RIGHT: u32 = 0xFFFF_FFFF;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Why a single decode attempt failed. Never fatal: the caller falls
/// through to the next candidate in the chain.
#[derive(Debug)]
pub enum DecodeError {
    /// The file could not be read or parsed as a supported image format.
    Image(image::ImageError),

    /// The decoded pixels did not fit in memory.
    Alloc,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Image(e) => write!(f, "image decode failed: {e}"),
            Self::Alloc => write!(f, "pixel buffer allocation failed"),
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<image::ImageError> for DecodeError {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}

// ---------------------------------------------------------------------------
// Asset
// ---------------------------------------------------------------------------

/// Where an asset's pixels came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provenance {
    /// The primary candidate path decoded successfully.
    Primary(PathBuf),
    /// The same stem with the alternate extension decoded successfully.
    AlternateExtension(PathBuf),
    /// The shared default asset decoded successfully.
    Default(PathBuf),
    /// Nothing decoded; the synthetic quadrant pattern is in use.
    Placeholder,
}

/// A decoded, normalized art layer plus its load provenance.
pub struct Asset {
    pub buffer: PixelBuffer,
    pub provenance: Provenance,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Decode one file into a normalized ARGB8888 buffer.
///
/// Inputs without an alpha channel (JPEG, RGB PNG) become fully opaque;
/// existing alpha is preserved for the binary alpha test downstream.
pub fn decode(path: &Path) -> Result<PixelBuffer, DecodeError> {
    let rgba = image::open(path)?.to_rgba8();
    let (w, h) = rgba.dimensions();
    let mut buf = PixelBuffer::try_new(w, h, 0).ok_or(DecodeError::Alloc)?;
    for (dst, px) in buf.pixels_mut().iter_mut().zip(rgba.pixels()) {
        *dst = argb(px[3], px[0], px[1], px[2]);
    }
    Ok(buf)
}

/// Load art through the fixed fallback chain:
///
/// 1. `primary` as given;
/// 2. `primary` with the alternate extension (png ↔ jpg);
/// 3. `shared_default`, if provided;
/// 4. the synthetic placeholder.
///
/// Never fails. Any previously held buffer for the slot is released when
/// the caller stores the returned asset in its place.
pub fn load_art(primary: &Path, shared_default: Option<&Path>) -> Asset {
    match decode(primary) {
        Ok(buffer) => {
            tracing::info!(path = %primary.display(), "loaded art");
            return Asset {
                buffer,
                provenance: Provenance::Primary(primary.to_path_buf()),
            };
        }
        Err(e) => tracing::debug!(path = %primary.display(), error = %e, "primary art unavailable"),
    }

    if let Some(alt) = alternate_extension(primary) {
        match decode(&alt) {
            Ok(buffer) => {
                tracing::info!(path = %alt.display(), "loaded art via alternate extension");
                return Asset {
                    buffer,
                    provenance: Provenance::AlternateExtension(alt),
                };
            }
            Err(e) => tracing::debug!(path = %alt.display(), error = %e, "alternate art unavailable"),
        }
    }

    if let Some(default_path) = shared_default {
        match decode(default_path) {
            Ok(buffer) => {
                tracing::info!(path = %default_path.display(), "loaded shared default art");
                return Asset {
                    buffer,
                    provenance: Provenance::Default(default_path.to_path_buf()),
                };
            }
            Err(e) => {
                tracing::debug!(path = %default_path.display(), error = %e, "default art unavailable")
            }
        }
    }

    tracing::info!(path = %primary.display(), "no art found, using placeholder pattern");
    Asset {
        buffer: placeholder(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT),
        provenance: Provenance::Placeholder,
    }
}

/// Swap a candidate's extension between the two supported formats.
fn alternate_extension(path: &Path) -> Option<PathBuf> {
    let ext = path.extension()?.to_str()?;
    let alt = match ext.to_ascii_lowercase().as_str() {
        "png" => "jpg",
        "jpg" | "jpeg" => "png",
        _ => return None,
    };
    Some(path.with_extension(alt))
}

/// Deterministic quadrant test pattern: blue / green / red / white.
///
/// If even this allocation fails, the result is a zero-area buffer; the
/// compositor then renders flat background for the slot.
pub fn placeholder(width: u32, height: u32) -> PixelBuffer {
    let Some(mut buf) = PixelBuffer::try_new(width, height, QUADRANT_BOTTOM_RIGHT) else {
        tracing::warn!(width, height, "placeholder allocation failed");
        return PixelBuffer::empty();
    };
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let color = match (y < height as i32 / 2, x < width as i32 / 2) {
                (true, true) => QUADRANT_TOP_LEFT,
                (true, false) => QUADRANT_TOP_RIGHT,
                (false, true) => QUADRANT_BOTTOM_LEFT,
                (false, false) => QUADRANT_BOTTOM_RIGHT,
            };
            buf.put(x, y, color);
        }
    }
    buf
}
