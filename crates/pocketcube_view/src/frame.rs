use image::RgbaImage;
use pocketcube_core::{EngineError, EngineResult, FRAME_BYTE_COUNT, FRAME_HEIGHT, FRAME_WIDTH};

/// Latest composited frame of the rendered cube.
///
/// Each tick replaces the whole image with the engine's frame buffer;
/// nothing accumulates between frames. Until the first tick, and again after
/// a fatal engine error, the frame is the blank all-white image.
#[derive(Debug)]
pub struct FrameCompositor {
    image: RgbaImage,
}

impl FrameCompositor {
    /// Constructs a compositor holding the blank frame.
    pub fn new() -> Self {
        Self {
            image: blank_frame(),
        }
    }

    /// Returns the latest frame, always exactly
    /// [`FRAME_WIDTH`] × [`FRAME_HEIGHT`] pixels.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Overwrites the whole frame with `bytes`, which must be exactly
    /// [`FRAME_BYTE_COUNT`] bytes of row-major RGBA pixel data.
    ///
    /// On a length mismatch the previous frame is left in place.
    pub fn compose(&mut self, bytes: &[u8]) -> EngineResult {
        if bytes.len() != FRAME_BYTE_COUNT {
            return Err(EngineError::BufferSizeMismatch {
                expected: FRAME_BYTE_COUNT,
                actual: bytes.len(),
            });
        }
        self.image.copy_from_slice(bytes);
        Ok(())
    }

    /// Replaces the frame with the blank all-white image.
    pub fn clear(&mut self) {
        self.image = blank_frame();
    }
}

impl Default for FrameCompositor {
    fn default() -> Self {
        Self::new()
    }
}

fn blank_frame() -> RgbaImage {
    RgbaImage::from_pixel(FRAME_WIDTH, FRAME_HEIGHT, image::Rgba([255; 4]))
}
