use super::quantize::{IndexedFrame, SharedPalette};
use crate::config::{OutputConfig, PaletteMode};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame, RgbImage};
use std::fs;

/// Writes a rendered frame sequence as a looping GIF
pub(crate) struct AnimationWriter<'a> {
    output: &'a OutputConfig,
}

impl<'a> AnimationWriter<'a> {
    pub(crate) fn new(output: &'a OutputConfig) -> Self {
        Self { output }
    }

    /// Reduce every frame but the first one to an adaptive palette
    ///
    /// The first frame is kept in its native colors.
    pub(crate) fn quantize(&self, mut frames: Vec<RgbImage>) -> Result<Vec<RgbImage>, ExportError> {
        let Some(first) = frames.first() else {
            return Err(ExportError::NoFrames);
        };
        let shared = match self.output.palette_mode {
            PaletteMode::PerFrame => None,
            PaletteMode::Shared => {
                let palette = SharedPalette::from_image(first);
                log::debug!("sharing a palette of {} colors", palette.colors().len());
                Some(palette)
            }
        };
        for (index, frame) in frames.iter_mut().enumerate().skip(1) {
            *frame = match &shared {
                Some(palette) => palette.apply(frame),
                None => {
                    let indexed = IndexedFrame::from_image(frame)?;
                    log::debug!("quantized frame {index} to {} colors", indexed.palette().len());
                    indexed.to_image()
                }
            };
        }
        Ok(frames)
    }

    /// Encode the frames into an in-memory GIF
    pub(crate) fn encode(&self, frames: Vec<RgbImage>) -> Result<Vec<u8>, ExportError> {
        let frames = self.quantize(frames)?;
        let delay = Delay::from_saturating_duration(self.output.frame_delay);
        let mut bytes = Vec::new();
        {
            let mut encoder = GifEncoder::new(&mut bytes);
            encoder.set_repeat(Repeat::Infinite)?;
            encoder.encode_frames(frames.into_iter().map(|frame| {
                Frame::from_parts(DynamicImage::ImageRgb8(frame).into_rgba8(), 0, 0, delay)
            }))?;
        }
        Ok(bytes)
    }

    /// Encode the frames and write them to the configured path
    pub(crate) fn write(&self, frames: Vec<RgbImage>) -> Result<(), ExportError> {
        let frame_count = frames.len();
        let bytes = self.encode(frames)?;
        fs::write(&self.output.path, &bytes)?;
        log::info!(
            "wrote {frame_count} frames ({} bytes) to {}",
            bytes.len(),
            self.output.path.display()
        );
        Ok(())
    }
}

/// Errors that can occur when writing the animation
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("no frames to write")]
    NoFrames,

    #[error("frame of {0}x{1} pixels is too large for a GIF")]
    TooLarge(u32, u32),

    #[error("failed to encode animation: {0}")]
    Encode(#[from] image::ImageError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
