use super::gif::ExportError;
use color_quant::NeuQuant;
use image::{Rgb, RgbImage};

/// NeuQuant sample factor, 1 trains on every pixel
pub(crate) const QUANTIZER_SPEED: i32 = 1;

/// Largest palette a GIF frame can carry
const MAX_COLORS: usize = 256;

/// A frame reduced to its own adaptive palette
///
/// Frames with up to 256 distinct colors keep them exactly, others are reduced with NeuQuant.
/// Every pixel maps to a single palette entry, there's no dithering.
pub(crate) struct IndexedFrame {
    width: u32,
    height: u32,
    palette: Vec<Rgb<u8>>,
    indexes: Vec<u8>,
}

impl IndexedFrame {
    pub(crate) fn from_image(image: &RgbImage) -> Result<Self, ExportError> {
        let too_large = || ExportError::TooLarge(image.width(), image.height());
        let width = u16::try_from(image.width()).map_err(|_| too_large())?;
        let height = u16::try_from(image.height()).map_err(|_| too_large())?;
        let frame = ::gif::Frame::from_rgb_speed(width, height, image.as_raw(), QUANTIZER_SPEED);
        let palette = frame.palette.as_deref().unwrap_or_default();
        Ok(Self {
            width: image.width(),
            height: image.height(),
            palette: palette.chunks_exact(3).map(|rgb| Rgb([rgb[0], rgb[1], rgb[2]])).collect(),
            indexes: frame.buffer.into_owned(),
        })
    }

    pub(crate) fn palette(&self) -> &[Rgb<u8>] {
        &self.palette
    }

    /// Expand the palette indexes back into colors
    pub(crate) fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            let index = self.indexes[(y * self.width + x) as usize];
            self.palette.get(index as usize).copied().unwrap_or(Rgb([0, 0, 0]))
        })
    }
}

/// A palette trained on one frame and reused for others
pub(crate) struct SharedPalette {
    quantizer: NeuQuant,
}

impl SharedPalette {
    pub(crate) fn from_image(image: &RgbImage) -> Self {
        let pixels: Vec<u8> = image.pixels().flat_map(|pixel| rgba(pixel)).collect();
        Self { quantizer: NeuQuant::new(QUANTIZER_SPEED, MAX_COLORS, &pixels) }
    }

    pub(crate) fn colors(&self) -> Vec<Rgb<u8>> {
        let map = self.quantizer.color_map_rgb();
        map.chunks_exact(3).map(|rgb| Rgb([rgb[0], rgb[1], rgb[2]])).collect()
    }

    /// Replace every pixel with its closest palette entry
    pub(crate) fn apply(&self, image: &RgbImage) -> RgbImage {
        let mut output = image.clone();
        for pixel in output.pixels_mut() {
            let mut color = rgba(pixel);
            self.quantizer.map_pixel(&mut color);
            *pixel = Rgb([color[0], color[1], color[2]]);
        }
        output
    }
}

fn rgba(pixel: &Rgb<u8>) -> [u8; 4] {
    let [r, g, b] = pixel.0;
    [r, g, b, 255]
}
