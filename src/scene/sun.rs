use super::common::{FrameContext, Layer};
use crate::config::SunConfig;
use crate::render::Canvas;
use image::Rgb;

/// Sun - Ellipse rising linearly from the horizon towards the top of the canvas
pub(crate) struct Sun {
    pub shape: SunConfig,
    pub color: Rgb<u8>,
}

impl Sun {
    /// Top edge of the sun's bounding box for a frame
    pub(crate) fn y(&self, ctx: &FrameContext) -> f64 {
        self.shape.top - ctx.progress * self.shape.top
    }
}

impl Layer for Sun {
    fn draw(&self, canvas: &mut Canvas, ctx: &FrameContext) {
        let top = self.y(ctx);
        let left = self.shape.left;
        // Anything below the canvas is clipped, water and sand cover the rest
        canvas.ellipse(left, top, left + self.shape.width, top + self.shape.height, self.color);
    }
}
