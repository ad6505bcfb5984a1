use super::common::{FrameContext, Layer, blend_colors};
use crate::render::Canvas;
use image::Rgb;

/// Sky - Whole canvas fill moving along the sunrise gradient as the loop progresses
pub(crate) struct Sky {
    pub dawn: Rgb<u8>,
    pub day: Rgb<u8>,
}

impl Sky {
    pub(crate) fn color(&self, ctx: &FrameContext) -> Rgb<u8> {
        blend_colors(self.dawn, self.day, ctx.progress)
    }
}

impl Layer for Sky {
    fn draw(&self, canvas: &mut Canvas, ctx: &FrameContext) {
        canvas.fill(self.color(ctx));
    }
}
