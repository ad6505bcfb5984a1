use super::common::{FrameContext, Layer};
use crate::config::BandConfig;
use crate::render::Canvas;
use image::Rgb;

/// Band - Static full width strip, used for water and sand
pub(crate) struct Band {
    pub rows: BandConfig,
    pub color: Rgb<u8>,
}

impl Layer for Band {
    fn draw(&self, canvas: &mut Canvas, _ctx: &FrameContext) {
        let right = canvas.width() as i32 - 1;
        canvas.rectangle((0, self.rows.top as i32), (right, self.rows.bottom as i32), self.color);
    }
}
