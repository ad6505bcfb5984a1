use super::common::{FrameContext, Layer};
use crate::config::PalmConfig;
use crate::render::Canvas;
use image::Rgb;

/// Points making up a palm tree for a single frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PalmGeometry {
    /// Trunk spine, from the base up to the crown
    pub trunk: [(i32, i32); 3],
    /// Leaf segments, all of them starting at the crown
    pub leaves: [((i32, i32), (i32, i32)); 4],
}

/// Palm - Trunk and leaves swaying with the wind over the loop
pub(crate) struct Palm {
    pub shape: PalmConfig,
    pub trunk_color: Rgb<u8>,
    pub leaf_color: Rgb<u8>,
}

impl Palm {
    /// Horizontal displacement for a given amplitude, truncated towards zero
    pub(crate) fn sway(amplitude: f64, ctx: &FrameContext) -> i32 {
        (amplitude * ctx.phase().sin()) as i32
    }

    pub(crate) fn trunk_sway(&self, ctx: &FrameContext) -> i32 {
        Self::sway(self.shape.trunk_amplitude, ctx)
    }

    pub(crate) fn leaf_sway(&self, ctx: &FrameContext) -> i32 {
        Self::sway(self.shape.leaf_amplitude, ctx)
    }

    pub(crate) fn geometry(&self, ctx: &FrameContext) -> PalmGeometry {
        let shape = &self.shape;
        let trunk_sway = self.trunk_sway(ctx);
        let leaf_sway = self.leaf_sway(ctx);

        let trunk = [shape.base, (shape.bend.0 + trunk_sway, shape.bend.1), shape.crown];
        let leaves = shape.leaves.map(|(x, y, sign)| (shape.crown, (x, y + sign * leaf_sway)));
        PalmGeometry { trunk, leaves }
    }
}

impl Layer for Palm {
    fn draw(&self, canvas: &mut Canvas, ctx: &FrameContext) {
        let geometry = self.geometry(ctx);
        canvas.polyline(&geometry.trunk, self.trunk_color);
        for (from, to) in geometry.leaves {
            canvas.line(from, to, self.leaf_color);
        }
    }
}
