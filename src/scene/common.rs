use crate::config::SceneConfig;
use crate::render::Canvas;
use image::Rgb;

/// Frame context passed to every layer
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrameContext {
    /// Frame index, in `[0, frame_count)`
    pub frame: u32,
    /// Total number of frames in the loop
    pub frame_count: u32,
    /// Normalized progress: `frame / frame_count`
    pub progress: f64,
}

impl FrameContext {
    pub(crate) fn new(config: &SceneConfig, frame: u32) -> Self {
        Self { frame, frame_count: config.frame_count, progress: config.progress(frame) }
    }

    /// The phase of the loop in radians, exactly periodic over `frame_count`
    pub(crate) fn phase(&self) -> f64 {
        let frame = self.frame % self.frame_count.max(1);
        frame as f64 / self.frame_count as f64 * 2.0 * std::f64::consts::PI
    }
}

/// Something that paints itself on top of whatever was drawn before it
pub(crate) trait Layer {
    /// Draw this layer for the given frame
    fn draw(&self, canvas: &mut Canvas, ctx: &FrameContext);
}

/// Linearly interpolate between two colors, truncating every channel
pub(crate) fn blend_colors(from: Rgb<u8>, to: Rgb<u8>, t: f64) -> Rgb<u8> {
    let channel = |i: usize| (from.0[i] as f64 * (1.0 - t) + to.0[i] as f64 * t) as u8;
    Rgb([channel(0), channel(1), channel(2)])
}
