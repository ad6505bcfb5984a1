use super::common::{FrameContext, Layer};
use super::{layers, sky::Sky, sun::Sun};
use crate::config::SceneConfig;
use crate::render::Canvas;
use image::{Rgb, RgbImage};

/// Draws every frame of the animation by stacking the scene's layers
pub(crate) struct SceneComposer<'a> {
    config: &'a SceneConfig,
    layers: Vec<Box<dyn Layer>>,
}

impl<'a> SceneComposer<'a> {
    pub(crate) fn new(config: &'a SceneConfig) -> Self {
        Self { config, layers: layers(config) }
    }

    /// The sky color used as background for a frame
    pub(crate) fn sky_color(&self, frame: u32) -> Rgb<u8> {
        let sky = Sky { dawn: self.config.sunrise_colors[0], day: self.config.sunrise_colors[1] };
        sky.color(&FrameContext::new(self.config, frame))
    }

    /// The top edge of the sun for a frame
    pub(crate) fn sun_y(&self, frame: u32) -> f64 {
        let sun = Sun { shape: self.config.sun.clone(), color: self.config.sun_color };
        sun.y(&FrameContext::new(self.config, frame))
    }

    /// Render a single frame
    pub(crate) fn render_frame(&self, frame: u32) -> RgbImage {
        let ctx = FrameContext::new(self.config, frame);
        let mut canvas = Canvas::new(self.config.width, self.config.height, Rgb([0, 0, 0]));
        for layer in &self.layers {
            layer.draw(&mut canvas, &ctx);
        }
        log::debug!(
            "rendered frame {frame}/{}: sky {:?}, sun at {:.2}",
            self.config.frame_count,
            self.sky_color(frame).0,
            self.sun_y(frame)
        );
        canvas.into_image()
    }

    /// Render every frame of the loop, in playback order
    pub(crate) fn render_all(&self) -> Vec<RgbImage> {
        (0..self.config.frame_count).map(|frame| self.render_frame(frame)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_frame() {
        let config = SceneConfig::sunrise();
        let frames = SceneComposer::new(&config).render_all();
        assert_eq!(frames.len(), 30);
        for frame in &frames {
            assert_eq!(frame.dimensions(), (16, 16));
        }
    }

    #[test]
    fn sun_rises() {
        let config = SceneConfig::sunrise();
        let composer = SceneComposer::new(&config);
        assert_eq!(composer.sun_y(0), 15.0);
        for frame in 1..config.frame_count {
            assert!(composer.sun_y(frame) <= composer.sun_y(frame - 1));
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let config = SceneConfig::sunrise();
        let first = SceneComposer::new(&config).render_all();
        let second = SceneComposer::new(&config).render_all();
        for (left, right) in first.iter().zip(&second) {
            assert_eq!(left.as_raw(), right.as_raw());
        }
    }

    #[test]
    fn layers_are_stacked_back_to_front() {
        let config = SceneConfig::sunrise();
        let composer = SceneComposer::new(&config);
        let frame = composer.render_frame(0);
        assert_eq!(*frame.get_pixel(0, 0), config.sunrise_colors[0]);
        // Water between the horizon and the sand
        assert_eq!(*frame.get_pixel(0, 10), config.water_color);
        assert_eq!(*frame.get_pixel(0, 11), config.water_color);
        // Sand covers the lower water rows
        assert_eq!(*frame.get_pixel(0, 12), config.sand_color);
        assert_eq!(*frame.get_pixel(0, 15), config.sand_color);
        // The trunk is drawn on top of the sand
        assert_eq!(*frame.get_pixel(8, 15), config.trunk_color);
    }

    #[test]
    fn sun_shows_up_in_the_sky() {
        let config = SceneConfig::sunrise();
        let composer = SceneComposer::new(&config);
        let frame = composer.render_frame(20);
        // sun_y = 5, so the sun spans rows 5 to 13 around x = 8
        assert!((composer.sun_y(20) - 5.0).abs() < 1e-9);
        assert_eq!(*frame.get_pixel(5, 9), config.sun_color);
        // The sun hides behind the water
        assert_eq!(*frame.get_pixel(6, 11), config.water_color);
    }

    #[test]
    fn sky_follows_gradient() {
        let config = SceneConfig::sunrise();
        let composer = SceneComposer::new(&config);
        let last = composer.render_frame(config.frame_count - 1);
        let sky = *last.get_pixel(0, 0);
        assert_eq!(sky, composer.sky_color(config.frame_count - 1));
        let [from, to] = config.sunrise_colors;
        for i in 0..3 {
            let step = (from.0[i] as f64 - to.0[i] as f64).abs() / config.frame_count as f64;
            assert!((sky.0[i] as f64 - to.0[i] as f64).abs() <= step + 1.0);
        }
    }
}
