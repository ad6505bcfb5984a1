use image::Rgb;
use std::path::PathBuf;
use std::time::Duration;

/// How frames after the first one get their palette
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum PaletteMode {
    /// Every frame gets its own adaptive palette
    #[default]
    PerFrame,
    /// Every frame is mapped onto the palette of the first frame
    #[cfg_attr(not(test), allow(dead_code))]
    Shared,
}

/// A palm tree instance
///
/// The trunk goes from `base` through a bend point, whose x coordinate sways, up to the crown.
/// Leaves fan out from the crown towards each tip, and every tip's y coordinate is offset by the
/// leaf sway multiplied by its sign.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PalmConfig {
    pub base: (i32, i32),
    pub bend: (i32, i32),
    pub crown: (i32, i32),
    pub trunk_amplitude: f64,
    pub leaf_amplitude: f64,
    /// Leaf tips as `(x, y, sway sign)`
    pub leaves: [(i32, i32, i32); 4],
}

/// The sun, drawn as an ellipse that rises from `top` towards the top of the canvas
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SunConfig {
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub top: f64,
}

/// A full width horizontal band, rows inclusive
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct BandConfig {
    pub top: u32,
    pub bottom: u32,
}

/// Where and how the animation is written
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct OutputConfig {
    pub path: PathBuf,
    pub frame_delay: Duration,
    pub palette_mode: PaletteMode,
}

/// Everything the renderer and the writer need to know about the scene
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SceneConfig {
    pub width: u32,
    pub height: u32,
    pub frame_count: u32,
    pub palm_color: Rgb<u8>,
    pub trunk_color: Rgb<u8>,
    pub sand_color: Rgb<u8>,
    pub water_color: Rgb<u8>,
    pub sun_color: Rgb<u8>,
    pub sunrise_colors: [Rgb<u8>; 2],
    pub sun: SunConfig,
    pub water: BandConfig,
    pub sand: BandConfig,
    pub palms: Vec<PalmConfig>,
    pub output: OutputConfig,
}

impl SceneConfig {
    /// The beach sunrise: a 16x16, 30 frame loop with two palms
    pub(crate) fn sunrise() -> Self {
        Self {
            width: 16,
            height: 16,
            frame_count: 30,
            palm_color: Rgb([34, 139, 34]),
            trunk_color: Rgb([139, 69, 19]),
            sand_color: Rgb([255, 223, 186]),
            water_color: Rgb([64, 164, 223]),
            sun_color: Rgb([255, 223, 0]),
            // Red at dawn into sky blue
            sunrise_colors: [Rgb([255, 69, 0]), Rgb([135, 206, 250])],
            sun: SunConfig { left: 4.0, width: 8.0, height: 8.0, top: 15.0 },
            water: BandConfig { top: 10, bottom: 15 },
            sand: BandConfig { top: 12, bottom: 15 },
            palms: vec![
                PalmConfig {
                    base: (8, 15),
                    bend: (7, 12),
                    crown: (8, 8),
                    trunk_amplitude: 1.0,
                    leaf_amplitude: 2.0,
                    leaves: [(5, 6, 1), (11, 6, -1), (6, 7, -1), (10, 7, 1)],
                },
                // Smaller and slightly higher
                PalmConfig {
                    base: (12, 13),
                    bend: (11, 10),
                    crown: (12, 7),
                    trunk_amplitude: 1.5,
                    leaf_amplitude: 1.5,
                    leaves: [(10, 6, 1), (14, 6, -1), (11, 5, -1), (13, 5, 1)],
                },
            ],
            output: OutputConfig {
                path: PathBuf::from("./palm_tree_sunrise_horizon_with_extra_palm.gif"),
                frame_delay: Duration::from_millis(100),
                palette_mode: PaletteMode::PerFrame,
            },
        }
    }

    /// Normalized animation progress for a frame, in `[0, 1)` for valid indexes
    pub(crate) fn progress(&self, frame: u32) -> f64 {
        frame as f64 / self.frame_count as f64
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::sunrise()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_starts_at_zero() {
        let config = SceneConfig::sunrise();
        assert_eq!(config.progress(0), 0.0);
        assert!(config.progress(config.frame_count - 1) < 1.0);
    }

    #[test]
    fn bands_fit_canvas() {
        let config = SceneConfig::default();
        for band in [&config.water, &config.sand] {
            assert!(band.top <= band.bottom);
            assert!(band.bottom < config.height);
        }
        // Sand sits on top of the lower part of the water
        assert!(config.sand.top > config.water.top);
    }
}
