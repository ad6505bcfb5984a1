use image::{Rgb, RgbImage};

/// A frame being drawn
///
/// All primitives take signed coordinates and clip against the canvas, so shapes that are
/// partially (or completely) outside of it are fine.
#[derive(Clone, Debug)]
pub(crate) struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a canvas filled with a single color
    pub(crate) fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self { image: RgbImage::from_pixel(width, height, background) }
    }

    pub(crate) fn width(&self) -> u32 {
        self.image.width()
    }

    pub(crate) fn height(&self) -> u32 {
        self.image.height()
    }

    /// Get the color at a position, if it's inside the canvas
    #[cfg(test)]
    pub(crate) fn pixel(&self, x: i32, y: i32) -> Option<Rgb<u8>> {
        let (x, y) = self.clip(x, y)?;
        Some(*self.image.get_pixel(x, y))
    }

    /// Paint every pixel with a color
    pub(crate) fn fill(&mut self, color: Rgb<u8>) {
        for pixel in self.image.pixels_mut() {
            *pixel = color;
        }
    }

    /// Paint a single pixel. Positions outside the canvas are ignored.
    pub(crate) fn put(&mut self, x: i32, y: i32, color: Rgb<u8>) {
        if let Some((x, y)) = self.clip(x, y) {
            self.image.put_pixel(x, y, color);
        }
    }

    /// Fill the rectangle between two corners, both inclusive
    pub(crate) fn rectangle(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb<u8>) {
        let (left, right) = (from.0.min(to.0), from.0.max(to.0));
        let (top, bottom) = (from.1.min(to.1), from.1.max(to.1));
        let left = left.max(0);
        let top = top.max(0);
        let right = right.min(self.width() as i32 - 1);
        let bottom = bottom.min(self.height() as i32 - 1);
        for y in top..=bottom {
            for x in left..=right {
                self.put(x, y, color);
            }
        }
    }

    /// Fill the ellipse inscribed in the bounding box `[left, top, right, bottom]`
    ///
    /// The box is truncated to whole pixels and both of its edges are included, same as
    /// `rectangle`. A pixel is painted when its center falls inside the ellipse.
    pub(crate) fn ellipse(&mut self, left: f64, top: f64, right: f64, bottom: f64, color: Rgb<u8>) {
        let (left, top, right, bottom) = (left as i32, top as i32, right as i32, bottom as i32);
        if right < left || bottom < top {
            return;
        }
        let center_x = (left + right) as f64 / 2.0;
        let center_y = (top + bottom) as f64 / 2.0;
        let radius_x = (right - left + 1) as f64 / 2.0;
        let radius_y = (bottom - top + 1) as f64 / 2.0;

        let last_row = bottom.min(self.height() as i32 - 1);
        let last_column = right.min(self.width() as i32 - 1);
        for y in top.max(0)..=last_row {
            let dy = (y as f64 - center_y) / radius_y;
            for x in left.max(0)..=last_column {
                let dx = (x as f64 - center_x) / radius_x;
                if dx * dx + dy * dy <= 1.0 {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Draw a 1 pixel wide line, both endpoints included
    pub(crate) fn line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb<u8>) {
        // Bresenham, walking from `from` to `to` so the result doesn't depend on clipping
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let step_x = if x < to.0 { 1 } else { -1 };
        let step_y = if y < to.1 { 1 } else { -1 };
        let mut error = dx + dy;
        loop {
            self.put(x, y, color);
            if (x, y) == to {
                break;
            }
            let doubled = 2 * error;
            if doubled >= dy {
                error += dy;
                x += step_x;
            }
            if doubled <= dx {
                error += dx;
                y += step_y;
            }
        }
    }

    /// Draw connected line segments through every point
    pub(crate) fn polyline(&mut self, points: &[(i32, i32)], color: Rgb<u8>) {
        match points {
            [] => (),
            [single] => self.put(single.0, single.1, color),
            _ => {
                for segment in points.windows(2) {
                    self.line(segment[0], segment[1], color);
                }
            }
        }
    }

    /// Finish drawing and hand out the pixels
    pub(crate) fn into_image(self) -> RgbImage {
        self.image
    }

    fn clip(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        (x < self.width() && y < self.height()).then_some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    fn painted(canvas: &Canvas) -> Vec<(i32, i32)> {
        let mut output = Vec::new();
        for y in 0..canvas.height() as i32 {
            for x in 0..canvas.width() as i32 {
                if canvas.pixel(x, y) == Some(WHITE) {
                    output.push((x, y));
                }
            }
        }
        output
    }

    #[test]
    fn rectangle_is_inclusive() {
        let mut canvas = Canvas::new(4, 4, BLACK);
        canvas.rectangle((1, 1), (2, 2), WHITE);
        assert_eq!(painted(&canvas), vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn rectangle_clips() {
        let mut canvas = Canvas::new(4, 4, BLACK);
        canvas.rectangle((-5, 3), (10, 20), WHITE);
        assert_eq!(painted(&canvas), vec![(0, 3), (1, 3), (2, 3), (3, 3)]);
    }

    #[rstest]
    #[case::horizontal((0, 0), (3, 0), vec![(0, 0), (1, 0), (2, 0), (3, 0)])]
    #[case::vertical((1, 3), (1, 1), vec![(1, 1), (1, 2), (1, 3)])]
    #[case::diagonal((0, 0), (2, 2), vec![(0, 0), (1, 1), (2, 2)])]
    #[case::single((2, 2), (2, 2), vec![(2, 2)])]
    fn line_pixels(
        #[case] from: (i32, i32),
        #[case] to: (i32, i32),
        #[case] expected: Vec<(i32, i32)>,
    ) {
        let mut canvas = Canvas::new(4, 4, BLACK);
        canvas.line(from, to, WHITE);
        assert_eq!(painted(&canvas), expected);
    }

    #[test]
    fn line_partially_outside() {
        let mut canvas = Canvas::new(4, 4, BLACK);
        canvas.line((-2, 1), (1, 1), WHITE);
        assert_eq!(painted(&canvas), vec![(0, 1), (1, 1)]);
    }

    #[test]
    fn polyline_joins_segments() {
        let mut canvas = Canvas::new(4, 4, BLACK);
        canvas.polyline(&[(0, 3), (0, 0), (3, 0)], WHITE);
        let pixels = painted(&canvas);
        assert_eq!(pixels.len(), 7);
        assert!(pixels.contains(&(0, 3)));
        assert!(pixels.contains(&(3, 0)));
    }

    #[test]
    fn ellipse_is_symmetric() {
        let mut canvas = Canvas::new(9, 9, BLACK);
        canvas.ellipse(0.0, 0.0, 8.0, 8.0, WHITE);
        let pixels = painted(&canvas);
        assert!(pixels.contains(&(4, 4)));
        assert!(pixels.contains(&(4, 0)));
        assert!(pixels.contains(&(0, 4)));
        assert!(!pixels.contains(&(0, 0)));
        for (x, y) in pixels.iter().copied() {
            assert!(pixels.contains(&(8 - x, y)));
            assert!(pixels.contains(&(x, 8 - y)));
        }
    }

    #[test]
    fn ellipse_fills_its_box() {
        let mut canvas = Canvas::new(16, 16, BLACK);
        canvas.ellipse(4.0, 0.5, 12.0, 8.5, WHITE);
        let mut rectangle = Canvas::new(16, 16, BLACK);
        rectangle.rectangle((4, 0), (12, 8), WHITE);

        let pixels = painted(&canvas);
        let columns: Vec<i32> = pixels.iter().filter(|(_, y)| *y == 4).map(|(x, _)| *x).collect();
        assert_eq!(columns, (4..=12).collect::<Vec<_>>());
        assert!(pixels.contains(&(8, 0)));
        assert!(pixels.contains(&(8, 8)));
        // Nothing outside of what the same box as a rectangle covers
        let covered = painted(&rectangle);
        assert!(pixels.iter().all(|pixel| covered.contains(pixel)));
    }

    #[test]
    fn ellipse_outside_canvas() {
        let mut canvas = Canvas::new(4, 4, BLACK);
        canvas.ellipse(0.0, 10.0, 4.0, 14.0, WHITE);
        assert!(painted(&canvas).is_empty());
    }

    #[test]
    fn fill_overwrites() {
        let mut canvas = Canvas::new(2, 2, BLACK);
        canvas.put(0, 0, WHITE);
        canvas.fill(BLACK);
        assert!(painted(&canvas).is_empty());
        assert_eq!(canvas.pixel(5, 0), None);
    }
}
