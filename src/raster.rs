//! Integer Bresenham line rasterization.

use crate::buffer::PixelBuffer;
use crate::error::RasterError;
use crate::pixel::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Point {
    x: i64,
    y: i64,
}

impl Point {
    fn new(x: i32, y: i32) -> Self {
        Self {
            x: i64::from(x),
            y: i64::from(y),
        }
    }

    fn transposed(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }
}

/// A segment in stepping space: `from.x <= to.x`, and `|dy| <= dx`.
///
/// `steep` records that x and y were transposed to get there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Segment {
    from: Point,
    to: Point,
    steep: bool,
}

impl Segment {
    fn normalize(a: Point, b: Point) -> Self {
        let steep = (a.x - b.x).abs() < (a.y - b.y).abs();
        let (a, b) = if steep {
            (a.transposed(), b.transposed())
        } else {
            (a, b)
        };
        let (from, to) = if a.x > b.x { (b, a) } else { (a, b) };
        Self { from, to, steep }
    }

    /// Map a stepping-space point back to image coordinates.
    fn to_image(self, p: Point) -> Point {
        if self.steep { p.transposed() } else { p }
    }

    /// Visit every pixel of the segment, endpoints included.
    #[cfg(test)]
    fn for_each_pixel(self, plot: impl FnMut(Point)) {
        self.for_each_pixel_within(self.from.x, self.to.x, plot);
    }

    /// Visit the pixels whose stepping-space x lies in `lo..=hi`.
    ///
    /// The error state at the first visited column is computed directly, so
    /// the cost is bounded by the window, not by the segment length.
    fn for_each_pixel_within(self, lo: i64, hi: i64, mut plot: impl FnMut(Point)) {
        let dx = self.to.x - self.from.x;
        let dy = self.to.y - self.from.y;
        let d_error = dy.abs() * 2;
        let y_step = dy.signum();
        let start = self.from.x.max(lo);
        let end = self.to.x.min(hi);
        if start > end {
            return;
        }

        // After k columns the error lies in (-dx, dx], which fixes the
        // number of minor steps taken so far.
        let k = i128::from(start - self.from.x);
        let steps = if dx == 0 {
            0
        } else {
            (i128::from(d_error) * k + i128::from(dx) - 1).div_euclid(2 * i128::from(dx))
        };
        let mut error = (i128::from(d_error) * k - 2 * i128::from(dx) * steps) as i64;
        let mut y = self.from.y + y_step * steps as i64;
        for x in start..=end {
            plot(self.to_image(Point { x, y }));
            error += d_error;
            if error > dx {
                y += y_step;
                error -= dx * 2;
            }
        }
    }
}

impl PixelBuffer {
    /// Draw the segment `(x1, y1)`-`(x2, y2)` in `color`, both endpoints
    /// included. Pixels falling outside the image are skipped.
    pub fn draw_line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: &Color,
    ) -> Result<(), RasterError> {
        self.check_color(color)?;
        let segment = Segment::normalize(Point::new(x1, y1), Point::new(x2, y2));
        let major = if segment.steep { self.height() } else { self.width() };
        segment.for_each_pixel_within(0, i64::from(major) - 1, |p| {
            // Points outside i32 are off-image anyway.
            if let (Ok(x), Ok(y)) = (i32::try_from(p.x), i32::try_from(p.y)) {
                self.put(x, y, color);
            }
        });
        Ok(())
    }
}
