//! Rasterization primitives: line segments and text.
//!
//! Lines are drawn by a single-pass scan along the dominant axis. Steep
//! segments are transposed through a coordinate-swapping view over the same
//! canvas so the scan never leaves gaps, and the scan itself stays free of
//! per-pixel branching on direction.

use crate::font::Font;
use crate::surface::{Surface, SurfaceMut};

/// Coordinate-swapping view over a canvas.
struct Transposed<'a, S>(&'a mut S);

impl<S: Surface> Surface for Transposed<'_, S> {
    type Value = S::Value;

    fn width(&self) -> usize {
        self.0.height()
    }

    fn height(&self) -> usize {
        self.0.width()
    }

    fn get(&self, x: usize, y: usize) -> S::Value {
        self.0.get(y, x)
    }
}

impl<S: SurfaceMut> SurfaceMut for Transposed<'_, S> {
    fn set(&mut self, x: usize, y: usize, value: S::Value) {
        self.0.set(y, x, value);
    }
}

/// Draw a straight segment from `(x0, y0)` to `(x1, y1)`.
///
/// `stipple` is the dash repeat period in pixels (0 for a solid line) and
/// `stipple_frac` the fraction of each period that is drawn. Pixels falling
/// outside the canvas are silently dropped, so partially off-screen segments
/// render their visible portion.
pub fn render_line<S>(
    canvas: &mut S,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    colour_index: u8,
    stipple: u32,
    stipple_frac: f32,
) where
    S: SurfaceMut<Value = u8>,
{
    if (x1 - x0).abs() < (y1 - y0).abs() {
        let mut view = Transposed(canvas);
        line_x(&mut view, y0, x0, y1, x1, colour_index, stipple, stipple_frac);
    } else {
        line_x(canvas, x0, y0, x1, y1, colour_index, stipple, stipple_frac);
    }
}

/// Scan along x, left to right, writing one interpolated pixel per column.
/// Assumes `|dx| >= |dy|`; the caller transposes steeper segments.
fn line_x<S>(
    canvas: &mut S,
    mut x0: f32,
    mut y0: f32,
    mut x1: f32,
    mut y1: f32,
    colour_index: u8,
    stipple: u32,
    stipple_frac: f32,
) where
    S: SurfaceMut<Value = u8>,
{
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let x_range = x1 - x0;
    let y_range = y1 - y0;

    let x_first = x0.round().max(0.0) as i32;
    let x_max = ((x1 + 1.0) as i32).min(canvas.width() as i32);
    for x in x_first..x_max {
        if stipple > 0 && (x % stipple as i32) as f32 >= stipple_frac * stipple as f32 {
            continue;
        }
        let t = if x_range > 0.0 {
            (x as f32 - x0) / x_range
        } else {
            0.0
        };
        let y = (y0 + y_range * t).round() as i32;
        if y >= 0 && (y as usize) < canvas.height() {
            canvas.set(x as usize, y as usize, colour_index);
        }
    }
}

/// Render a text string with its anchor point placed at `(x, y)`.
///
/// `(anchor_x, anchor_y)` give the fractional position of the anchor within
/// the text block, from (0, 0) at the bottom left to (1, 1) at the top
/// right; (0.5, 0.5) centres the text on `(x, y)`. Glyphs are clipped to the
/// canvas and their unset bits leave existing content in place.
pub fn render_text<S>(
    canvas: &mut S,
    text: &str,
    x: f32,
    y: f32,
    anchor_x: f32,
    anchor_y: f32,
    colour_index: u8,
    font: &Font,
) where
    S: SurfaceMut<Value = u8>,
{
    let text_width = (font.width() * text.len()) as f32;
    let pos_x = (x - anchor_x * text_width).round() as i32;
    let pos_y = (y - (1.0 - anchor_y) * font.height() as f32).round() as i32;

    for (n, c) in text.bytes().enumerate() {
        font.render(
            canvas,
            c,
            pos_x + (n * font.width()) as i32,
            pos_y,
            colour_index,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Image;

    fn painted(canvas: &Image<u8>) -> Vec<(usize, usize)> {
        let mut set = Vec::new();
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                if canvas.get(x, y) != 0 {
                    set.push((x, y));
                }
            }
        }
        set
    }

    #[test]
    fn line_is_undirected() {
        let mut forward: Image<u8> = Image::new(32, 32);
        let mut backward: Image<u8> = Image::new(32, 32);
        render_line(&mut forward, 2.0, 3.0, 28.0, 17.0, 1, 0, 0.5);
        render_line(&mut backward, 28.0, 17.0, 2.0, 3.0, 1, 0, 0.5);
        assert_eq!(painted(&forward), painted(&backward));
    }

    #[test]
    fn steep_line_has_no_gaps() {
        let mut canvas: Image<u8> = Image::new(16, 64);
        render_line(&mut canvas, 3.0, 0.0, 7.0, 63.0, 1, 0, 0.5);
        // one pixel per row over the full vertical extent
        for y in 0..64 {
            let count = (0..16).filter(|&x| canvas.get(x, y) != 0).count();
            assert_eq!(count, 1, "row {y}");
        }
    }

    #[test]
    fn horizontal_line_spans_columns() {
        let mut canvas: Image<u8> = Image::new(10, 4);
        render_line(&mut canvas, 0.0, 2.0, 9.0, 2.0, 3, 0, 0.5);
        for x in 0..10 {
            assert_eq!(canvas.get(x, 2), 3);
        }
    }

    #[test]
    fn stipple_skips_pixels() {
        let mut canvas: Image<u8> = Image::new(20, 1);
        render_line(&mut canvas, 0.0, 0.0, 19.0, 0.0, 1, 10, 0.5);
        // first half of each 10-pixel period drawn, second half skipped
        for x in 0..20 {
            let expected = u8::from(x % 10 < 5);
            assert_eq!(canvas.get(x, 0), expected, "column {x}");
        }
    }

    #[test]
    fn off_canvas_portions_are_clipped() {
        let mut canvas: Image<u8> = Image::new(8, 8);
        render_line(&mut canvas, -5.0, -5.0, 12.0, 12.0, 1, 0, 0.5);
        assert!(!painted(&canvas).is_empty());
    }

    #[test]
    fn text_anchoring() {
        let font = Font::for_size(6).unwrap();
        let mut left: Image<u8> = Image::new(60, 20);
        let mut right: Image<u8> = Image::new(60, 20);
        render_text(&mut left, "ab", 30.0, 10.0, 0.0, 0.5, 1, &font);
        render_text(&mut right, "ab", 30.0, 10.0, 1.0, 0.5, 1, &font);
        let lx: Vec<usize> = painted(&left).iter().map(|&(x, _)| x).collect();
        let rx: Vec<usize> = painted(&right).iter().map(|&(x, _)| x).collect();
        // left-anchored text sits right of the anchor, right-anchored left of it
        assert!(lx.iter().all(|&x| x >= 30));
        assert!(rx.iter().all(|&x| x < 30));
    }

    #[test]
    fn text_background_is_transparent() {
        let font = Font::for_size(6).unwrap();
        let mut canvas: Image<u8> = Image::new(40, 16);
        for y in 0..16 {
            for x in 0..40 {
                canvas.set(x, y, 5);
            }
        }
        render_text(&mut canvas, "i", 20.0, 8.0, 0.5, 0.5, 1, &font);
        // glyph pixels overwrite, everything else keeps the old value
        assert!(painted(&canvas).len() == 40 * 16);
        assert!((0..16).any(|y| (0..40).any(|x| canvas.get(x, y) == 1)));
        assert!((0..16).any(|y| (0..40).any(|x| canvas.get(x, y) == 5)));
    }
}
