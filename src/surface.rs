//! 2D sample grids and the read-only adapters that wrap them.
//!
//! The encoder and the rasterization primitives are generic over anything
//! that looks like a dense 2D grid, expressed through the [`Surface`] and
//! [`SurfaceMut`] traits. [`Image`] is the owned implementation; [`Rescale`]
//! and [`Magnify`] are borrowing views composed by wrapping.

/// Read access to a 2D grid of samples.
///
/// Coordinates must satisfy `x < width()` and `y < height()`; callers are
/// expected to clip before access.
pub trait Surface {
    type Value: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn get(&self, x: usize, y: usize) -> Self::Value;
}

/// Write access to a 2D grid of samples.
pub trait SurfaceMut: Surface {
    fn set(&mut self, x: usize, y: usize, value: Self::Value);
}

/// An owned, dense, row-major 2D image.
#[derive(Debug, Clone)]
pub struct Image<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Copy + Default> Image<T> {
    /// Allocate an image of the given dimensions with every sample zeroed.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![T::default(); width * height],
            width,
            height,
        }
    }

    /// Reset all samples to zero.
    pub fn clear(&mut self) {
        self.data.fill(T::default());
    }
}

impl<T: Copy> Surface for Image<T> {
    type Value = T;

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get(&self, x: usize, y: usize) -> T {
        self.data[x + self.width * y]
    }
}

impl<T: Copy> SurfaceMut for Image<T> {
    fn set(&mut self, x: usize, y: usize, value: T) {
        self.data[x + self.width * y] = value;
    }
}

/// Rescales the intensities of a wrapped surface into palette index range.
///
/// Samples are mapped from `(min, max)` onto `[0, palette_size)`, rounded to
/// the nearest index and clamped. This is what [`crate::imshow_scaled`] uses
/// internally.
pub struct Rescale<'a, S> {
    source: &'a S,
    min: f64,
    max: f64,
    palette_size: usize,
}

impl<'a, S: Surface> Rescale<'a, S>
where
    S::Value: Into<f64>,
{
    pub fn new(source: &'a S, min: f64, max: f64, palette_size: usize) -> Self {
        Self {
            source,
            min,
            max,
            palette_size,
        }
    }
}

impl<S: Surface> Surface for Rescale<'_, S>
where
    S::Value: Into<f64>,
{
    type Value = u8;

    fn width(&self) -> usize {
        self.source.width()
    }

    fn height(&self) -> usize {
        self.source.height()
    }

    fn get(&self, x: usize, y: usize) -> u8 {
        let value: f64 = self.source.get(x, y).into();
        let rescaled = self.palette_size as f64 * (value - self.min) / (self.max - self.min);
        rescaled.round().clamp(0.0, self.palette_size as f64 - 1.0) as u8
    }
}

/// Magnifies a wrapped surface by an integer factor through pixel replication.
///
/// ```no_run
/// # use termsixel::{imshow_scaled, Image, Magnify, Palette};
/// # let image: Image<u8> = Image::new(8, 8);
/// imshow_scaled(&Magnify::new(&image, 3), 0.0, 255.0, &Palette::gray(101), false)?;
/// # Ok::<(), termsixel::SixelError>(())
/// ```
pub struct Magnify<'a, S> {
    source: &'a S,
    factor: usize,
}

impl<'a, S: Surface> Magnify<'a, S> {
    pub fn new(source: &'a S, factor: usize) -> Self {
        assert!(factor > 0, "magnification factor must be at least 1");
        Self { source, factor }
    }
}

impl<S: Surface> Surface for Magnify<'_, S> {
    type Value = S::Value;

    fn width(&self) -> usize {
        self.source.width() * self.factor
    }

    fn height(&self) -> usize {
        self.source.height() * self.factor
    }

    fn get(&self, x: usize, y: usize) -> S::Value {
        self.source.get(x / self.factor, y / self.factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_starts_zeroed() {
        let im: Image<u8> = Image::new(4, 3);
        assert_eq!(im.width(), 4);
        assert_eq!(im.height(), 3);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(im.get(x, y), 0);
            }
        }
    }

    #[test]
    fn image_set_get_roundtrip() {
        let mut im: Image<u8> = Image::new(5, 5);
        im.set(2, 3, 7);
        assert_eq!(im.get(2, 3), 7);
        im.clear();
        assert_eq!(im.get(2, 3), 0);
    }

    #[test]
    fn rescale_clamps_and_rounds() {
        let mut im: Image<f32> = Image::new(3, 1);
        im.set(0, 0, -10.0);
        im.set(1, 0, 0.5);
        im.set(2, 0, 10.0);
        let scaled = Rescale::new(&im, 0.0, 1.0, 100);
        assert_eq!(scaled.get(0, 0), 0);
        assert_eq!(scaled.get(1, 0), 50);
        assert_eq!(scaled.get(2, 0), 99);
    }

    #[test]
    fn magnify_replicates_pixels() {
        let mut im: Image<u8> = Image::new(2, 1);
        im.set(1, 0, 9);
        let big = Magnify::new(&im, 3);
        assert_eq!(big.width(), 6);
        assert_eq!(big.height(), 3);
        assert_eq!(big.get(2, 0), 0);
        assert_eq!(big.get(3, 2), 9);
    }
}
