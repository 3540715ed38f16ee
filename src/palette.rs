//! Colour palettes for sixel rendering.
//!
//! A palette maps small integer indices to RGB triples. The sixel protocol
//! expects every channel in the 0–100 range, so that is what these tables
//! store. Index 0 is conventionally the background and is the entry skipped
//! when an image is rendered with a transparent background.

/// An ordered table of RGB colours, each channel in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette(Vec<[u8; 3]>);

/// Scale `val` by `100/steps` and clamp into the 0–100 channel range.
fn channel(val: f64, steps: usize) -> u8 {
    ((100.0 / steps as f64) * val).clamp(0.0, 100.0).round() as u8
}

impl Palette {
    pub fn new(colours: Vec<[u8; 3]>) -> Self {
        Self(colours)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> [u8; 3] {
        self.0[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8; 3]> {
        self.0.iter()
    }

    /// Linear grayscale ramp with `number` entries.
    pub fn gray(number: usize) -> Self {
        Self(
            (0..number)
                .map(|n| {
                    let c = channel(n as f64, number - 1);
                    [c, c, c]
                })
                .collect(),
        )
    }

    /// Black-red-yellow-white "hot" ramp with `number` entries.
    pub fn hot(number: usize) -> Self {
        Self(
            (0..number)
                .map(|n| {
                    let n = n as f64;
                    let m = (number - 1) as f64;
                    [
                        channel(3.0 * n, number - 1),
                        channel(3.0 * n - m, number - 1),
                        channel(3.0 * n - 2.0 * m, number - 1),
                    ]
                })
                .collect(),
        )
    }

    /// Blue-cyan-yellow-red "jet" ramp with `number` entries.
    pub fn jet(number: usize) -> Self {
        Self(
            (0..number)
                .map(|n| {
                    let n = n as f64;
                    let m = (number - 1) as f64;
                    [
                        channel(1.5 * m - (4.0 * n - 3.0 * m).abs(), number - 1),
                        channel(1.5 * m - (4.0 * n - 2.0 * m).abs(), number - 1),
                        channel(1.5 * m - (4.0 * n - 1.0 * m).abs(), number - 1),
                    ]
                })
                .collect(),
        )
    }

    /// The 8-entry palette used by [`crate::Figure`] by default.
    ///
    /// Index 0 is the background, index 1 the foreground used for axes and
    /// labels; indices 2 and up are cycled through for plot elements. When
    /// the `WHITEBG` environment variable is set (its value is ignored) the
    /// table is inverted to suit light terminal backgrounds.
    pub fn plot_default() -> Self {
        let mut palette = Self(vec![
            [0, 0, 0],
            [100, 100, 100],
            [100, 100, 20],
            [100, 20, 100],
            [20, 100, 100],
            [100, 20, 20],
            [20, 100, 20],
            [20, 20, 100],
        ]);
        if white_background() {
            palette.invert();
        }
        palette
    }

    /// Replace every channel `c` with `100 - c`.
    pub fn invert(&mut self) {
        for colour in &mut self.0 {
            for c in colour.iter_mut() {
                *c = 100 - *c;
            }
        }
    }
}

impl From<Vec<[u8; 3]>> for Palette {
    fn from(colours: Vec<[u8; 3]>) -> Self {
        Self(colours)
    }
}

/// Whether the `WHITEBG` environment variable is present.
///
/// Only presence is checked; the value is never read.
pub fn white_background() -> bool {
    std::env::var_os("WHITEBG").is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_spans_full_range() {
        let p = Palette::gray(101);
        assert_eq!(p.len(), 101);
        assert_eq!(p.get(0), [0, 0, 0]);
        assert_eq!(p.get(50), [50, 50, 50]);
        assert_eq!(p.get(100), [100, 100, 100]);
    }

    #[test]
    fn hot_starts_black_ends_white() {
        let p = Palette::hot(101);
        assert_eq!(p.get(0), [0, 0, 0]);
        assert_eq!(p.get(100), [100, 100, 100]);
        // red channel saturates first
        let mid = p.get(40);
        assert_eq!(mid[0], 100);
        assert!(mid[2] < mid[1]);
    }

    #[test]
    fn jet_is_blue_to_red() {
        let p = Palette::jet(101);
        let first = p.get(0);
        let last = p.get(100);
        assert!(first[2] > first[0]);
        assert!(last[0] > last[2]);
    }

    #[test]
    fn invert_flips_channels() {
        let mut p = Palette::new(vec![[0, 30, 100]]);
        p.invert();
        assert_eq!(p.get(0), [100, 70, 0]);
    }
}
