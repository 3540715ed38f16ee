//! # termsixel
//!
//! Sixel images and simple line plots for the terminal.
//!
//! Graphics are emitted using the sixel protocol, which is not supported by
//! every terminal emulator. Known-good terminals at the time of writing
//! include WezTerm, mlterm and xterm on Linux, WezTerm and iTerm2 on macOS,
//! and WezTerm, minTTY and Windows Terminal (Preview) on Windows.
//!
//! ## Showing an image
//!
//! ```no_run
//! use termsixel::{imshow_scaled, load_pgm, Image, Palette};
//!
//! let image: Image<u8> = load_pgm("brain.pgm")?;
//! imshow_scaled(&image, 0.0, 255.0, &Palette::gray(101), false)?;
//! # Ok::<(), termsixel::SixelError>(())
//! ```
//!
//! ## Plotting data
//!
//! A [`Figure`] accumulates plot elements through chained builder calls and
//! renders them in one pass, either through an explicit [`Figure::show`] or
//! when the figure is dropped:
//!
//! ```no_run
//! use termsixel::Figure;
//!
//! let y: Vec<f32> = (0..50).map(|n| (0.2 * n as f32).sin()).collect();
//! let mut fig = Figure::new(768, 256);
//! fig.plot(&y, Default::default())?;
//! fig.show()?;
//! # Ok::<(), termsixel::SixelError>(())
//! ```

use thiserror::Error;

pub mod draw;
pub mod encoder;
pub mod figure;
pub mod font;
pub mod palette;
pub mod pgm;
pub mod surface;

pub use draw::{render_line, render_text};
pub use encoder::{encode, imshow, imshow_scaled};
pub use figure::{Figure, LineStyle, TextStyle};
pub use font::Font;
pub use palette::Palette;
pub use pgm::load_pgm;
pub use surface::{Image, Magnify, Rescale, Surface, SurfaceMut};

/// Result type for all termsixel operations
pub type SixelResult<T> = Result<T, SixelError>;

/// Number of pixel rows in one sixel band
pub(crate) const BAND_HEIGHT: usize = 6;

/// Largest palette the sixel colour registers can address
pub(crate) const PALETTE_MAX: usize = 256;

/// Errors reported by the encoder, the plotting layer and the PGM loader
#[derive(Debug, Error)]
pub enum SixelError {
    #[error("image width and height must be greater than zero")]
    EmptyImage,

    #[error("palette holds {0} colours, the sixel protocol allows at most 256")]
    PaletteTooLarge(usize),

    #[error("palette must hold at least one colour")]
    EmptyPalette,

    #[error("font size {0} not supported")]
    UnsupportedFontSize(usize),

    #[error("x and y series lengths do not match ({x} vs {y})")]
    SeriesLengthMismatch { x: usize, y: usize },

    #[error("{axis} limits already set; call reset() before setting them again")]
    LimitAlreadySet { axis: &'static str },

    #[error("figure already rendered; call reset() to start a new plot")]
    FigureAlreadyRendered,

    #[error("failed to open PGM file \"{file}\": {source}")]
    PgmOpen {
        file: String,
        source: std::io::Error,
    },

    #[error("input file \"{0}\" is not in expected PGM format")]
    PgmBadMagic(String),

    #[error("PGM file \"{file}\" is badly formed: {reason}")]
    PgmMalformed { file: String, reason: String },

    #[error("maximum intensity {maxval} in PGM file \"{file}\" exceeds range of data type used")]
    PgmMaxvalOverflow { file: String, maxval: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
