//! The plotting session: accumulate elements, lay out axes, render.
//!
//! A [`Figure`] collects plot elements through chained builder calls while
//! in its accumulating state, then renders everything in one pass: resolve
//! axis limits and tick spacing, draw gridlines and labels, draw the
//! elements in insertion order, and hand the finished canvas to the sixel
//! encoder. Rendering happens through an explicit [`Figure::show`] or, for
//! a figure dropped with unrendered content, from the drop guard.

use std::io::{self, Write};

use crate::draw::{render_line, render_text};
use crate::encoder::encode;
use crate::font::Font;
use crate::palette::Palette;
use crate::surface::Image;
use crate::{SixelError, SixelResult};

/// Colour and dash settings shared by line-like plot elements.
#[derive(Debug, Clone, Copy)]
pub struct LineStyle {
    /// Palette index; `None` picks the next colour in the cycling default.
    pub colour: Option<usize>,
    /// Dash repeat period in pixels; 0 draws a solid line.
    pub stipple: u32,
    /// Fraction of each stipple period that is drawn.
    pub stipple_frac: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            colour: None,
            stipple: 0,
            stipple_frac: 0.5,
        }
    }
}

impl LineStyle {
    pub fn colour(mut self, index: usize) -> Self {
        self.colour = Some(index);
        self
    }

    pub fn stipple(mut self, period: u32, frac: f32) -> Self {
        self.stipple = period;
        self.stipple_frac = frac;
        self
    }
}

/// Placement and colour settings for text annotations.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    /// Fractional anchor within the text block; (0.5, 0.5) centres it.
    pub anchor: (f32, f32),
    /// Palette index for the glyphs.
    pub colour: usize,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            anchor: (0.5, 0.5),
            colour: 1,
        }
    }
}

impl TextStyle {
    pub fn anchor(mut self, x: f32, y: f32) -> Self {
        self.anchor = (x, y);
        self
    }

    pub fn colour(mut self, index: usize) -> Self {
        self.colour = index;
        self
    }
}

#[derive(Debug)]
enum Element {
    Segment {
        a: (f32, f32),
        b: (f32, f32),
        style: LineStyle,
    },
    Series {
        y: Vec<f32>,
        style: LineStyle,
    },
    SeriesXY {
        x: Vec<f32>,
        y: Vec<f32>,
        style: LineStyle,
    },
    Label {
        text: String,
        pos: (f32, f32),
        style: TextStyle,
    },
}

/// A terminal plot under construction.
///
/// ```no_run
/// use termsixel::{Figure, LineStyle};
///
/// let y = vec![1.0_f32, 5.0, 2.0];
/// let mut fig = Figure::new(768, 256);
/// fig.grid(true, true)?
///     .plot(&y, LineStyle::default().stipple(10, 0.5))?
///     .text("my plot", 1.0, 4.0, Default::default())?;
/// fig.show()?;
/// # Ok::<(), termsixel::SixelError>(())
/// ```
#[derive(Debug)]
pub struct Figure {
    canvas_size: (usize, usize),
    palette: Palette,
    zero_is_transparent: bool,
    font: Font,
    rendered: bool,
    tick_spacing: [Option<f32>; 2],
    grid: [bool; 2],
    xlim: Option<(f32, f32)>,
    ylim: Option<(f32, f32)>,
    elements: Vec<Element>,
}

impl Default for Figure {
    fn default() -> Self {
        Self::new(600, 200)
    }
}

struct Layout {
    margin_left: usize,
    margin_top: usize,
    plot_width: usize,
    plot_height: usize,
    xlim: (f32, f32),
    ylim: (f32, f32),
    x_spacing: f32,
    y_spacing: f32,
    show_xticks: bool,
    show_yticks: bool,
}

impl Layout {
    /// Linear data-to-pixel mapping; y is inverted so that data-space up is
    /// pixel-space down.
    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        let px = (self.plot_width - 1) as f32 * (x - self.xlim.0) / (self.xlim.1 - self.xlim.0);
        let py = (self.plot_height - 1) as f32
            * (1.0 - (y - self.ylim.0) / (self.ylim.1 - self.ylim.0));
        (px + self.margin_left as f32, py + self.margin_top as f32)
    }
}

impl Figure {
    /// Start a figure with the given canvas size in pixels.
    ///
    /// The default palette is [`Palette::plot_default`], resolved (including
    /// the `WHITEBG` inversion) at construction.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            canvas_size: (width, height),
            palette: Palette::plot_default(),
            zero_is_transparent: true,
            font: Font::default(),
            rendered: false,
            tick_spacing: [None, None],
            grid: [true, true],
            xlim: None,
            ylim: None,
            elements: Vec::new(),
        }
    }

    fn accumulating(&self) -> SixelResult<()> {
        if self.rendered {
            Err(SixelError::FigureAlreadyRendered)
        } else {
            Ok(())
        }
    }

    /// Add a line segment from `(x0, y0)` to `(x1, y1)` in data coordinates.
    pub fn line(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        style: LineStyle,
    ) -> SixelResult<&mut Self> {
        self.accumulating()?;
        self.elements.push(Element::Segment {
            a: (x0, y0),
            b: (x1, y1),
            style,
        });
        Ok(self)
    }

    /// Plot `y` values against their index.
    pub fn plot(&mut self, y: &[f32], style: LineStyle) -> SixelResult<&mut Self> {
        self.accumulating()?;
        self.elements.push(Element::Series {
            y: y.to_vec(),
            style,
        });
        Ok(self)
    }

    /// Plot `y` values against `x` values; the slices must have equal length.
    pub fn plot_xy(&mut self, x: &[f32], y: &[f32], style: LineStyle) -> SixelResult<&mut Self> {
        self.accumulating()?;
        if x.len() != y.len() {
            return Err(SixelError::SeriesLengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        self.elements.push(Element::SeriesXY {
            x: x.to_vec(),
            y: y.to_vec(),
            style,
        });
        Ok(self)
    }

    /// Add a text annotation anchored at `(x, y)` in data coordinates.
    pub fn text(&mut self, text: &str, x: f32, y: f32, style: TextStyle) -> SixelResult<&mut Self> {
        self.accumulating()?;
        self.elements.push(Element::Label {
            text: text.to_owned(),
            pos: (x, y),
            style,
        });
        Ok(self)
    }

    /// Fix the x-axis limits. May only be set once per session.
    pub fn xlim(&mut self, min: f32, max: f32) -> SixelResult<&mut Self> {
        self.accumulating()?;
        if self.xlim.is_some() {
            return Err(SixelError::LimitAlreadySet { axis: "x" });
        }
        self.xlim = Some((min, max));
        Ok(self)
    }

    /// Fix the y-axis limits. May only be set once per session.
    pub fn ylim(&mut self, min: f32, max: f32) -> SixelResult<&mut Self> {
        self.accumulating()?;
        if self.ylim.is_some() {
            return Err(SixelError::LimitAlreadySet { axis: "y" });
        }
        self.ylim = Some((min, max));
        Ok(self)
    }

    /// Set the x tick spacing; zero or negative hides x ticks and labels.
    pub fn xticks(&mut self, spacing: f32) -> SixelResult<&mut Self> {
        self.accumulating()?;
        self.tick_spacing[0] = Some(spacing);
        Ok(self)
    }

    /// Set the y tick spacing; zero or negative hides y ticks and labels.
    pub fn yticks(&mut self, spacing: f32) -> SixelResult<&mut Self> {
        self.accumulating()?;
        self.tick_spacing[1] = Some(spacing);
        Ok(self)
    }

    /// Toggle gridline visibility per axis.
    pub fn grid(&mut self, show_xgrid: bool, show_ygrid: bool) -> SixelResult<&mut Self> {
        self.accumulating()?;
        self.grid = [show_xgrid, show_ygrid];
        Ok(self)
    }

    /// Replace the palette used for this figure.
    pub fn palette(&mut self, palette: Palette) -> SixelResult<&mut Self> {
        self.accumulating()?;
        self.palette = palette;
        Ok(self)
    }

    /// Whether palette entry 0 is left undrawn (default: true).
    pub fn transparent(&mut self, is_transparent: bool) -> SixelResult<&mut Self> {
        self.accumulating()?;
        self.zero_is_transparent = is_transparent;
        Ok(self)
    }

    /// Select the font used for tick labels and annotations.
    pub fn font_size(&mut self, size: usize) -> SixelResult<&mut Self> {
        self.accumulating()?;
        self.font = Font::for_size(size)?;
        Ok(self)
    }

    /// Discard accumulated elements, manual limits and tick settings, and
    /// return the figure to its accumulating state.
    pub fn reset(&mut self) -> &mut Self {
        self.elements.clear();
        self.xlim = None;
        self.ylim = None;
        self.tick_spacing = [None, None];
        self.rendered = false;
        self
    }

    /// Render the figure to the terminal.
    ///
    /// Draws gridlines, ticks and labels, then every accumulated element in
    /// insertion order, encodes the canvas and writes it to standard output.
    /// The figure transitions to its rendered state and further calls are
    /// no-ops.
    pub fn show(&mut self) -> SixelResult<()> {
        if self.rendered || self.elements.is_empty() {
            return Ok(());
        }
        let out = self.render_sixel()?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(out.as_bytes())?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
        Ok(())
    }

    /// Resolve limits, tick spacing and margins for the current contents.
    fn layout(&self) -> Layout {
        let font_w = self.font.width();
        let font_h = self.font.height();
        let margin_left = 10 * font_w;
        let margin_bottom = 2 * font_h;
        let margin_right = 3 * font_w;
        let margin_top = font_h;
        let plot_width = self
            .canvas_size
            .0
            .saturating_sub(margin_left + margin_right)
            .max(1);
        let plot_height = self
            .canvas_size
            .1
            .saturating_sub(margin_bottom + margin_top)
            .max(1);

        let xlim_manual = self.xlim.is_some();
        let ylim_manual = self.ylim.is_some();
        let mut xlim = sanitize_lim(self.xlim.unwrap_or_else(|| self.auto_xlim()));
        let mut ylim = sanitize_lim(self.ylim.unwrap_or_else(|| self.auto_ylim()));

        let mut x_spacing = compute_tick_spacing(xlim, plot_width as f32 / (8.0 * font_w as f32));
        let mut y_spacing = compute_tick_spacing(ylim, plot_height as f32 / (2.0 * font_h as f32));

        if !xlim_manual {
            xlim = refine_lim(xlim, x_spacing);
        }
        if !ylim_manual {
            ylim = refine_lim(ylim, y_spacing);
        }

        if let Some(s) = self.tick_spacing[0] {
            if s > 0.0 {
                x_spacing = s;
            }
        }
        if let Some(s) = self.tick_spacing[1] {
            if s > 0.0 {
                y_spacing = s;
            }
        }

        Layout {
            margin_left,
            margin_top,
            plot_width,
            plot_height,
            xlim,
            ylim,
            x_spacing,
            y_spacing,
            show_xticks: self.tick_spacing[0].map_or(true, |s| s > 0.0),
            show_yticks: self.tick_spacing[1].map_or(true, |s| s > 0.0),
        }
    }

    fn render_sixel(&mut self) -> SixelResult<String> {
        let mut canvas: Image<u8> = Image::new(self.canvas_size.0, self.canvas_size.1);
        let layout = self.layout();
        log::debug!(
            "rendering {}x{} figure, x {:?} spacing {}, y {:?} spacing {}",
            self.canvas_size.0,
            self.canvas_size.1,
            layout.xlim,
            layout.x_spacing,
            layout.ylim,
            layout.y_spacing
        );

        // vertical gridlines, x tick marks and labels
        let mut n = (layout.xlim.0 / layout.x_spacing).ceil() as i64;
        while (n as f32) <= layout.xlim.1 / layout.x_spacing {
            let x = n as f32 * layout.x_spacing;
            let a = layout.map(x, layout.ylim.0);
            let b = layout.map(x, layout.ylim.1);
            if self.grid[0] {
                let frac = if n == 0 { 0.7 } else { 0.1 };
                render_line(&mut canvas, a.0, a.1, b.0, b.1, 1, 10, frac);
            }
            if layout.show_xticks {
                let label = format_tick(x);
                render_text(&mut canvas, &label, a.0, a.1, 0.5, 1.5, 1, &self.font);
                render_line(&mut canvas, a.0, a.1, a.0, a.1 - 5.0, 1, 0, 0.5);
            }
            n += 1;
        }

        // horizontal gridlines, y tick marks and labels
        let mut n = (layout.ylim.0 / layout.y_spacing).ceil() as i64;
        while (n as f32) <= layout.ylim.1 / layout.y_spacing {
            let y = n as f32 * layout.y_spacing;
            let a = layout.map(layout.xlim.0, y);
            let b = layout.map(layout.xlim.1, y);
            if self.grid[1] {
                let frac = if n == 0 { 0.7 } else { 0.1 };
                render_line(&mut canvas, a.0, a.1, b.0, b.1, 1, 10, frac);
            }
            if layout.show_yticks {
                let label = format!("{} ", format_tick(y));
                render_text(&mut canvas, &label, a.0, a.1, 1.0, 0.5, 1, &self.font);
                render_line(&mut canvas, a.0, a.1, a.0 + 5.0, a.1, 1, 0, 0.5);
            }
            n += 1;
        }

        // plot elements, in insertion order
        let mut next_colour = 2usize;
        for element in &self.elements {
            match element {
                Element::Segment { a, b, style } => {
                    let colour = self.resolve_colour(style.colour, &mut next_colour);
                    let pa = layout.map(a.0, a.1);
                    let pb = layout.map(b.0, b.1);
                    render_line(
                        &mut canvas,
                        pa.0,
                        pa.1,
                        pb.0,
                        pb.1,
                        colour,
                        style.stipple,
                        style.stipple_frac,
                    );
                }
                Element::Series { y, style } => {
                    let colour = self.resolve_colour(style.colour, &mut next_colour);
                    for (n, pair) in y.windows(2).enumerate() {
                        let pa = layout.map(n as f32, pair[0]);
                        let pb = layout.map((n + 1) as f32, pair[1]);
                        render_line(
                            &mut canvas,
                            pa.0,
                            pa.1,
                            pb.0,
                            pb.1,
                            colour,
                            style.stipple,
                            style.stipple_frac,
                        );
                    }
                }
                Element::SeriesXY { x, y, style } => {
                    let colour = self.resolve_colour(style.colour, &mut next_colour);
                    for n in 0..x.len().saturating_sub(1) {
                        let pa = layout.map(x[n], y[n]);
                        let pb = layout.map(x[n + 1], y[n + 1]);
                        render_line(
                            &mut canvas,
                            pa.0,
                            pa.1,
                            pb.0,
                            pb.1,
                            colour,
                            style.stipple,
                            style.stipple_frac,
                        );
                    }
                }
                Element::Label { text, pos, style } => {
                    let colour = self.colour_in_palette(style.colour);
                    let p = layout.map(pos.0, pos.1);
                    render_text(
                        &mut canvas,
                        text,
                        p.0,
                        p.1,
                        style.anchor.0,
                        style.anchor.1,
                        colour,
                        &self.font,
                    );
                }
            }
        }

        let out = encode(&canvas, &self.palette, self.zero_is_transparent)?;
        self.elements.clear();
        self.rendered = true;
        Ok(out)
    }

    fn resolve_colour(&self, requested: Option<usize>, next_colour: &mut usize) -> u8 {
        let index = match requested {
            Some(index) => index,
            None => {
                let index = *next_colour;
                *next_colour += 1;
                index
            }
        };
        self.colour_in_palette(index)
    }

    /// Wrap an out-of-range colour index back into the palette, starting
    /// from index 2; indices 0 and 1 keep their background/foreground roles.
    fn colour_in_palette(&self, mut index: usize) -> u8 {
        let len = self.palette.len();
        if len <= 2 {
            return index.min(len.saturating_sub(1)) as u8;
        }
        while index >= len {
            index -= len - 2;
        }
        index as u8
    }

    fn auto_xlim(&self) -> (f32, f32) {
        let mut lim = (f32::INFINITY, f32::NEG_INFINITY);
        for element in &self.elements {
            match element {
                Element::Segment { a, b, .. } => {
                    lim.0 = lim.0.min(a.0.min(b.0));
                    lim.1 = lim.1.max(a.0.max(b.0));
                }
                Element::Series { y, .. } => {
                    lim.0 = lim.0.min(0.0);
                    lim.1 = lim.1.max(y.len() as f32 - 1.0);
                }
                Element::SeriesXY { x, .. } => {
                    for &v in x {
                        lim.0 = lim.0.min(v);
                        lim.1 = lim.1.max(v);
                    }
                }
                Element::Label { .. } => {}
            }
        }
        lim
    }

    fn auto_ylim(&self) -> (f32, f32) {
        let mut lim = (f32::INFINITY, f32::NEG_INFINITY);
        for element in &self.elements {
            match element {
                Element::Segment { a, b, .. } => {
                    lim.0 = lim.0.min(a.1.min(b.1));
                    lim.1 = lim.1.max(a.1.max(b.1));
                }
                Element::Series { y, .. } | Element::SeriesXY { y, .. } => {
                    for &v in y {
                        lim.0 = lim.0.min(v);
                        lim.1 = lim.1.max(v);
                    }
                }
                Element::Label { .. } => {}
            }
        }
        lim
    }
}

impl Drop for Figure {
    fn drop(&mut self) {
        if !self.rendered && !self.elements.is_empty() {
            if let Err(err) = self.show() {
                log::warn!("figure render failed during drop: {err}");
            }
        }
    }
}

/// Choose a "nice" tick interval (2, 5 or 10 times a power of ten) close to
/// `range / desired_ticks`.
fn compute_tick_spacing(lim: (f32, f32), desired_ticks: f32) -> f32 {
    let raw = f64::from(lim.1 - lim.0) / f64::from(desired_ticks);
    let mult = 10.0_f64.powf(raw.log10().floor());
    let scaled = raw / mult;
    let spacing = if scaled < 2.0 {
        2.0 * mult
    } else if scaled < 5.0 {
        5.0 * mult
    } else {
        10.0 * mult
    };
    spacing as f32
}

/// Snap limits outward to the nearest multiples of the tick spacing.
fn refine_lim(lim: (f32, f32), spacing: f32) -> (f32, f32) {
    (
        spacing * (lim.0 / spacing).floor(),
        spacing * (lim.1 / spacing).ceil(),
    )
}

/// Fall back to a usable interval when limits are degenerate: no finite
/// contribution at all maps to the unit interval, an empty range is expanded
/// around its value.
fn sanitize_lim(lim: (f32, f32)) -> (f32, f32) {
    if !lim.0.is_finite() || !lim.1.is_finite() {
        return (0.0, 1.0);
    }
    if lim.0 == lim.1 {
        return (lim.0 - 0.5, lim.1 + 0.5);
    }
    lim
}

/// Tick label with about three significant digits.
fn format_tick(value: f32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let abs = value.abs();
    if !(1e-3..1e4).contains(&abs) {
        return format!("{value:.0e}");
    }
    let formatted = format!("{value:.3}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
