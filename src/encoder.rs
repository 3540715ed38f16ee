//! Run-length sixel encoder.
//!
//! Converts an indexed image plus a [`Palette`] into the sixel escape
//! sequence understood by the terminal. The image is partitioned into bands
//! of six pixel rows; within each band every palette index that occurs gets
//! one run-length-encoded row, rows are overlaid with `$` and bands are
//! separated with `-`.

use std::io::{self, Write};

use crate::surface::{Rescale, Surface};
use crate::{Palette, SixelError, SixelResult, BAND_HEIGHT, PALETTE_MAX};

/// Encode an indexed image into a sixel escape sequence.
///
/// Sample values are indices into `palette`. With `zero_is_transparent` set,
/// palette entry 0 is never drawn and the terminal background shows through
/// wherever the image holds index 0.
pub fn encode<S>(image: &S, palette: &Palette, zero_is_transparent: bool) -> SixelResult<String>
where
    S: Surface<Value = u8>,
{
    if image.width() == 0 || image.height() == 0 {
        return Err(SixelError::EmptyImage);
    }
    if palette.is_empty() {
        return Err(SixelError::EmptyPalette);
    }
    if palette.len() > PALETTE_MAX {
        return Err(SixelError::PaletteTooLarge(palette.len()));
    }

    let first_index = usize::from(zero_is_transparent);

    // DCS introducer: pixel aspect ratio 1:1, background select mode
    let mut out = String::from("\x1bP9;1q");
    palette_specifier(&mut out, palette);

    for y0 in (0..image.height()).step_by(BAND_HEIGHT) {
        encode_band(&mut out, image, first_index, palette.len(), y0);
    }

    // string terminator
    out.push_str("\x1b\\");
    Ok(out)
}

/// Display an indexed image on the terminal.
///
/// Writes the encoded stream to standard output and flushes. See [`encode`]
/// for the meaning of the arguments.
pub fn imshow<S>(image: &S, palette: &Palette, zero_is_transparent: bool) -> SixelResult<()>
where
    S: Surface<Value = u8>,
{
    let out = encode(image, palette, zero_is_transparent)?;
    log::debug!(
        "encoded {}x{} image into {} bytes",
        image.width(),
        image.height(),
        out.len()
    );
    let mut stdout = io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;
    Ok(())
}

/// Display a scalar image on the terminal, rescaled between `min` and `max`.
///
/// Values at or below `min` render as palette entry 0, values at or above
/// `max` as the last entry.
pub fn imshow_scaled<S>(
    image: &S,
    min: f64,
    max: f64,
    palette: &Palette,
    zero_is_transparent: bool,
) -> SixelResult<()>
where
    S: Surface,
    S::Value: Into<f64>,
{
    let rescaled = Rescale::new(image, min, max, palette.len());
    imshow(&rescaled, palette, zero_is_transparent)
}

/// Emit one colour register definition per palette entry: `#i;2;R;G;B`.
fn palette_specifier(out: &mut String, palette: &Palette) {
    for (i, colour) in palette.iter().enumerate() {
        out.push('#');
        write_number(out, i);
        out.push_str(";2;");
        write_number(out, colour[0] as usize);
        out.push(';');
        write_number(out, colour[1] as usize);
        out.push(';');
        write_number(out, colour[2] as usize);
    }
}

/// Encode one 6-row band, overlaying one run-length row per palette index
/// that occurs within it. Indices whose row is empty are skipped entirely.
fn encode_band<S>(out: &mut String, image: &S, first_index: usize, palette_len: usize, y0: usize)
where
    S: Surface<Value = u8>,
{
    let nsixels = usize::min(image.height() - y0, BAND_HEIGHT);

    let mut first = true;
    for index in first_index..palette_len {
        let row = encode_row(image, y0, nsixels, index as u8);
        if row.is_empty() {
            continue;
        }
        if first {
            first = false;
        } else {
            out.push('$');
        }
        out.push('#');
        write_number(out, index);
        out.push_str(&row);
    }
    out.push('-');
}

/// Run-length encode the 6-bit column masks of one palette index across a
/// band. Returns an empty string when the index never occurs, so the caller
/// can omit the colour select token altogether.
fn encode_row<S>(image: &S, y0: usize, nsixels: usize, index: u8) -> String
where
    S: Surface<Value = u8>,
{
    let mut out = String::new();
    let mut current: Option<u8> = None;
    let mut repeats = 0usize;

    for x in 0..image.width() {
        let mut mask = 0u8;
        for bit in 0..nsixels {
            if image.get(x, y0 + bit) == index {
                mask |= 1 << bit;
            }
        }
        if current == Some(mask) {
            repeats += 1;
            continue;
        }
        if let Some(previous) = current {
            commit(&mut out, previous, repeats);
        }
        current = Some(mask);
        repeats = 1;
    }

    // flush the final pending run; an all-blank tail carries no pixels and
    // needs no cursor advance, so it is dropped
    if let Some(previous) = current {
        if previous != 0 {
            commit(&mut out, previous, repeats);
        }
    }

    out
}

/// Write one run: short runs inline, longer runs as a `!<count>` repeat
/// token. Inline repetition is cheaper up to three characters.
fn commit(out: &mut String, mask: u8, repeats: usize) {
    let ch = (63 + mask) as char;
    if repeats <= 3 {
        for _ in 0..repeats {
            out.push(ch);
        }
    } else {
        out.push('!');
        write_number(out, repeats);
        out.push(ch);
    }
}

/// Fast number to string without allocation
#[inline]
fn write_number(out: &mut String, mut n: usize) {
    if n == 0 {
        out.push('0');
        return;
    }

    let mut buf = [0u8; 20];
    let mut i = buf.len();

    while n > 0 {
        i -= 1;
        buf[i] = b'0' + (n % 10) as u8;
        n /= 10;
    }

    for &digit in &buf[i..] {
        out.push(digit as char);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Image, SurfaceMut};

    fn two_colour() -> Palette {
        Palette::new(vec![[0, 0, 0], [100, 100, 100]])
    }

    #[test]
    fn framing_and_palette_block() {
        let image: Image<u8> = Image::new(1, 1);
        let sixel = encode(&image, &two_colour(), false).unwrap();
        assert!(sixel.starts_with("\x1bP9;1q"));
        assert!(sixel.ends_with("\x1b\\"));
        assert!(sixel.contains("#0;2;0;0;0"));
        assert!(sixel.contains("#1;2;100;100;100"));
    }

    #[test]
    fn empty_image_rejected() {
        let image: Image<u8> = Image::new(0, 4);
        assert!(matches!(
            encode(&image, &two_colour(), false),
            Err(SixelError::EmptyImage)
        ));
    }

    #[test]
    fn oversized_palette_rejected() {
        let image: Image<u8> = Image::new(1, 1);
        let palette = Palette::new(vec![[0, 0, 0]; 300]);
        assert!(matches!(
            encode(&image, &palette, false),
            Err(SixelError::PaletteTooLarge(300))
        ));
    }

    #[test]
    fn single_band_single_colour() {
        // 4 wide, 1 tall, all index 1: mask 0b000001 -> '@', run of 4 -> "!4@"
        let mut image: Image<u8> = Image::new(4, 1);
        for x in 0..4 {
            image.set(x, 0, 1);
        }
        let sixel = encode(&image, &two_colour(), true).unwrap();
        assert!(sixel.contains("#1!4@"));
    }

    #[test]
    fn leading_blank_run_advances_cursor() {
        // blank columns before a drawn pixel must still be encoded
        let mut image: Image<u8> = Image::new(3, 1);
        image.set(2, 0, 1);
        let sixel = encode(&image, &two_colour(), true).unwrap();
        assert!(sixel.contains("#1??@"));
    }

    #[test]
    fn trailing_blank_run_is_dropped() {
        let mut image: Image<u8> = Image::new(3, 1);
        image.set(0, 0, 1);
        let sixel = encode(&image, &two_colour(), true).unwrap();
        assert!(sixel.contains("#1@-"));
    }

    #[test]
    fn write_number_digits() {
        let mut out = String::new();
        write_number(&mut out, 0);
        write_number(&mut out, 7);
        write_number(&mut out, 1234);
        assert_eq!(out, "071234");
    }
}
