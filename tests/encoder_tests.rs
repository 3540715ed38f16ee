use pretty_assertions::assert_eq;
use termsixel::{encode, Image, Palette, Surface, SurfaceMut};

/// Minimal reference decoder: reconstructs per-pixel palette indices from a
/// sixel stream, enough to verify the encoder round-trips.
fn decode(sixel: &str, width: usize, height: usize) -> Vec<Vec<u8>> {
    let mut grid = vec![vec![0u8; width]; height];

    let stream = sixel
        .strip_prefix("\x1bP9;1q")
        .expect("missing DCS introducer");
    let stream = stream.strip_suffix("\x1b\\").expect("missing terminator");

    let mut chars = stream.chars().peekable();
    let mut colour = 0u8;
    let mut band = 0usize;
    let mut x = 0usize;

    fn number(chars: &mut std::iter::Peekable<std::str::Chars>) -> usize {
        let mut n = 0;
        while let Some(c) = chars.peek() {
            match c.to_digit(10) {
                Some(d) => {
                    n = n * 10 + d as usize;
                    chars.next();
                }
                None => break,
            }
        }
        n
    }

    let mut apply = |mask: u8, count: usize, band: usize, x: &mut usize, colour: u8| {
        for _ in 0..count {
            for bit in 0..6 {
                let y = band * 6 + bit;
                if y < height && mask & (1 << bit) != 0 {
                    assert!(*x < width, "sixel data exceeds image width");
                    grid[y][*x] = colour;
                }
            }
            *x += 1;
        }
    };

    while let Some(c) = chars.next() {
        match c {
            '#' => {
                let n = number(&mut chars);
                if chars.peek() == Some(&';') {
                    // colour definition: consume ;2;R;G;B
                    for _ in 0..4 {
                        chars.next();
                        number(&mut chars);
                    }
                } else {
                    colour = n as u8;
                }
            }
            '!' => {
                let count = number(&mut chars);
                let mask = chars.next().unwrap() as u8 - 63;
                apply(mask, count, band, &mut x, colour);
            }
            '$' => x = 0,
            '-' => {
                band += 1;
                x = 0;
            }
            '?'..='~' => apply(c as u8 - 63, 1, band, &mut x, colour),
            other => panic!("unexpected byte {other:?} in sixel stream"),
        }
    }

    grid
}

fn palette(n: usize) -> Palette {
    Palette::new((0..n).map(|i| [(i * 10) as u8, 0, 0]).collect())
}

#[test]
fn roundtrip_reconstructs_all_indices() {
    // 13x9: two bands, the second only 3 rows tall
    let mut image: Image<u8> = Image::new(13, 9);
    for y in 0..9 {
        for x in 0..13 {
            image.set(x, y, ((x * 3 + y * 7) % 4) as u8);
        }
    }

    let sixel = encode(&image, &palette(4), false).unwrap();
    let decoded = decode(&sixel, 13, 9);
    for y in 0..9 {
        for x in 0..13 {
            assert_eq!(decoded[y][x], image.get(x, y), "pixel ({x}, {y})");
        }
    }
}

#[test]
fn run_of_three_is_inline_and_four_is_compressed() {
    let mut three: Image<u8> = Image::new(3, 1);
    let mut four: Image<u8> = Image::new(4, 1);
    for x in 0..3 {
        three.set(x, 0, 1);
    }
    for x in 0..4 {
        four.set(x, 0, 1);
    }

    let sixel3 = encode(&three, &palette(2), true).unwrap();
    let sixel4 = encode(&four, &palette(2), true).unwrap();
    assert!(sixel3.contains("#1@@@"), "run of 3 must stay inline");
    assert!(!sixel3.contains('!'), "run of 3 must not use a repeat token");
    assert!(sixel4.contains("#1!4@"), "run of 4 must use a repeat token");
}

#[test]
fn known_mask_sequence_encodes_expected_runs() {
    // columns 4..=10 carry mask 0b101 (rows 0 and 2 set) in a 3-row band:
    // 4 blank columns inline-compressed as !4, then a run of 7, tail dropped
    let mut image: Image<u8> = Image::new(12, 3);
    for x in 4..11 {
        image.set(x, 0, 1);
        image.set(x, 2, 1);
    }

    let sixel = encode(&image, &palette(2), true).unwrap();
    assert!(sixel.contains("#1!4?!7D"), "got: {sixel}");
}

#[test]
fn transparency_changes_nothing_without_background_pixels() {
    let mut image: Image<u8> = Image::new(7, 7);
    for y in 0..7 {
        for x in 0..7 {
            image.set(x, y, 1 + ((x + y) % 2) as u8);
        }
    }

    let opaque = encode(&image, &palette(3), false).unwrap();
    let transparent = encode(&image, &palette(3), true).unwrap();
    assert_eq!(opaque, transparent);
}

#[test]
fn all_background_image_emits_empty_bands_when_transparent() {
    let image: Image<u8> = Image::new(5, 6);

    let transparent = encode(&image, &palette(2), true).unwrap();
    let opaque = encode(&image, &palette(2), false).unwrap();

    // with transparency on, the band holds no colour rows at all
    assert!(transparent.ends_with("-\x1b\\"));
    let body = transparent.strip_suffix("-\x1b\\").unwrap();
    assert!(!body[body.rfind('q').unwrap()..].contains('!'));

    // with it off, index 0 paints the full band
    assert!(opaque.contains("#0!5~"));
}

#[test]
fn single_centre_pixel_scenario() {
    let mut image: Image<u8> = Image::new(3, 3);
    image.set(1, 1, 1);

    let opaque = encode(&image, &palette(2), false).unwrap();
    let transparent = encode(&image, &palette(2), true).unwrap();

    // colour 1 row: blank column, bit 1 at the centre column, tail dropped
    assert!(opaque.contains("#1?A"), "got: {opaque}");
    assert!(transparent.contains("#1?A"), "got: {transparent}");

    // background row present only in the opaque rendering
    assert!(opaque.contains("#0FDF"), "got: {opaque}");
    assert!(!transparent[transparent.find('q').unwrap()..].contains("#0F"));

    let decoded = decode(&opaque, 3, 3);
    assert_eq!(decoded[1][1], 1);
    assert_eq!(decoded[0][0], 0);
}

#[test]
fn short_final_band_masks_stay_in_range() {
    // 8 rows: second band is 2 rows tall, masks must use bits 0-1 only
    let mut image: Image<u8> = Image::new(2, 8);
    for y in 0..8 {
        image.set(0, y, 1);
        image.set(1, y, 1);
    }

    let sixel = encode(&image, &palette(2), true).unwrap();
    let bands: Vec<&str> = sixel.split('-').collect();
    assert_eq!(bands.len(), 3); // two bands plus the trailer
    assert!(bands[0].contains("~~"), "full band uses mask 63");
    assert!(bands[1].contains("BB"), "short band uses mask 3");

    let decoded = decode(&sixel, 2, 8);
    for y in 0..8 {
        assert_eq!(decoded[y][0], 1);
        assert_eq!(decoded[y][1], 1);
    }
}
