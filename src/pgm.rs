//! Loader for ASCII-encoded (`P2`) PGM grayscale images.

use std::fs;
use std::path::Path;

use crate::surface::{Image, SurfaceMut};
use crate::{SixelError, SixelResult};

/// Sample types a PGM file can be loaded into.
pub trait PgmSample: Copy + Default {
    /// Largest maxval this sample type can hold.
    const MAX: u32;

    fn from_sample(value: u32) -> Self;
}

impl PgmSample for u8 {
    const MAX: u32 = u8::MAX as u32;

    fn from_sample(value: u32) -> Self {
        value as u8
    }
}

impl PgmSample for u16 {
    const MAX: u32 = u16::MAX as u32;

    fn from_sample(value: u32) -> Self {
        value as u16
    }
}

impl PgmSample for f32 {
    const MAX: u32 = 65535;

    fn from_sample(value: u32) -> Self {
        value as f32
    }
}

/// Load an ASCII PGM file into an [`Image`].
///
/// Comments starting with `#` are stripped to end of line before the file
/// is tokenized. The header must carry the `P2` magic, positive dimensions
/// and a maxval in `(0, 65536)` that fits the destination sample type.
pub fn load_pgm<T: PgmSample>(path: impl AsRef<Path>) -> SixelResult<Image<T>> {
    let path = path.as_ref();
    let file = path.display().to_string();

    let contents = fs::read_to_string(path).map_err(|source| SixelError::PgmOpen {
        file: file.clone(),
        source,
    })?;

    // strip comments before tokenizing
    let cleaned: String = contents
        .lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .collect::<Vec<_>>()
        .join("\n");
    let mut tokens = cleaned.split_whitespace();

    let magic = tokens.next().unwrap_or("");
    if magic != "P2" {
        return Err(SixelError::PgmBadMagic(file));
    }

    let mut header = |name: &str| -> SixelResult<i64> {
        tokens
            .next()
            .ok_or_else(|| SixelError::PgmMalformed {
                file: file.clone(),
                reason: format!("missing {name}"),
            })?
            .parse()
            .map_err(|_| SixelError::PgmMalformed {
                file: file.clone(),
                reason: format!("invalid {name}"),
            })
    };

    let width = header("width")?;
    let height = header("height")?;
    let maxval = header("maxval")?;

    if width <= 0 || height <= 0 {
        return Err(SixelError::PgmMalformed {
            file,
            reason: format!("invalid dimensions {width} x {height}"),
        });
    }
    if maxval <= 0 {
        return Err(SixelError::PgmMalformed {
            file,
            reason: "maxval lower than or equal to zero".to_string(),
        });
    }
    if maxval >= 65536 {
        return Err(SixelError::PgmMalformed {
            file,
            reason: "maxval exceeds 65536".to_string(),
        });
    }
    if maxval as u32 > T::MAX {
        return Err(SixelError::PgmMaxvalOverflow {
            file,
            maxval: maxval as u32,
        });
    }

    let (width, height) = (width as usize, height as usize);
    let mut image: Image<T> = Image::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let value: u32 = tokens
                .next()
                .ok_or_else(|| SixelError::PgmMalformed {
                    file: file.clone(),
                    reason: format!("expected {} samples", width * height),
                })?
                .parse()
                .map_err(|_| SixelError::PgmMalformed {
                    file: file.clone(),
                    reason: format!("invalid sample at ({x}, {y})"),
                })?;
            image.set(x, y, T::from_sample(value));
        }
    }

    log::debug!("loaded {file}: {width} x {height}, maxval {maxval}");
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Surface;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("termsixel-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_simple_pgm() {
        let path = write_temp("simple.pgm", "P2\n3 2\n255\n0 1 2\n3 4 5\n");
        let image: Image<u8> = load_pgm(&path).unwrap();
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.get(0, 0), 0);
        assert_eq!(image.get(2, 1), 5);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn strips_comments() {
        let path = write_temp(
            "comments.pgm",
            "P2 # ascii pgm\n# a full-line comment\n2 1\n10\n7 8 # trailing\n",
        );
        let image: Image<u8> = load_pgm(&path).unwrap();
        assert_eq!(image.get(1, 0), 8);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn rejects_wrong_magic() {
        let path = write_temp("magic.pgm", "P5\n1 1\n255\n0\n");
        assert!(matches!(
            load_pgm::<u8>(&path),
            Err(SixelError::PgmBadMagic(_))
        ));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn rejects_bad_maxval() {
        let path = write_temp("maxval0.pgm", "P2\n1 1\n0\n0\n");
        assert!(matches!(
            load_pgm::<u8>(&path),
            Err(SixelError::PgmMalformed { .. })
        ));
        fs::remove_file(path).unwrap();

        let path = write_temp("maxvalbig.pgm", "P2\n1 1\n70000\n0\n");
        assert!(matches!(
            load_pgm::<u16>(&path),
            Err(SixelError::PgmMalformed { .. })
        ));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn rejects_maxval_overflowing_sample_type() {
        let path = write_temp("maxval16.pgm", "P2\n1 1\n1000\n0\n");
        assert!(matches!(
            load_pgm::<u8>(&path),
            Err(SixelError::PgmMaxvalOverflow { maxval: 1000, .. })
        ));
        // but a wider sample type accepts it
        assert!(load_pgm::<u16>(&path).is_ok());
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn rejects_truncated_samples() {
        let path = write_temp("short.pgm", "P2\n2 2\n255\n1 2 3\n");
        assert!(matches!(
            load_pgm::<u8>(&path),
            Err(SixelError::PgmMalformed { .. })
        ));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_reports_name() {
        let err = load_pgm::<u8>("/no/such/file.pgm").unwrap_err();
        assert!(err.to_string().contains("/no/such/file.pgm"));
    }
}
