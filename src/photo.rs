//! Loading and orientation correction for the profile photo.

use std::fmt;
use std::io;
use std::path::Path;

use image::DynamicImage;

/// Errors raised while reading the profile photo.
///
/// These are recoverable: the assembler drops the photo from the layout and
/// continues with the text-only header.  Renderer failures are deliberately
/// kept out of this type.
#[derive(Debug)]
pub enum PhotoError {
    /// The file could not be opened or read.
    Open(io::Error),
    /// The file contents could not be decoded as an image.
    Decode(image::ImageError),
}

impl fmt::Display for PhotoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open(err) => write!(f, "Failed to read photo file: {err}"),
            Self::Decode(err) => write!(f, "Failed to decode photo: {err}"),
        }
    }
}

impl std::error::Error for PhotoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open(err) => Some(err),
            Self::Decode(err) => Some(err),
        }
    }
}

/// Reads the photo at `path` and rotates it half a turn.
///
/// The source photo is stored upside down; the rotation brings it into the
/// expected orientation.
pub fn load_profile_photo(path: impl AsRef<Path>) -> Result<DynamicImage, PhotoError> {
    let photo = image::io::Reader::open(path.as_ref())
        .map_err(PhotoError::Open)?
        .with_guessed_format()
        .map_err(PhotoError::Open)?
        .decode()
        .map_err(PhotoError::Decode)?;
    Ok(photo.rotate180())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgb, RgbImage, Rgba};

    #[test]
    fn missing_file_reports_open_error() {
        let err = load_profile_photo("no-such-photo.jpg").unwrap_err();
        assert!(matches!(err, PhotoError::Open(_)));
    }

    #[test]
    fn unreadable_contents_report_decode_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("photo.jpg");
        std::fs::write(&path, b"definitely not an image").expect("write file");

        let err = load_profile_photo(&path).unwrap_err();
        assert!(matches!(err, PhotoError::Decode(_)));
    }

    #[test]
    fn photo_is_rotated_half_a_turn() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("photo.png");

        let mut pixels = RgbImage::new(2, 1);
        pixels.put_pixel(0, 0, Rgb([255, 0, 0]));
        pixels.put_pixel(1, 0, Rgb([0, 0, 255]));
        pixels.save(&path).expect("write png");

        let photo = load_profile_photo(&path).expect("load photo");
        assert_eq!(photo.dimensions(), (2, 1));
        assert_eq!(photo.get_pixel(0, 0), Rgba([0, 0, 255, 255]));
        assert_eq!(photo.get_pixel(1, 0), Rgba([255, 0, 0, 255]));
    }
}
