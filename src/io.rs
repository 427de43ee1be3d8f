//! Loading and saving images.
//!
//! - `load_rgb_image`: decode any format the `image` crate knows into 8-bit RGB.
//! - `save_png`: write an RGB buffer as PNG, whatever the file extension says.
use std::fs;
use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::error::{Result, SeamError};

/// Load an image from disk and convert it to 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbImage> {
    let image = image::open(path).map_err(|source| SeamError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image.into_rgb8())
}

/// Save an RGB buffer to `path` as PNG, creating parent directories.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(SeamError::EmptyOutputPath);
    }
    ensure_parent_dir(path)?;
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| SeamError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("saved {}", path.display());
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| SeamError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_missing_input_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_rgb_image(&dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, SeamError::Decode { .. }));
    }

    #[test]
    fn test_garbage_input_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(
            load_rgb_image(&path),
            Err(SeamError::Decode { .. })
        ));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.png");
        let image = RgbImage::from_fn(4, 3, |x, y| Rgb([x as u8 * 60, y as u8 * 80, 7]));

        save_png(&image, &path).unwrap();
        assert_eq!(load_rgb_image(&path).unwrap(), image);
    }

    #[test]
    fn test_png_is_forced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        save_png(&RgbImage::new(2, 2), &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }

    #[test]
    fn test_empty_output_path() {
        let err = save_png(&RgbImage::new(1, 1), Path::new("")).unwrap_err();
        assert!(matches!(err, SeamError::EmptyOutputPath));
    }

    #[test]
    fn test_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let err = save_png(&RgbImage::new(1, 1), dir.path()).unwrap_err();
        assert!(matches!(err, SeamError::Encode { .. }));
    }
}
