use crate::error::{Error, Result};
use image::{
    codecs::png::{CompressionType, FilterType, PngEncoder},
    ExtendedColorType, ImageEncoder, RgbaImage,
};
use std::path::Path;

/// Encodes an RGBA image as PNG, trading encoding time for file size.
pub fn encode(icon: &RgbaImage) -> Result<Vec<u8>, image::ImageError> {
    let mut buf = Vec::new();
    PngEncoder::new_with_quality(&mut buf, CompressionType::Best, FilterType::Adaptive)
        .write_image(
            icon.as_raw(),
            icon.width(),
            icon.height(),
            ExtendedColorType::Rgba8,
        )?;
    Ok(buf)
}

/// Encodes `icon` and writes it to `path`, replacing any existing file.
pub fn write(icon: &RgbaImage, path: &Path) -> Result<()> {
    let data = encode(icon).map_err(|source| Error::Encode {
        path: path.to_owned(),
        source,
    })?;
    std::fs::write(path, data).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn should_encode_rgba_png() {
        let icon = RgbaImage::from_pixel(8, 4, Rgba([10, 20, 30, 0]));
        let data = encode(&icon).unwrap();
        assert_eq!(&data[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&data).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgba8);
        assert_eq!(decoded.into_rgba8(), icon);
    }

    #[test]
    fn should_overwrite_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        std::fs::write(&path, b"stale").unwrap();

        write(&RgbaImage::new(2, 2), &path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (2, 2));
    }

    #[test]
    fn should_report_path_when_write_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("icon.png");

        let err = write(&RgbaImage::new(2, 2), &path).unwrap_err();

        match err {
            Error::Io { path: err_path, .. } => assert_eq!(err_path, path),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
