//! PNG export.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::error::Result;

/// Encode a rendered label as PNG bytes.
pub fn encode_png(label: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    label.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Write a rendered label to `path` as PNG, whatever the extension.
pub fn save_png(label: &RgbImage, path: &Path) -> Result<()> {
    std::fs::write(path, encode_png(label)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_png_signature() {
        let label = RgbImage::from_pixel(4, 3, image::Rgb([95, 178, 34]));
        let bytes = encode_png(&label).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(*decoded.get_pixel(3, 2), image::Rgb([95, 178, 34]));
    }
}
