use image::{DynamicImage, ImageFormat};

use crate::error::PipelineError;

/// Encode a pixel grid as JPEG at the encoder's default quality.
///
/// JPEG has no 16-bit channel and no alpha, so grids are flattened to 8-bit
/// grayscale or RGB at the codec boundary. The in-memory grid keeps its
/// native depth.
pub fn encode_jpeg(img: &DynamicImage) -> Result<Vec<u8>, PipelineError> {
    let encodable = if img.color().has_color() {
        DynamicImage::ImageRgb8(img.to_rgb8())
    } else {
        DynamicImage::ImageLuma8(img.to_luma8())
    };

    let mut buf = std::io::Cursor::new(Vec::new());
    encodable
        .write_to(&mut buf, ImageFormat::Jpeg)
        .map_err(|e| PipelineError::Encode(e.to_string()))?;
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encodes_sixteen_bit_grayscale() {
        let img = DynamicImage::ImageLuma16(image::ImageBuffer::from_pixel(
            10,
            10,
            image::Luma([30_000u16]),
        ));
        let bytes = encode_jpeg(&img).unwrap();
        // JPEG SOI marker
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encodes_rgba_by_flattening() {
        let img = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            5,
            5,
            image::Rgba([255, 0, 0, 128]),
        ));
        assert!(encode_jpeg(&img).is_ok());
    }

    #[test]
    fn test_encode_preserves_dimensions() {
        let img = DynamicImage::ImageLuma16(image::ImageBuffer::from_pixel(
            33,
            21,
            image::Luma([1000u16]),
        ));
        let bytes = encode_jpeg(&img).unwrap();
        let back = image::load_from_memory_with_format(&bytes, ImageFormat::Jpeg).unwrap();
        assert_eq!((back.width(), back.height()), (33, 21));
    }
}
