use image::DynamicImage;

/// Convert a pixel grid to 16-bit grayscale.
///
/// Luminance-weighted conversion over every pixel into a freshly allocated
/// grid of identical bounds. Pure and deterministic: the same input always
/// produces the same output bytes, and the transform is idempotent.
pub fn to_grayscale(img: &DynamicImage) -> DynamicImage {
    DynamicImage::ImageLuma16(img.to_luma16())
}
