use image::{imageops::FilterType, DynamicImage};

/// Longest edge a thumbnail may have, in pixels.
pub const MAX_THUMBNAIL_EDGE: u32 = 300;

/// Resample a pixel grid to fit within [`MAX_THUMBNAIL_EDGE`] squared,
/// preserving aspect ratio, with a 3-lobe Lanczos kernel.
///
/// The box is an upper bound, not a target: images already inside it are
/// returned unchanged rather than upscaled.
pub fn thumbnail(img: &DynamicImage) -> DynamicImage {
    if img.width() <= MAX_THUMBNAIL_EDGE && img.height() <= MAX_THUMBNAIL_EDGE {
        return img.clone();
    }
    img.resize(MAX_THUMBNAIL_EDGE, MAX_THUMBNAIL_EDGE, FilterType::Lanczos3)
}
