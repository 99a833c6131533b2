use image::{DynamicImage, ImageFormat};

use crate::error::PipelineError;
use crate::models::ImageContent;

/// Decode attachment bytes into a pixel grid.
///
/// The declared content type selects the codec: exactly `image/jpeg` or
/// `image/png` is accepted, anything else fails with
/// [`PipelineError::UnsupportedContentType`]. Bytes that do not parse under
/// the declared codec fail with [`PipelineError::Decode`].
pub fn decode(content: &ImageContent) -> Result<DynamicImage, PipelineError> {
    let format = match content.content_type.as_str() {
        "image/jpeg" => ImageFormat::Jpeg,
        "image/png" => ImageFormat::Png,
        other => return Err(PipelineError::UnsupportedContentType(other.to_string())),
    };

    let img = image::load_from_memory_with_format(&content.bytes, format)?;
    Ok(img)
}
