//! Shared fixtures: test configuration and in-memory test images.

use std::sync::Arc;

use grayrelay::models::{Event, EventMessage, ImageContent, RelayConfig};
use image::{DynamicImage, ImageFormat};

pub fn test_config() -> Arc<RelayConfig> {
    Arc::new(RelayConfig {
        channel_secret: "test-channel-secret".to_string(),
        channel_token: "test-channel-token".to_string(),
        bucket: "relay-images".to_string(),
        storage_base_url: "https://storage.googleapis.com".to_string(),
        chat_api_base: "https://api.chat.example.com".to_string(),
        task_endpoint: "http://127.0.0.1:3000/task".to_string(),
        bind_addr: "0.0.0.0:3000".to_string(),
    })
}

/// Encode a gradient RGB image of the given size to PNG bytes.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, ImageFormat::Png)
}

/// Encode a gradient RGB image of the given size to JPEG bytes.
pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, ImageFormat::Jpeg)
}

fn encode(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    let mut buf = std::io::Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, format)
        .expect("fixture image encodes");
    buf.into_inner()
}

pub fn png_content(width: u32, height: u32) -> ImageContent {
    ImageContent {
        bytes: png_bytes(width, height),
        content_type: "image/png".to_string(),
    }
}

pub fn text_event(reply_token: &str, text: &str) -> Event {
    Event {
        reply_token: reply_token.to_string(),
        message: EventMessage::Text {
            text: text.to_string(),
        },
    }
}

pub fn image_event(reply_token: &str, message_id: &str) -> Event {
    Event {
        reply_token: reply_token.to_string(),
        message: EventMessage::Image {
            id: message_id.to_string(),
        },
    }
}
