pub mod config;
pub mod event;

pub use config::RelayConfig;
pub use event::{Event, EventMessage, ImageContent, ReplyMessage, WebhookPayload};
