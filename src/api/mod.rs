pub mod task;
pub mod webhook;

pub use task::{handle_task, TaskRequest, TaskResponse, __path_handle_task};
pub use webhook::{handle_webhook, WebhookResponse, SIGNATURE_HEADER, __path_handle_webhook};
