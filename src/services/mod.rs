pub mod chat;
pub mod queue;
pub mod relay;
pub mod signature;
pub mod storage;

pub use chat::{ChatClient, HttpChatClient};
pub use queue::{HttpTaskQueue, InMemoryQueue, TaskQueue};
pub use relay::{RelayService, FAILURE_TEXT, UNSUPPORTED_TEXT};
pub use storage::{ImageWriter, ObjectStore, S3Store};
