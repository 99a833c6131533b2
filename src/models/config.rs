use std::collections::HashMap;

/// Runtime configuration, read from the environment once at startup and
/// passed by ownership into state construction. Nothing reads the
/// environment after this point.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// HMAC key for webhook signature verification
    pub channel_secret: String,

    /// Bearer token for the chat platform API
    pub channel_token: String,

    /// Object storage bucket receiving processed images
    pub bucket: String,

    /// Base URL for public object access
    pub storage_base_url: String,

    /// Chat platform API base URL
    pub chat_api_base: String,

    /// Internal task endpoint the webhook fans events out to
    pub task_endpoint: String,

    /// Address the HTTP server binds to
    pub bind_addr: String,
}

const DEFAULT_STORAGE_BASE_URL: &str = "https://storage.googleapis.com";
const DEFAULT_CHAT_API_BASE: &str = "https://api.chat.example.com";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

impl RelayConfig {
    /// Load configuration from environment variables.
    ///
    /// `CHANNEL_SECRET`, `CHANNEL_TOKEN`, and `BUCKET_NAME` are required;
    /// everything else has a default.
    pub fn from_env() -> anyhow::Result<Self> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    /// Build configuration from a variable map. Split out from
    /// [`RelayConfig::from_env`] so tests do not have to mutate
    /// process-wide environment state.
    pub fn from_vars(vars: &HashMap<String, String>) -> anyhow::Result<Self> {
        let required = |key: &str| -> anyhow::Result<String> {
            vars.get(key)
                .filter(|v| !v.is_empty())
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("missing required environment variable {key}"))
        };
        let optional = |key: &str, default: &str| -> String {
            vars.get(key)
                .filter(|v| !v.is_empty())
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };

        let bind_addr = optional("BIND_ADDR", DEFAULT_BIND_ADDR);

        // The webhook fans out to our own /task endpoint unless pointed
        // elsewhere (e.g. a separate worker deployment).
        let default_task = format!(
            "http://127.0.0.1:{}/task",
            bind_addr.rsplit(':').next().unwrap_or("3000")
        );

        Ok(Self {
            channel_secret: required("CHANNEL_SECRET")?,
            channel_token: required("CHANNEL_TOKEN")?,
            bucket: required("BUCKET_NAME")?,
            storage_base_url: optional("STORAGE_BASE_URL", DEFAULT_STORAGE_BASE_URL),
            chat_api_base: optional("CHAT_API_BASE", DEFAULT_CHAT_API_BASE),
            task_endpoint: optional("TASK_ENDPOINT", &default_task),
            bind_addr,
        })
    }

    /// Public URL of a stored object, path-style:
    /// `<storage-base-url>/<bucket>/<key>`.
    pub fn object_url(&self, key: &str) -> String {
        format!(
            "{}/{}/{}",
            self.storage_base_url.trim_end_matches('/'),
            self.bucket,
            key
        )
    }
}
