use serde::Serialize;

pub const HELLO_CONTENT: &str = "hello world";

/// Discord-style webhook message. Only `content` is ever sent.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebhookMessage<'a> {
    pub content: &'a str,
}

impl WebhookMessage<'static> {
    pub const fn hello() -> Self {
        WebhookMessage {
            content: HELLO_CONTENT,
        }
    }
}

impl WebhookMessage<'_> {
    /// Serialized request body. Its length is what goes into `Content-Length`.
    pub fn to_body(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}
