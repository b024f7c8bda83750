use thiserror::Error;

/// Why a catalog request did not produce products
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Connection, TLS or transport failure
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx response; `message` is taken from the envelope when present
    #[error("API returned {status}{}", message_suffix(.message))]
    Status { status: u16, message: Option<String> },

    #[error("Undecodable response: {0}")]
    Decode(#[from] serde_json::Error),

    /// 2xx response carrying `success: false`
    #[error("API error: {message}")]
    Api {
        message: String,
        error: Option<String>,
    },
}

pub type StorefrontResult<T> = Result<T, StorefrontError>;

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}
